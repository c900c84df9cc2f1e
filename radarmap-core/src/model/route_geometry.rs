use super::{Coordinate, RouteSource};
use geo::{line_measures::LengthMeasurable, Haversine, LineString};
use serde::Serialize;

/// the drawable path of a section device.
///
/// the path always has at least two vertices. a [`RouteSource::Fallback`] path is
/// exactly `[start, end]`. a [`RouteSource::Routed`] path is whatever the routing
/// service returned; its first and last vertices may be snapped onto the nearest
/// road and so only approximately equal the queried endpoints (service-dependent,
/// not bit-exact).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteGeometry {
    path: Vec<Coordinate>,
    source: RouteSource,
}

impl RouteGeometry {
    /// wraps a road-following path. returns None for paths with fewer than two vertices.
    pub fn routed(path: Vec<Coordinate>) -> Option<RouteGeometry> {
        (path.len() >= 2).then_some(RouteGeometry {
            path,
            source: RouteSource::Routed,
        })
    }

    /// straight line between the two endpoints.
    pub fn fallback(start: Coordinate, end: Coordinate) -> RouteGeometry {
        RouteGeometry {
            path: vec![start, end],
            source: RouteSource::Fallback,
        }
    }

    pub fn path(&self) -> &[Coordinate] {
        &self.path
    }

    pub fn source(&self) -> RouteSource {
        self.source
    }

    pub fn is_fallback(&self) -> bool {
        self.source == RouteSource::Fallback
    }

    pub fn first(&self) -> Coordinate {
        self.path[0]
    }

    pub fn last(&self) -> Coordinate {
        self.path[self.path.len() - 1]
    }

    pub fn to_line_string(&self) -> LineString<f64> {
        LineString::from_iter(self.path.iter().map(|c| geo::Coord::from(*c)))
    }

    /// haversine length of the path in meters
    pub fn length_meters(&self) -> f64 {
        self.to_line_string().length(&Haversine)
    }
}

use geo::{Coord, Point};
use serde::Serialize;
use std::fmt::Display;

/// a WGS84 position in decimal degrees.
///
/// stored latitude-first, which is the axis order used everywhere in radarmap.
/// conversions into `geo` types and GeoJSON positions swap to (x=longitude, y=latitude).
/// a [`Coordinate`] can only be built from finite, in-range values, see [`Coordinate::try_new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    /// creates a coordinate, returning None when either value is NaN, infinite,
    /// or outside of the WGS84 latitude/longitude ranges.
    pub fn try_new(lat: f64, lon: f64) -> Option<Coordinate> {
        let finite = lat.is_finite() && lon.is_finite();
        let in_range = (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon);
        (finite && in_range).then_some(Coordinate { lat, lon })
    }

    /// creates a coordinate from a position in (longitude, latitude) axis order,
    /// as returned by routing services and GeoJSON documents.
    pub fn from_lon_lat(position: &[f64]) -> Option<Coordinate> {
        match position {
            [lon, lat, ..] => Coordinate::try_new(*lat, *lon),
            _ => None,
        }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// GeoJSON position for this coordinate, `[lon, lat]`.
    pub fn to_position(&self) -> Vec<f64> {
        vec![self.lon, self.lat]
    }

    /// true when both axes differ by no more than `tolerance` degrees.
    pub fn approx_eq(&self, other: &Coordinate, tolerance: f64) -> bool {
        (self.lat - other.lat).abs() <= tolerance && (self.lon - other.lon).abs() <= tolerance
    }
}

impl From<Coordinate> for Coord<f64> {
    fn from(value: Coordinate) -> Self {
        Coord {
            x: value.lon,
            y: value.lat,
        }
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(value: Coordinate) -> Self {
        Point::new(value.lon, value.lat)
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lon)
    }
}

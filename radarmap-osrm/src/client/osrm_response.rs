use crate::RoutingError;
use radarmap_core::model::Coordinate;
use serde::Deserialize;

/// body of an OSRM `route` response requested with `geometries=geojson`.
/// see <https://project-osrm.org/docs/v5.24.0/api/#route-service>
#[derive(Debug, Clone, Deserialize)]
pub struct OsrmRouteResponse {
    pub code: String,
    pub message: Option<String>,
    #[serde(default)]
    pub routes: Vec<OsrmRoute>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OsrmRoute {
    pub geometry: Option<OsrmGeometry>,
}

/// GeoJSON LineString geometry. positions are `[lon, lat]`.
#[derive(Debug, Clone, Deserialize)]
pub struct OsrmGeometry {
    #[serde(default)]
    pub coordinates: Vec<Vec<f64>>,
}

impl OsrmRouteResponse {
    /// path of the first route, transposed into latitude-first coordinates.
    pub fn into_path(self) -> Result<Vec<Coordinate>, RoutingError> {
        if self.code != "Ok" {
            return Err(RoutingError::NoRoute {
                code: self.code,
                message: self.message.unwrap_or_default(),
            });
        }
        let positions = self
            .routes
            .into_iter()
            .next()
            .and_then(|route| route.geometry)
            .map(|geometry| geometry.coordinates)
            .unwrap_or_default();
        if positions.len() < 2 {
            return Err(RoutingError::InsufficientGeometry(positions.len()));
        }
        positions
            .into_iter()
            .map(|position| {
                Coordinate::from_lon_lat(&position).ok_or(RoutingError::InvalidPosition(position))
            })
            .collect()
    }
}

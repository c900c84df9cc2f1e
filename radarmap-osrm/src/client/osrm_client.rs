use super::{OsrmConfig, OsrmRouteResponse};
use crate::{RouteProvider, RoutingError};
use radarmap_core::model::Coordinate;
use std::time::Duration;

const ROUTE_QUERY: &str = "overview=full&geometries=geojson&alternatives=false&steps=false";

/// HTTP client for the OSRM `route` service.
#[derive(Debug, Clone)]
pub struct OsrmClient {
    client: reqwest::Client,
    config: OsrmConfig,
}

impl OsrmClient {
    pub fn new(config: OsrmConfig) -> Result<OsrmClient, RoutingError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| RoutingError::ClientBuildError(e.to_string()))?;
        Ok(OsrmClient { client, config })
    }

    /// request URL for a single route with full GeoJSON geometry, no alternatives and
    /// no step instructions. waypoints are written in OSRM's `lon,lat` order.
    pub fn route_url(&self, start: &Coordinate, end: &Coordinate) -> String {
        format!(
            "{}/route/v1/{}/{},{};{},{}?{ROUTE_QUERY}",
            self.config.base_url.trim_end_matches('/'),
            self.config.profile,
            start.lon(),
            start.lat(),
            end.lon(),
            end.lat(),
        )
    }
}

impl RouteProvider for OsrmClient {
    async fn route(
        &self,
        start: Coordinate,
        end: Coordinate,
    ) -> Result<Vec<Coordinate>, RoutingError> {
        let url = self.route_url(&start, &end);
        log::debug!("GET {url}");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| RoutingError::TransportError {
                url: url.clone(),
                message: e.to_string(),
            })?;
        let status = response.status();
        if !status.is_success() {
            return Err(RoutingError::HttpStatusError {
                url,
                status: status.as_u16(),
            });
        }
        let body = response
            .text()
            .await
            .map_err(|e| RoutingError::TransportError {
                url: url.clone(),
                message: format!("failure reading response body: {e}"),
            })?;
        let parsed: OsrmRouteResponse = serde_json::from_str(&body)?;
        parsed.into_path()
    }
}

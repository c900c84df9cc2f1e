mod osrm_client;
mod osrm_config;
mod osrm_response;

pub use osrm_client::OsrmClient;
pub use osrm_config::OsrmConfig;
pub use osrm_response::{OsrmGeometry, OsrmRoute, OsrmRouteResponse};

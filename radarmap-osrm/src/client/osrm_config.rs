use serde::{Deserialize, Serialize};

pub const DEFAULT_OSRM_URL: &str = "https://router.project-osrm.org";

/// connection settings for an OSRM routing service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OsrmConfig {
    /// service root, without the `/route/v1` path
    pub base_url: String,
    /// OSRM profile segment of the request path
    pub profile: String,
    /// transport-level timeout applied to each request
    pub timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_OSRM_URL),
            profile: String::from("driving"),
            timeout_seconds: 15,
            user_agent: format!("radarmap/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

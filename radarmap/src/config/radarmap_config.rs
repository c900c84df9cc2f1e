use super::ConfigError;
use crate::source::SourceConfig;
use radarmap_core::extract::{ExtractionMode, FieldCatalog};
use radarmap_osrm::{OsrmConfig, PacingPolicy};
use serde::{Deserialize, Serialize};

/// fraction of the data extent added on every side of the output bounding box
pub const DEFAULT_BOUNDS_PADDING: f64 = 0.0;

/// everything a run needs besides the input location. every field is optional in a
/// configuration file; omitted fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadarmapConfig {
    pub osrm: OsrmConfig,
    /// minimum pause between consecutive routing requests, in milliseconds
    pub pacing_ms: u64,
    /// when false no routing request is sent and every segment is a straight line
    pub routing_enabled: bool,
    pub mode: ExtractionMode,
    pub fields: FieldCatalog,
    pub source: SourceConfig,
    pub bounds_padding: f64,
}

impl Default for RadarmapConfig {
    fn default() -> Self {
        Self {
            osrm: OsrmConfig::default(),
            pacing_ms: radarmap_osrm::queue::DEFAULT_MIN_INTERVAL_MS,
            routing_enabled: true,
            mode: ExtractionMode::default(),
            fields: FieldCatalog::default(),
            source: SourceConfig::default(),
            bounds_padding: DEFAULT_BOUNDS_PADDING,
        }
    }
}

impl RadarmapConfig {
    pub fn pacing(&self) -> PacingPolicy {
        PacingPolicy::from_millis(self.pacing_ms)
    }
}

impl TryFrom<&String> for RadarmapConfig {
    type Error = ConfigError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        let read = || {
            std::fs::read_to_string(f).map_err(|e| ConfigError::ReadError {
                file: f.clone(),
                message: e.to_string(),
            })
        };
        let decode_error = |message: String| ConfigError::DecodeError {
            file: f.clone(),
            message,
        };
        if f.ends_with(".toml") {
            let s = read()?;
            toml::from_str(&s).map_err(|e| decode_error(e.to_string()))
        } else if f.ends_with(".json") {
            let s = read()?;
            serde_json::from_str(&s).map_err(|e| decode_error(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFileType(f.clone()))
        }
    }
}

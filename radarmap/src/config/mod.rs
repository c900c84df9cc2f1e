mod config_error;
mod radarmap_config;

pub use config_error::ConfigError;
pub use radarmap_config::{RadarmapConfig, DEFAULT_BOUNDS_PADDING};

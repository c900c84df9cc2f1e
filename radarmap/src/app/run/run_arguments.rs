use crate::{app::RadarmapError, config::RadarmapConfig};
use radarmap_core::extract::ExtractionMode;
use std::time::Duration;

/// inputs of one `radarmap run` invocation. values given here take precedence over
/// the configuration file.
#[derive(Debug, Clone, Default)]
pub struct RunArguments {
    pub input: String,
    pub config: Option<String>,
    pub output: Option<String>,
    pub pacing: Option<Duration>,
    pub osrm_url: Option<String>,
    pub mode: Option<ExtractionMode>,
    pub no_routing: bool,
    pub progress: bool,
}

impl RunArguments {
    /// loads the configuration file, if any, and applies the command line overrides.
    pub fn build_config(&self) -> Result<RadarmapConfig, RadarmapError> {
        let mut config = match &self.config {
            Some(file) => RadarmapConfig::try_from(file)?,
            None => RadarmapConfig::default(),
        };
        if let Some(pacing) = self.pacing {
            config.pacing_ms = u64::try_from(pacing.as_millis()).map_err(|_| {
                RadarmapError::InvalidArgument(format!("pacing {pacing:?} is too large"))
            })?;
        }
        if let Some(url) = &self.osrm_url {
            config.osrm.base_url = url.clone();
        }
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if self.no_routing {
            config.routing_enabled = false;
        }
        if !config.bounds_padding.is_finite() || config.bounds_padding < 0.0 {
            return Err(RadarmapError::InvalidArgument(format!(
                "bounds_padding must be a non-negative number, found {}",
                config.bounds_padding
            )));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::RunArguments;
    use crate::app::RadarmapError;
    use radarmap_core::extract::ExtractionMode;
    use std::time::Duration;

    #[test]
    fn test_overrides() {
        let args = RunArguments {
            input: String::from("radares.csv"),
            pacing: Some(Duration::from_secs(1)),
            osrm_url: Some(String::from("http://localhost:5000")),
            mode: Some(ExtractionMode::Points),
            no_routing: true,
            ..Default::default()
        };
        let config = args.build_config().unwrap();
        assert_eq!(config.pacing_ms, 1000);
        assert_eq!(config.osrm.base_url, "http://localhost:5000");
        assert_eq!(config.mode, ExtractionMode::Points);
        assert!(!config.routing_enabled);
    }

    #[test]
    fn test_missing_config_file() {
        let args = RunArguments {
            input: String::from("radares.csv"),
            config: Some(String::from("does/not/exist.toml")),
            ..Default::default()
        };
        assert!(matches!(
            args.build_config(),
            Err(RadarmapError::ConfigError { .. })
        ));
    }
}

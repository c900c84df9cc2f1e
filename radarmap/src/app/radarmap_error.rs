use crate::{config::ConfigError, output::OutputError, source::SourceError};
use radarmap_osrm::RoutingError;

#[derive(thiserror::Error, Debug)]
pub enum RadarmapError {
    #[error("no data processed: {source}")]
    SourceError {
        #[from]
        source: SourceError,
    },
    #[error("failure loading configuration: {source}")]
    ConfigError {
        #[from]
        source: ConfigError,
    },
    #[error("failure building routing client: {source}")]
    RoutingError {
        #[from]
        source: RoutingError,
    },
    #[error(transparent)]
    OutputError(#[from] OutputError),
    #[error("failure building async runtime: {0}")]
    RuntimeError(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

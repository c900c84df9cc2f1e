#[derive(thiserror::Error, Debug)]
pub enum RoutingError {
    #[error("failure building HTTP client: {0}")]
    ClientBuildError(String),
    #[error("request to '{url}' failed: {message}")]
    TransportError { url: String, message: String },
    #[error("routing service responded with HTTP {status} for '{url}'")]
    HttpStatusError { url: String, status: u16 },
    #[error("failure decoding routing response: {source}")]
    DecodeError {
        #[from]
        source: serde_json::Error,
    },
    #[error("routing service found no route ({code}): {message}")]
    NoRoute { code: String, message: String },
    #[error("route geometry has {0} positions, at least 2 are required")]
    InsufficientGeometry(usize),
    #[error("route geometry contains an invalid position: {0:?}")]
    InvalidPosition(Vec<f64>),
    #[error("routing cancelled before the request was sent")]
    Cancelled,
}

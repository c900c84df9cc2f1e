#[derive(thiserror::Error, Debug)]
pub enum OutputError {
    #[error("failure writing output to {destination}: {source}")]
    WriteError {
        destination: String,
        source: std::io::Error,
    },
    #[error("failure serializing feature collection: {source}")]
    SerializeError {
        #[from]
        source: serde_json::Error,
    },
}

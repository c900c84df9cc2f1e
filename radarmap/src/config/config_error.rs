#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failure reading {file}: {message}")]
    ReadError { file: String, message: String },
    #[error("failure decoding {file}: {message}")]
    DecodeError { file: String, message: String },
    #[error("unsupported file type: {0}")]
    UnsupportedFileType(String),
}

#[derive(thiserror::Error, Debug)]
pub enum SourceError {
    #[error("failure reading '{location}': {message}")]
    ReadError { location: String, message: String },
    #[error("failure fetching '{url}': {message}")]
    FetchError { url: String, message: String },
    #[error("'{location}' is not UTF-8 (invalid byte at offset {offset}), re-encode it as UTF-8")]
    EncodingError { location: String, offset: usize },
    #[error("failure parsing CSV rows: {source}")]
    CsvError {
        #[from]
        source: csv::Error,
    },
    #[error("failure parsing JSON rows: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },
    #[error("cannot infer the format of '{0}', set source.format to 'csv' or 'json'")]
    UnknownFormat(String),
    #[error("invalid CSV delimiter {0:?}, must be a single ASCII character")]
    InvalidDelimiter(char),
}

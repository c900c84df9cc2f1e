mod source_config;
mod source_error;
mod source_format;
mod tabular_source;

pub use source_config::SourceConfig;
pub use source_error::SourceError;
pub use source_format::SourceFormat;
pub use tabular_source::{rows_from_csv, rows_from_json, TabularSource};

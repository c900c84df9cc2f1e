use super::SourceFormat;
use serde::{Deserialize, Serialize};

/// how the tabular row source is parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// forces a format instead of inferring it from the file extension
    pub format: Option<SourceFormat>,
    /// CSV field delimiter. Spanish spreadsheet exports commonly use ';'
    pub delimiter: char,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            format: None,
            delimiter: ',',
        }
    }
}

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// which extraction strategies are attempted on each row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMode {
    /// sheets mixing device kinds. the segment strategy runs first and the point
    /// strategy only sees rows without a usable section start.
    #[default]
    Auto,
    /// fixed-position device sheets
    Points,
    /// section device sheets
    Segments,
}

impl Display for ExtractionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ExtractionMode::Auto => "auto",
            ExtractionMode::Points => "points",
            ExtractionMode::Segments => "segments",
        };
        write!(f, "{s}")
    }
}

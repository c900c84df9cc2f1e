//! GeoJSON hand-off to the rendering side.
mod geojson_ops;
mod output_error;

pub use geojson_ops::{to_feature_collection, write_feature_collection};
pub use output_error::OutputError;

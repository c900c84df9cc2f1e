//! one dataset end to end: extraction, route materialization and bounds folding.
mod pipeline_ops;
mod pipeline_output;
mod run_summary;

pub use pipeline_ops::run_pipeline;
pub use pipeline_output::{PipelineOutput, RoutedSegment};
pub use run_summary::RunSummary;

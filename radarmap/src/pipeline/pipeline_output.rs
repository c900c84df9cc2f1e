use super::RunSummary;
use radarmap_core::bounds::ViewportBounds;
use radarmap_core::model::{PointRecord, RouteGeometry, SegmentRecord};
use serde::Serialize;

/// a complete section device with the geometry drawn for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutedSegment {
    pub segment: SegmentRecord,
    pub geometry: RouteGeometry,
}

/// everything handed to the rendering side after one dataset was processed.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    pub points: Vec<PointRecord>,
    /// sections published without an end, drawn as a point at their start
    pub start_only: Vec<SegmentRecord>,
    /// complete sections in dataset order
    pub routes: Vec<RoutedSegment>,
    pub bounds: ViewportBounds,
    pub summary: RunSummary,
}

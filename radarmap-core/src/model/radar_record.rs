use super::{PointRecord, SegmentRecord};
use serde::Serialize;

/// the result of extracting a single accepted row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RadarRecord {
    Point(PointRecord),
    Segment(SegmentRecord),
}

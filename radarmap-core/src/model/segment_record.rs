use super::Coordinate;
use serde::Serialize;

/// a section (tramo) device monitoring the road between `start` and `end`.
///
/// a record without an `end` still carries its `start` and is drawn as a point
/// instead of being dropped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentRecord {
    pub start: Coordinate,
    pub end: Option<Coordinate>,
    pub speed_limit: Option<String>,
    pub label: Option<String>,
}

impl SegmentRecord {
    /// both endpoints when this segment can be routed.
    pub fn endpoints(&self) -> Option<(Coordinate, Coordinate)> {
        self.end.map(|end| (self.start, end))
    }

    pub fn is_start_only(&self) -> bool {
        self.end.is_none()
    }
}

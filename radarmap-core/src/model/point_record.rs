use super::Coordinate;
use serde::Serialize;

/// a fixed-position enforcement device.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointRecord {
    pub location: Coordinate,
    pub speed_limit: Option<String>,
    pub label: Option<String>,
}

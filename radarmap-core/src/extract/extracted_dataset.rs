use crate::model::{PointRecord, RadarRecord, SegmentRecord};

/// all records accepted from one dataset, in row order, with the aggregate tally.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedDataset {
    pub points: Vec<PointRecord>,
    pub segments: Vec<SegmentRecord>,
    pub rows_processed: usize,
    pub rows_rejected: usize,
}

impl ExtractedDataset {
    /// counts one row and files its record, if any.
    pub fn add(&mut self, record: Option<RadarRecord>) {
        self.rows_processed += 1;
        match record {
            Some(RadarRecord::Point(p)) => self.points.push(p),
            Some(RadarRecord::Segment(s)) => self.segments.push(s),
            None => self.rows_rejected += 1,
        }
    }

    /// segments with both endpoints, in dataset order.
    pub fn routable_segments(&self) -> impl Iterator<Item = &SegmentRecord> {
        self.segments.iter().filter(|s| !s.is_start_only())
    }

    /// segments published without an end coordinate, in dataset order.
    pub fn start_only_segments(&self) -> impl Iterator<Item = &SegmentRecord> {
        self.segments.iter().filter(|s| s.is_start_only())
    }
}

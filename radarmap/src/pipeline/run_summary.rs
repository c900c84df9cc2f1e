use serde::Serialize;
use std::fmt::Display;

/// aggregate counts reported at the end of a run in place of per-row diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub rows_processed: usize,
    pub rows_rejected: usize,
    pub points: usize,
    pub segments_routed: usize,
    pub segments_fallback: usize,
    pub segments_start_only: usize,
}

impl Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} rows ({} rejected), {} points, {} segments routed, {} fallen back, {} start-only",
            self.rows_processed,
            self.rows_rejected,
            self.points,
            self.segments_routed,
            self.segments_fallback,
            self.segments_start_only
        )
    }
}

#[cfg(test)]
mod tests {
    use super::RunSummary;

    #[test]
    fn test_display() {
        let summary = RunSummary {
            rows_processed: 10,
            rows_rejected: 2,
            points: 5,
            segments_routed: 2,
            segments_fallback: 1,
            segments_start_only: 0,
        };
        assert_eq!(
            summary.to_string(),
            "10 rows (2 rejected), 5 points, 2 segments routed, 1 fallen back, 0 start-only"
        );
    }
}

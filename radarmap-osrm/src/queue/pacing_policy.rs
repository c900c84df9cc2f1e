use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_MIN_INTERVAL_MS: u64 = 120;

/// self-imposed rate limit for a shared routing service: the minimum pause between
/// the completion of one request and the start of the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PacingPolicy {
    pub min_interval: Duration,
}

impl PacingPolicy {
    pub fn new(min_interval: Duration) -> PacingPolicy {
        PacingPolicy { min_interval }
    }

    pub fn from_millis(millis: u64) -> PacingPolicy {
        PacingPolicy::new(Duration::from_millis(millis))
    }
}

impl Default for PacingPolicy {
    fn default() -> Self {
        PacingPolicy::from_millis(DEFAULT_MIN_INTERVAL_MS)
    }
}

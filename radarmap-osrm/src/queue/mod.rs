mod cancellation_flag;
mod pacing_policy;
mod route_queue;

pub use cancellation_flag::CancellationFlag;
pub use pacing_policy::{PacingPolicy, DEFAULT_MIN_INTERVAL_MS};
pub use route_queue::RouteQueue;

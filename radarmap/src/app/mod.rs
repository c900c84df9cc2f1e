mod radarmap_app;
mod radarmap_error;
pub mod run;

pub use radarmap_app::{RadarmapApp, RadarmapOperation};
pub use radarmap_error::RadarmapError;

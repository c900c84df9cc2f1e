//! locale-tolerant conversion of raw cells into numbers and coordinates.
mod numeric_ops;

pub use numeric_ops::{to_coordinate, to_number};

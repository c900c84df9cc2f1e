//! reads a traffic-enforcement device dataset, resolves its columns, routes its
//! section devices along the road network and emits GeoJSON for display.
pub mod app;
pub mod config;
pub mod output;
pub mod pipeline;
pub mod source;

//! road-following geometry for section devices.
//!
//! a [`RouteProvider`] answers single start/end routing requests; [`OsrmClient`]
//! is the HTTP implementation against an OSRM `route` service. the [`RouteQueue`]
//! drives a provider strictly one request at a time with a minimum pause between
//! requests, and substitutes a straight line for any request that fails.
pub mod client;
pub mod queue;

mod route_provider;
mod routing_error;

pub use client::{OsrmClient, OsrmConfig};
pub use queue::{CancellationFlag, PacingPolicy, RouteQueue};
pub use route_provider::RouteProvider;
pub use routing_error::RoutingError;

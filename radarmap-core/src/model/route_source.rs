use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// how a [`super::RouteGeometry`] path was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteSource {
    /// road-following geometry returned by the routing service
    Routed,
    /// direct two-point line substituted when routing was unavailable
    Fallback,
}

impl Display for RouteSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RouteSource::Routed => "routed",
            RouteSource::Fallback => "fallback",
        };
        write!(f, "{s}")
    }
}

use crate::RoutingError;
use radarmap_core::model::Coordinate;
use std::future::Future;

/// a routing service able to return a road-following path between two coordinates.
pub trait RouteProvider {
    /// path from `start` to `end` in latitude-first [`Coordinate`]s. implementations
    /// translate from whatever axis order the service uses.
    fn route(
        &self,
        start: Coordinate,
        end: Coordinate,
    ) -> impl Future<Output = Result<Vec<Coordinate>, RoutingError>>;
}

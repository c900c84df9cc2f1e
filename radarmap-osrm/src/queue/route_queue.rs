use super::{CancellationFlag, PacingPolicy};
use crate::{RouteProvider, RoutingError};
use kdam::{Bar, BarExt};
use radarmap_core::model::{Coordinate, RouteGeometry};
use tokio::time::Instant;

/// materializes routes for a sequence of start/end requests, one request at a time.
///
/// requests run strictly in input order and never overlap. after a request
/// completes, the next one waits until [`PacingPolicy::min_interval`] has elapsed.
/// every request produces exactly one [`RouteGeometry`]: a failure of any kind, or
/// a raised [`CancellationFlag`], yields the straight-line fallback for that request
/// and the queue moves on.
pub struct RouteQueue<P> {
    provider: P,
    pacing: PacingPolicy,
    cancellation: CancellationFlag,
    progress: bool,
}

impl<P> RouteQueue<P>
where
    P: RouteProvider,
{
    pub fn new(provider: P, pacing: PacingPolicy) -> RouteQueue<P> {
        RouteQueue {
            provider,
            pacing,
            cancellation: CancellationFlag::default(),
            progress: false,
        }
    }

    pub fn with_cancellation(mut self, cancellation: CancellationFlag) -> RouteQueue<P> {
        self.cancellation = cancellation;
        self
    }

    /// show a terminal progress bar while the queue runs
    pub fn with_progress(mut self, progress: bool) -> RouteQueue<P> {
        self.progress = progress;
        self
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// runs every request and returns one geometry per request, in request order.
    pub async fn materialize(&self, requests: &[(Coordinate, Coordinate)]) -> Vec<RouteGeometry> {
        let mut bar = self.progress_bar(requests.len());
        let mut last_completed: Option<Instant> = None;
        let mut geometries = Vec::with_capacity(requests.len());

        for (index, (start, end)) in requests.iter().enumerate() {
            let result = self.fetch(*start, *end, &mut last_completed).await;
            geometries.push(into_geometry(index, *start, *end, result));
            if let Some(bar) = bar.as_mut() {
                let _ = bar.update(1);
            }
        }
        if bar.is_some() {
            eprintln!();
        }

        let fallbacks = geometries.iter().filter(|g| g.is_fallback()).count();
        log::info!(
            "materialized {} routes ({} routed, {} fallback)",
            geometries.len(),
            geometries.len() - fallbacks,
            fallbacks
        );
        geometries
    }

    /// waits out the pacing interval, then issues one request.
    async fn fetch(
        &self,
        start: Coordinate,
        end: Coordinate,
        last_completed: &mut Option<Instant>,
    ) -> Result<Vec<Coordinate>, RoutingError> {
        if self.cancellation.is_cancelled() {
            return Err(RoutingError::Cancelled);
        }
        if let Some(completed) = *last_completed {
            tokio::time::sleep_until(completed + self.pacing.min_interval).await;
            if self.cancellation.is_cancelled() {
                return Err(RoutingError::Cancelled);
            }
        }
        let result = self.provider.route(start, end).await;
        *last_completed = Some(Instant::now());
        result
    }

    fn progress_bar(&self, total: usize) -> Option<Bar> {
        if !self.progress {
            return None;
        }
        Bar::builder()
            .total(total)
            .desc("routing section segments")
            .build()
            .map_err(|e| log::warn!("error building progress bar: {e}"))
            .ok()
    }
}

fn into_geometry(
    index: usize,
    start: Coordinate,
    end: Coordinate,
    result: Result<Vec<Coordinate>, RoutingError>,
) -> RouteGeometry {
    let routed = result.and_then(|path| {
        let n = path.len();
        RouteGeometry::routed(path).ok_or(RoutingError::InsufficientGeometry(n))
    });
    match routed {
        Ok(geometry) => {
            log::debug!("segment {index}: routed with {} vertices", geometry.path().len());
            geometry
        }
        Err(RoutingError::Cancelled) => {
            log::debug!("segment {index}: cancelled, using straight line");
            RouteGeometry::fallback(start, end)
        }
        Err(e) => {
            log::warn!("segment {index} ({start} -> {end}): {e}, using straight line");
            RouteGeometry::fallback(start, end)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RouteQueue;
    use crate::{CancellationFlag, PacingPolicy, RouteProvider, RoutingError};
    use radarmap_core::model::{Coordinate, RouteSource};
    use std::collections::HashSet;
    use std::sync::Mutex;
    use std::time::{Duration, Instant};

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::try_new(lat, lon).unwrap()
    }

    fn requests(n: usize) -> Vec<(Coordinate, Coordinate)> {
        (0..n)
            .map(|i| {
                let offset = i as f64 * 0.1;
                (coord(40.0 + offset, -3.7), coord(40.05 + offset, -3.6))
            })
            .collect()
    }

    /// returns a three-vertex road path, or an empty geometry for scripted call indices
    struct ScriptedProvider {
        fail_on: HashSet<usize>,
        calls: Mutex<usize>,
        cancel_after: Option<(usize, CancellationFlag)>,
    }

    impl ScriptedProvider {
        fn new(fail_on: &[usize]) -> ScriptedProvider {
            ScriptedProvider {
                fail_on: fail_on.iter().copied().collect(),
                calls: Mutex::new(0),
                cancel_after: None,
            }
        }

        fn calls(&self) -> usize {
            *self.calls.lock().unwrap()
        }
    }

    impl RouteProvider for ScriptedProvider {
        async fn route(
            &self,
            start: Coordinate,
            end: Coordinate,
        ) -> Result<Vec<Coordinate>, RoutingError> {
            let call = {
                let mut calls = self.calls.lock().unwrap();
                *calls += 1;
                *calls - 1
            };
            if let Some((n, flag)) = &self.cancel_after {
                if call + 1 >= *n {
                    flag.cancel();
                }
            }
            if self.fail_on.contains(&call) {
                return Err(RoutingError::InsufficientGeometry(0));
            }
            let mid = coord((start.lat() + end.lat()) / 2.0, start.lon());
            Ok(vec![start, mid, end])
        }
    }

    /// records when each request starts and completes
    struct TimingProvider {
        latency: Duration,
        spans: Mutex<Vec<(Instant, Instant)>>,
    }

    impl RouteProvider for TimingProvider {
        async fn route(
            &self,
            start: Coordinate,
            end: Coordinate,
        ) -> Result<Vec<Coordinate>, RoutingError> {
            let started = Instant::now();
            tokio::time::sleep(self.latency).await;
            self.spans.lock().unwrap().push((started, Instant::now()));
            Ok(vec![start, end])
        }
    }

    /// snaps both endpoints onto a nearby road, as routing services do
    struct SnappingProvider;

    impl RouteProvider for SnappingProvider {
        async fn route(
            &self,
            start: Coordinate,
            end: Coordinate,
        ) -> Result<Vec<Coordinate>, RoutingError> {
            let snapped_start = coord(start.lat() + 0.0002, start.lon() - 0.0001);
            let snapped_end = coord(end.lat() - 0.0001, end.lon() + 0.0002);
            Ok(vec![snapped_start, snapped_end])
        }
    }

    /// returns a path that is too short to draw
    struct DegenerateProvider;

    impl RouteProvider for DegenerateProvider {
        async fn route(
            &self,
            start: Coordinate,
            _end: Coordinate,
        ) -> Result<Vec<Coordinate>, RoutingError> {
            Ok(vec![start])
        }
    }

    #[tokio::test]
    async fn test_failed_item_falls_back_in_place() {
        let queue = RouteQueue::new(ScriptedProvider::new(&[1]), PacingPolicy::from_millis(0));
        let reqs = requests(3);
        let result = queue.materialize(&reqs).await;

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].source(), RouteSource::Routed);
        assert_eq!(result[1].source(), RouteSource::Fallback);
        assert_eq!(result[2].source(), RouteSource::Routed);
        assert_eq!(result[1].path(), &[reqs[1].0, reqs[1].1]);
        for (geometry, (start, end)) in result.iter().zip(reqs.iter()) {
            assert!(geometry.path().len() >= 2);
            assert_eq!(geometry.first(), *start);
            assert_eq!(geometry.last(), *end);
        }
        assert_eq!(queue.provider().calls(), 3);
    }

    #[tokio::test]
    async fn test_every_item_failing_still_yields_every_geometry() {
        let queue = RouteQueue::new(
            ScriptedProvider::new(&[0, 1, 2, 3]),
            PacingPolicy::from_millis(0),
        );
        let result = queue.materialize(&requests(4)).await;
        assert_eq!(result.len(), 4);
        assert!(result.iter().all(|g| g.is_fallback() && g.path().len() == 2));
    }

    #[tokio::test]
    async fn test_degenerate_route_falls_back() {
        let queue = RouteQueue::new(DegenerateProvider, PacingPolicy::from_millis(0));
        let result = queue.materialize(&requests(1)).await;
        assert!(result[0].is_fallback());
    }

    #[tokio::test]
    async fn test_empty_queue() {
        let queue = RouteQueue::new(ScriptedProvider::new(&[]), PacingPolicy::default());
        assert!(queue.materialize(&[]).await.is_empty());
        assert_eq!(queue.provider().calls(), 0);
    }

    #[tokio::test]
    async fn test_requests_are_sequential_and_paced() {
        let interval = Duration::from_millis(30);
        let provider = TimingProvider {
            latency: Duration::from_millis(5),
            spans: Mutex::new(vec![]),
        };
        let queue = RouteQueue::new(provider, PacingPolicy::new(interval));
        let result = queue.materialize(&requests(4)).await;
        assert_eq!(result.len(), 4);

        let spans = queue.provider().spans.lock().unwrap().clone();
        assert_eq!(spans.len(), 4);
        for pair in spans.windows(2) {
            let (prev_start, prev_end) = pair[0];
            let (next_start, _) = pair[1];
            assert!(next_start > prev_start);
            assert!(
                next_start >= prev_end + interval,
                "request started {:?} after the previous one completed",
                next_start - prev_end
            );
        }
    }

    #[tokio::test]
    async fn test_cancelled_before_start() {
        let flag = CancellationFlag::new();
        flag.cancel();
        let queue = RouteQueue::new(ScriptedProvider::new(&[]), PacingPolicy::from_millis(0))
            .with_cancellation(flag);
        let result = queue.materialize(&requests(3)).await;
        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|g| g.is_fallback()));
        assert_eq!(queue.provider().calls(), 0);
    }

    #[tokio::test]
    async fn test_cancelled_midway() {
        let flag = CancellationFlag::new();
        let mut provider = ScriptedProvider::new(&[]);
        provider.cancel_after = Some((2, flag.clone()));
        let queue = RouteQueue::new(provider, PacingPolicy::from_millis(0)).with_cancellation(flag);
        let result = queue.materialize(&requests(4)).await;

        let sources = result.iter().map(|g| g.source()).collect::<Vec<_>>();
        assert_eq!(
            sources,
            vec![
                RouteSource::Routed,
                RouteSource::Routed,
                RouteSource::Fallback,
                RouteSource::Fallback
            ]
        );
        assert_eq!(queue.provider().calls(), 2);
    }

    #[tokio::test]
    async fn test_routed_endpoints_within_tolerance() {
        // about 100 m, generous for snapping onto the nearest road
        let tolerance = 0.001;
        let queue = RouteQueue::new(SnappingProvider, PacingPolicy::from_millis(0));
        let reqs = requests(2);
        let result = queue.materialize(&reqs).await;
        for (geometry, (start, end)) in result.iter().zip(reqs.iter()) {
            assert_eq!(geometry.source(), RouteSource::Routed);
            assert_ne!(geometry.first(), *start);
            assert!(geometry.first().approx_eq(start, tolerance));
            assert!(geometry.last().approx_eq(end, tolerance));
        }
    }
}

use super::{PipelineOutput, RoutedSegment, RunSummary};
use radarmap_core::bounds::ViewportBounds;
use radarmap_core::extract::{extract_dataset, ExtractionMode, FieldCatalog};
use radarmap_core::model::{Row, SegmentRecord};
use radarmap_osrm::{RouteProvider, RouteQueue};

/// processes one dataset. rows are extracted synchronously; the only suspension
/// point is the route queue. never fails: rejected rows are counted and failed
/// routes fall back to straight lines.
pub async fn run_pipeline<P>(
    rows: &[Row],
    catalog: &FieldCatalog,
    mode: ExtractionMode,
    queue: &RouteQueue<P>,
) -> PipelineOutput
where
    P: RouteProvider,
{
    let dataset = extract_dataset(rows, catalog, mode);
    let requests = dataset
        .routable_segments()
        .filter_map(SegmentRecord::endpoints)
        .collect::<Vec<_>>();
    let geometries = queue.materialize(&requests).await;
    let routes = dataset
        .routable_segments()
        .cloned()
        .zip(geometries)
        .map(|(segment, geometry)| RoutedSegment { segment, geometry })
        .collect::<Vec<_>>();
    let start_only = dataset.start_only_segments().cloned().collect::<Vec<_>>();

    let mut bounds = ViewportBounds::accumulate(dataset.points.iter().map(|p| p.location));
    bounds.extend(start_only.iter().map(|s| s.start));
    bounds.extend(routes.iter().flat_map(|r| r.geometry.path().iter().copied()));

    let segments_fallback = routes.iter().filter(|r| r.geometry.is_fallback()).count();
    let summary = RunSummary {
        rows_processed: dataset.rows_processed,
        rows_rejected: dataset.rows_rejected,
        points: dataset.points.len(),
        segments_routed: routes.len() - segments_fallback,
        segments_fallback,
        segments_start_only: start_only.len(),
    };

    PipelineOutput {
        points: dataset.points,
        start_only,
        routes,
        bounds,
        summary,
    }
}

use super::RunArguments;
use crate::{
    app::RadarmapError,
    config::RadarmapConfig,
    output::{to_feature_collection, write_feature_collection},
    pipeline::{run_pipeline, RunSummary},
    source::TabularSource,
};
use radarmap_osrm::{CancellationFlag, OsrmClient, RouteQueue};
use std::path::Path;

/// runs one dataset through the pipeline and writes the resulting GeoJSON.
///
/// all work happens on a single-threaded runtime; the routing queue is the only
/// place that suspends. the only failures returned are a dataset that cannot be
/// read and problems with the run setup or output destination.
pub fn run_radarmap(args: &RunArguments) -> Result<RunSummary, RadarmapError> {
    let config = args.build_config()?;
    log::debug!(
        "run_radarmap with input={}, osrm={}, pacing={}ms, mode={}, routing_enabled={}",
        args.input,
        config.osrm.base_url,
        config.pacing_ms,
        config.mode,
        config.routing_enabled
    );
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| RadarmapError::RuntimeError(e.to_string()))?;
    runtime.block_on(run_dataset(args, &config))
}

async fn run_dataset(
    args: &RunArguments,
    config: &RadarmapConfig,
) -> Result<RunSummary, RadarmapError> {
    let source = TabularSource::from(args.input.as_str());
    let rows = source.read_rows(&config.source).await?;

    let client = OsrmClient::new(config.osrm.clone())?;
    let cancellation = CancellationFlag::new();
    if !config.routing_enabled {
        log::info!("routing disabled, sections are drawn as straight lines");
        cancellation.cancel();
    }
    let queue = RouteQueue::new(client, config.pacing())
        .with_cancellation(cancellation)
        .with_progress(args.progress);

    let output = run_pipeline(&rows, &config.fields, config.mode, &queue).await;
    let collection = to_feature_collection(&output, config.bounds_padding);
    write_feature_collection(&collection, args.output.as_deref().map(Path::new))?;
    log::info!("{}", output.summary);
    Ok(output.summary)
}

#[cfg(test)]
mod tests {
    use super::run_radarmap;
    use crate::app::{run::RunArguments, RadarmapError};
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("radarmap_{}_{name}", std::process::id()))
    }

    #[test]
    fn test_run_without_routing() {
        let input = temp_path("input.csv");
        let output = temp_path("output.geojson");
        let content = [
            "Longitud,Latitud,Longitud inicio tramo,Latitud inicio tramo,\
             Longitud fin tramo,Latitud fin tramo,Velocidad límite",
            "-3.7038,40.4168,,,,,50",
            ",,-3.70,40.40,-3.60,40.50,100",
            ",,,,,,",
        ]
        .join("\n");
        std::fs::write(&input, content).unwrap();
        let args = RunArguments {
            input: input.to_string_lossy().to_string(),
            output: Some(output.to_string_lossy().to_string()),
            no_routing: true,
            ..Default::default()
        };
        let summary = run_radarmap(&args).unwrap();
        assert_eq!(summary.rows_processed, 3);
        assert_eq!(summary.rows_rejected, 1);
        assert_eq!(summary.points, 1);
        assert_eq!(summary.segments_routed, 0);
        assert_eq!(summary.segments_fallback, 1);

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written["type"], "FeatureCollection");
        assert_eq!(written["features"].as_array().unwrap().len(), 2);
        let _ = std::fs::remove_file(&input);
        let _ = std::fs::remove_file(&output);
    }

    #[test]
    fn test_unreadable_source_is_fatal() {
        let args = RunArguments {
            input: String::from("does/not/exist/radares.csv"),
            no_routing: true,
            ..Default::default()
        };
        let error = run_radarmap(&args).unwrap_err();
        assert!(matches!(error, RadarmapError::SourceError { .. }));
        assert!(error.to_string().starts_with("no data processed: "));
    }
}

use crate::app::{run::RunArguments, RadarmapError};
use crate::pipeline::RunSummary;
use clap::{Parser, Subcommand};
use radarmap_core::extract::ExtractionMode;
use std::time::Duration;

/// command line tool that turns traffic-enforcement device datasets into GeoJSON,
/// routing section devices along the road network
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct RadarmapApp {
    /// select the operation to run
    #[command(subcommand)]
    pub op: RadarmapOperation,
}

#[derive(Debug, Clone, Subcommand)]
pub enum RadarmapOperation {
    /// reads a device dataset, routes its sections and writes a GeoJSON
    /// FeatureCollection.
    Run {
        /// dataset location, a local .csv/.json file or an http(s) URL
        #[arg(short, long)]
        input: String,
        /// optional .toml or .json configuration file
        #[arg(short, long)]
        config: Option<String>,
        /// output GeoJSON file. written to stdout when omitted
        #[arg(short, long)]
        output: Option<String>,
        /// minimum pause between routing requests, in human-readable time
        /// values: 120ms, 1s, ...
        #[arg(long, value_parser = parse_duration)]
        pacing: Option<Duration>,
        /// OSRM service root URL
        #[arg(long)]
        osrm_url: Option<String>,
        /// which extraction strategy to apply to each row
        #[arg(long, value_enum)]
        mode: Option<ExtractionMode>,
        /// skip routing entirely, drawing every section as a straight line
        #[arg(long, default_value_t = false)]
        no_routing: bool,
        /// show a progress bar while routing
        #[arg(long, default_value_t = false)]
        progress: bool,
    },
}

impl RadarmapOperation {
    pub fn run(&self) -> Result<RunSummary, RadarmapError> {
        match self {
            RadarmapOperation::Run {
                input,
                config,
                output,
                pacing,
                osrm_url,
                mode,
                no_routing,
                progress,
            } => {
                let args = RunArguments {
                    input: input.clone(),
                    config: config.clone(),
                    output: output.clone(),
                    pacing: *pacing,
                    osrm_url: osrm_url.clone(),
                    mode: *mode,
                    no_routing: *no_routing,
                    progress: *progress,
                };
                crate::app::run::run_radarmap(&args)
            }
        }
    }
}

fn parse_duration(s: &str) -> Result<Duration, String> {
    humantime::parse_duration(s).map_err(|e| format!("Invalid duration: {e}"))
}

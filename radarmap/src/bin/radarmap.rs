use clap::Parser;
use radarmap::app::RadarmapApp;

fn main() {
    env_logger::init();
    let args = RadarmapApp::parse();
    match args.op.run() {
        Ok(summary) => log::info!("finished: {summary}"),
        Err(e) => {
            log::error!("failed running radarmap: {e}");
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

mod run_arguments;
mod run_radarmap;

pub use run_arguments::RunArguments;
pub use run_radarmap::run_radarmap;

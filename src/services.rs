pub mod results_log;
pub mod runner;

pub use results_log::ResultsLog;
pub use runner::BenchmarkRunner;

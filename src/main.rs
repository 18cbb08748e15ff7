use env_logger::Builder;
use log::{error, info, LevelFilter};
use matbench::services::runner::parse_args;
use matbench::services::{BenchmarkRunner, ResultsLog};
use std::env;
use std::io::Write;
use std::process;

fn main() {
    let mut builder = Builder::new();
    builder
        .format(|buf, record| writeln!(buf, "{}: {}", record.level(), record.args()))
        .filter(None, LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let (n, runs) = match parse_args(&args) {
        Some(parsed) => parsed,
        None => {
            println!("Usage: matbench <matrix_size> <num_runs>");
            return;
        }
    };

    let log = ResultsLog::resolve();
    info!("CSV path: {}", log.path().display());

    let runner = BenchmarkRunner::new(n, runs, log);
    if let Err(err) = runner.run() {
        error!("benchmark failed: {}", err);
        process::exit(1);
    }
}

use crate::constants::LANGUAGE;
use crate::errors::BenchmarkError;
use crate::math::gemm;
use crate::structures::Matrix;
use crate::utils::resident_memory_mb;
use chrono::Local;
use log::warn;
use std::fmt::{self, Display};
use std::hint::black_box;
use std::time::Instant;

use super::ResultsLog;

/// One benchmark iteration's result, persisted right after it is taken.
#[derive(Debug, Clone)]
pub struct RunMeasurement {
    pub language: &'static str,
    pub matrix_size: usize,
    pub run_index: usize,
    pub elapsed_sec: f64,
    pub memory_used_mb: u64,
    pub timestamp_iso: String,
}

impl RunMeasurement {
    pub fn csv_row(&self) -> String {
        format!(
            "{},{},{},{:.6},{},{}",
            self.language,
            self.matrix_size,
            self.run_index,
            self.elapsed_sec,
            self.memory_used_mb,
            self.timestamp_iso
        )
    }
}

impl Display for RunMeasurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Run {}: {:.6} s | Memory used: {} MB",
            self.run_index, self.elapsed_sec, self.memory_used_mb
        )
    }
}

/// Memory delta between two probe readings, clamped at zero. Allocator and
/// GC noise in other variants can make the raw subtraction negative.
pub fn memory_delta_mb(before: u64, after: u64) -> u64 {
    after.saturating_sub(before)
}

/// The two positional integers: matrix size and run count. None means the
/// caller should print usage and leave the results file untouched.
pub fn parse_args(args: &[String]) -> Option<(usize, usize)> {
    if args.len() < 2 {
        return None;
    }
    let n = args[0].parse::<usize>().ok()?;
    let runs = args[1].parse::<usize>().ok()?;
    Some((n, runs))
}

pub struct BenchmarkRunner {
    n: usize,
    runs: usize,
    log: ResultsLog,
}

impl BenchmarkRunner {
    pub fn new(n: usize, runs: usize, log: ResultsLog) -> Self {
        BenchmarkRunner { n, runs, log }
    }

    /// Build the inputs once, then measure, persist and report each run.
    /// Returns the mean elapsed time across all runs.
    pub fn run(&self) -> Result<f64, BenchmarkError> {
        if self.runs == 0 {
            return Err(BenchmarkError::new("run count must be at least 1"));
        }

        if let Err(err) = self.log.ensure_header() {
            warn!(
                "could not prepare results file {}: {}",
                self.log.path().display(),
                err
            );
        }

        let a = Matrix::random(self.n)?;
        let b = Matrix::random(self.n)?;

        println!("=========== RUST BENCHMARK ===========");
        println!("Matrix size: {}x{} | Runs: {}", self.n, self.n, self.runs);
        println!("---------------------------------------");

        let mut total = 0.0;
        for run_index in 1..=self.runs {
            let mem_before = resident_memory_mb();
            let start = Instant::now();
            let c = gemm(&a, &b)?;
            let elapsed = start.elapsed().as_secs_f64();
            let mem_after = resident_memory_mb();

            let measurement = RunMeasurement {
                language: LANGUAGE,
                matrix_size: self.n,
                run_index,
                elapsed_sec: elapsed,
                memory_used_mb: memory_delta_mb(mem_before, mem_after),
                timestamp_iso: Local::now().format("%Y-%m-%dT%H:%M:%S").to_string(),
            };

            if let Err(err) = self.log.append(&measurement.csv_row()) {
                warn!(
                    "could not append to results file {}: {}",
                    self.log.path().display(),
                    err
                );
            }

            println!("{}", measurement);
            total += elapsed;

            // Keep the product alive so the multiply cannot be optimized out.
            black_box(c.at(0, 0));
        }

        let mean = total / self.runs as f64;
        println!("---------------------------------------");
        println!("Average time: {:.6} s", mean);
        println!("=======================================");

        Ok(mean)
    }
}

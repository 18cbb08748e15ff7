extern crate matbench;

use matbench::constants::CSV_HEADER;
use matbench::services::runner::{memory_delta_mb, parse_args, RunMeasurement};
use matbench::services::{BenchmarkRunner, ResultsLog};
use std::fs;

#[cfg(test)]
mod runner_tests {

    use super::*;

    // Test usage parsing: zero, one, or non-numeric args are rejected
    #[test]
    fn test_parse_args_rejects_bad_input() {
        assert_eq!(parse_args(&[]), None);
        assert_eq!(parse_args(&["500".to_string()]), None);
        assert_eq!(
            parse_args(&["abc".to_string(), "3".to_string()]),
            None
        );
        assert_eq!(
            parse_args(&["500".to_string(), "many".to_string()]),
            None
        );
    }

    #[test]
    fn test_parse_args_accepts_two_integers() {
        let args = vec!["500".to_string(), "3".to_string()];
        assert_eq!(parse_args(&args), Some((500, 3)));
    }

    // Test that the memory delta is clamped at zero
    #[test]
    fn test_memory_delta_clamped() {
        assert_eq!(memory_delta_mb(10, 22), 12);
        assert_eq!(memory_delta_mb(22, 10), 0);
        assert_eq!(memory_delta_mb(0, 0), 0);
    }

    // Test the exact CSV rendering of one measurement
    #[test]
    fn test_csv_row_format() {
        let measurement = RunMeasurement {
            language: "Rust",
            matrix_size: 500,
            run_index: 1,
            elapsed_sec: 0.842113,
            memory_used_mb: 12,
            timestamp_iso: "2024-05-01T10:15:03".to_string(),
        };
        assert_eq!(
            measurement.csv_row(),
            "Rust,500,1,0.842113,12,2024-05-01T10:15:03"
        );
    }

    // Test the human-readable progress line
    #[test]
    fn test_progress_line_format() {
        let measurement = RunMeasurement {
            language: "Rust",
            matrix_size: 500,
            run_index: 2,
            elapsed_sec: 0.5,
            memory_used_mb: 3,
            timestamp_iso: "2024-05-01T10:15:03".to_string(),
        };
        assert_eq!(
            measurement.to_string(),
            "Run 2: 0.500000 s | Memory used: 3 MB"
        );
    }

    // End-to-end: n=50, runs=3 appends exactly three well-formed rows
    #[test]
    fn test_end_to_end_three_runs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");
        let runner = BenchmarkRunner::new(50, 3, ResultsLog::at(path.clone()));

        let mean = runner.run().unwrap();
        assert!(mean > 0.0);

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], CSV_HEADER);

        for (idx, line) in lines[1..].iter().enumerate() {
            let fields: Vec<&str> = line.split(',').collect();
            assert_eq!(fields.len(), 6);
            assert_eq!(fields[0], "Rust");
            assert_eq!(fields[1], "50");
            assert_eq!(fields[2], (idx + 1).to_string());
            assert!(fields[3].parse::<f64>().unwrap() > 0.0);
            assert!(fields[4].parse::<u64>().unwrap() < 1_000_000);
            assert!(
                chrono::NaiveDateTime::parse_from_str(fields[5], "%Y-%m-%dT%H:%M:%S").is_ok()
            );
        }
    }

    // A zero run count is a fatal setup error, not a silent no-op
    #[test]
    fn test_zero_runs_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");
        let runner = BenchmarkRunner::new(10, 0, ResultsLog::at(path));
        assert!(runner.run().is_err());
    }
}

/// Language tag written in the first CSV column. Fixed per implementation.
pub const LANGUAGE: &str = "Rust";

/// Environment variable that overrides the results file location.
pub const RESULTS_ENV: &str = "RESULTS_CSV";

/// Default results path, shared with the other language variants.
pub const DEFAULT_RESULTS_PATH: &str = "../data/results.csv";

pub const CSV_HEADER: &str =
    "language,matrix_size,run_index,elapsed_sec,memory_used_mb,timestamp_iso";

use crate::constants::{CSV_HEADER, DEFAULT_RESULTS_PATH, RESULTS_ENV};
use fs2::FileExt;
use std::env;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Append-only CSV shared by every language variant of the benchmark.
///
/// Every write is a scoped open/lock/write/close, so no handle outlives a
/// call and concurrent benchmark processes only contend for the advisory
/// lock around each line.
pub struct ResultsLog {
    path: PathBuf,
}

impl ResultsLog {
    /// Path from the RESULTS_CSV environment variable when set and non-empty,
    /// else the fixed default shared with the C, Java and Python variants.
    pub fn resolve() -> Self {
        let path = match env::var(RESULTS_ENV) {
            Ok(value) if !value.is_empty() => PathBuf::from(value),
            _ => PathBuf::from(DEFAULT_RESULTS_PATH),
        };
        ResultsLog { path }
    }

    pub fn at(path: PathBuf) -> Self {
        ResultsLog { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create parent directories and write the header if the file is empty.
    /// Never truncates an existing file.
    pub fn ensure_header(&self) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&self.path)?;
        file.lock_exclusive()?;
        if file.metadata()?.len() == 0 {
            writeln!(file, "{}", CSV_HEADER)?;
        }
        file.unlock()?;
        Ok(())
    }

    /// Append exactly one CSV line under an exclusive advisory lock.
    pub fn append(&self, line: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;
        file.lock_exclusive()?;
        writeln!(file, "{}", line)?;
        file.unlock()?;
        Ok(())
    }
}

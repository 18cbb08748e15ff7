use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub struct BenchmarkError {
    details: String,
}

impl BenchmarkError {
    pub fn new(msg: &str) -> BenchmarkError {
        BenchmarkError {
            details: msg.to_string(),
        }
    }
}

impl fmt::Display for BenchmarkError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.details)
    }
}

impl Error for BenchmarkError {
    fn description(&self) -> &str {
        &self.details
    }
}

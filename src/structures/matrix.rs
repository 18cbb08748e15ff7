use crate::errors::BenchmarkError;
use rand::Rng;

/// Square row-major matrix backed by one contiguous buffer.
///
/// Cell (i, j) lives at `data[i * n + j]`. The buffer is owned by whoever
/// allocated the matrix and is never shared mutably.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    pub n: usize,
    pub data: Vec<f64>,
}

impl Matrix {
    pub fn zeroed(n: usize) -> Result<Matrix, BenchmarkError> {
        if n == 0 {
            return Err(BenchmarkError::new("matrix size must be at least 1"));
        }
        Ok(Matrix {
            n,
            data: vec![0.0; n * n],
        })
    }

    /// n x n matrix with every cell drawn independently from uniform [0, 1).
    pub fn random(n: usize) -> Result<Matrix, BenchmarkError> {
        let mut matrix = Matrix::zeroed(n)?;
        let mut rng = rand::thread_rng();
        for cell in matrix.data.iter_mut() {
            *cell = rng.gen::<f64>();
        }
        Ok(matrix)
    }

    pub fn at(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        self.data[i * self.n + j] = value;
    }
}

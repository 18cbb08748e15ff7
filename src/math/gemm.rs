use crate::errors::BenchmarkError;
use crate::structures::Matrix;

/// Naive i-j-k matrix product with one scalar accumulator per cell.
///
/// This kernel is the quantity under measurement: every language variant
/// runs the same loop order and summation order so the timings stay
/// comparable. Do not block, vectorize or reorder it.
pub fn gemm(a: &Matrix, b: &Matrix) -> Result<Matrix, BenchmarkError> {
    if a.n != b.n {
        return Err(BenchmarkError::new("matrix dimensions do not match"));
    }

    let n = a.n;
    let mut c = Matrix::zeroed(n)?;
    for i in 0..n {
        for j in 0..n {
            let mut sum = 0.0_f64;
            for k in 0..n {
                sum += a.data[i * n + k] * b.data[k * n + j];
            }
            c.data[i * n + j] = sum;
        }
    }

    Ok(c)
}

//! Random input generation for test and benchmark harnesses.

use crate::matrix::Matrix;
use rand::Rng;

/// Random `n × n` matrix with entries uniform in `[0, 10)`.
pub fn random_matrix(n: usize) -> Matrix {
    let mut rng = rand::thread_rng();
    let data = (0..n * n).map(|_| rng.gen_range(0.0..10.0)).collect();
    Matrix::new(n, data)
}

/// Random array of `n` integers uniform in `[0, max(n/10, 1))`.
///
/// The narrow value range makes large arrays duplicate-heavy on purpose,
/// which exercises the partition's handling of repeated pivot values.
pub fn random_array(n: usize) -> Vec<i64> {
    let mut rng = rand::thread_rng();
    let max = (n / 10).max(1) as i64;
    (0..n).map(|_| rng.gen_range(0..max)).collect()
}

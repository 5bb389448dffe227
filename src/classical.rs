//! Classical matrix multiplication

use crate::matrix::Matrix;

/// Multiply two `n × n` matrices with the basic triple loop. Θ(n³).
///
/// # Panics
/// If the dimensions differ.
pub fn multiply_naive(a: &Matrix, b: &Matrix) -> Matrix {
    let n = a.dim();
    assert!(
        n == b.dim(),
        "dimension mismatch: {} vs {}",
        n,
        b.dim()
    );
    let mut c = Matrix::zeros(n);
    for i in 0..n {
        for j in 0..n {
            let mut sum = 0.0;
            for k in 0..n {
                sum += a[(i, k)] * b[(k, j)];
            }
            c[(i, j)] = sum;
        }
    }
    c
}

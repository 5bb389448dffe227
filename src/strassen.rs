//! Strassen's divide-and-conquer matrix multiplication.
//!
//! Each recursion level splits both operands into four quadrants, forms
//! seven products of quadrant sums/differences instead of eight, and
//! recombines. Runs in about O(n^2.807) versus O(n³) for the triple loop.
//!
//! Quadrants are independent fresh copies, never views into the parent
//! buffer, so recursive writes cannot alias a sibling.

use crate::matrix::Matrix;

/// Multiply two `n × n` matrices with Strassen's algorithm.
///
/// The result agrees with [`multiply_naive`](crate::multiply_naive) up to
/// floating-point rounding; compare with [`Matrix::approx_eq`].
///
/// # Panics
/// If the dimensions differ, or if `n` is neither zero nor a power of two.
/// Odd dimensions cannot be split into equal quadrants and are a
/// precondition fault, not silently padded.
pub fn multiply_strassen(a: &Matrix, b: &Matrix) -> Matrix {
    let n = a.dim();
    assert!(
        n == b.dim(),
        "dimension mismatch: {} vs {}",
        n,
        b.dim()
    );
    assert!(
        n == 0 || n.is_power_of_two(),
        "Strassen multiply requires a power-of-two dimension, got {}",
        n
    );
    strassen(a, b)
}

fn strassen(a: &Matrix, b: &Matrix) -> Matrix {
    let n = a.dim();

    // base cases where the recursion ends
    if n == 0 {
        return Matrix::zeros(0);
    }
    if n == 1 {
        return Matrix::new(1, vec![a[(0, 0)] * b[(0, 0)]]);
    }

    let half = n / 2;
    let a00 = quadrant(a, 0, 0);
    let a01 = quadrant(a, 0, half);
    let a10 = quadrant(a, half, 0);
    let a11 = quadrant(a, half, half);
    let b00 = quadrant(b, 0, 0);
    let b01 = quadrant(b, 0, half);
    let b10 = quadrant(b, half, 0);
    let b11 = quadrant(b, half, half);

    let m1 = strassen(&a00.add(&a11), &b00.add(&b11));
    let m2 = strassen(&a10.add(&a11), &b00);
    let m3 = strassen(&a00, &b01.sub(&b11));
    let m4 = strassen(&a11, &b10.sub(&b00));
    let m5 = strassen(&a00.add(&a01), &b11);
    let m6 = strassen(&a10.sub(&a00), &b00.add(&b01));
    let m7 = strassen(&a01.sub(&a11), &b10.add(&b11));

    let c00 = m1.add(&m4).sub(&m5).add(&m7);
    let c01 = m3.add(&m5);
    let c10 = m2.add(&m4);
    let c11 = m1.add(&m3).sub(&m2).add(&m6);

    combine(&c00, &c01, &c10, &c11)
}

/// Copy the `half × half` sub-block of `m` starting at `(row, col)`.
fn quadrant(m: &Matrix, row: usize, col: usize) -> Matrix {
    let half = m.dim() / 2;
    let mut q = Matrix::zeros(half);
    for i in 0..half {
        for j in 0..half {
            q[(i, j)] = m[(row + i, col + j)];
        }
    }
    q
}

/// Assemble a full matrix from its four quadrants.
fn combine(c00: &Matrix, c01: &Matrix, c10: &Matrix, c11: &Matrix) -> Matrix {
    let half = c00.dim();
    let mut c = Matrix::zeros(half * 2);
    for i in 0..half {
        for j in 0..half {
            c[(i, j)] = c00[(i, j)];
            c[(i, half + j)] = c01[(i, j)];
            c[(half + i, j)] = c10[(i, j)];
            c[(half + i, half + j)] = c11[(i, j)];
        }
    }
    c
}

//! Square dense matrices over `f64`.
//!
//! Storage is a flat row-major buffer of length `n * n`. Every operation
//! that produces a matrix allocates a fresh one; nothing hands out views
//! into another matrix's buffer.

use std::fmt;
use std::ops::{Add, Index, IndexMut, Sub};

/// Absolute tolerance for [`Matrix::approx_eq`].
///
/// Strassen and naive multiplication accumulate rounding differently, so
/// their results are numerically equal but not bit-identical. Comparisons
/// between matrices produced by different algorithms must go through
/// `approx_eq`, never `==`.
pub const EPSILON: f64 = 0.001;

/// An `n × n` matrix of `f64`, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    n: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Construct from a row-major buffer (must be length `n * n`).
    pub fn new(n: usize, data: Vec<f64>) -> Self {
        assert!(
            data.len() == n * n,
            "Matrix of dimension {} requires {} elements, got {}",
            n,
            n * n,
            data.len()
        );
        Self { n, data }
    }

    /// The zero matrix of dimension `n`.
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            data: vec![0.0; n * n],
        }
    }

    /// The identity matrix of dimension `n`.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n);
        for i in 0..n {
            m[(i, i)] = 1.0;
        }
        m
    }

    /// Dimension `n` of this `n × n` matrix.
    #[inline(always)]
    pub fn dim(&self) -> usize {
        self.n
    }

    /// Elementwise sum. Θ(n²).
    ///
    /// # Panics
    /// If the dimensions differ.
    pub fn add(&self, other: &Self) -> Self {
        assert!(
            self.n == other.n,
            "dimension mismatch: {} vs {}",
            self.n,
            other.n
        );
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| a + b)
            .collect();
        Self { n: self.n, data }
    }

    /// Elementwise difference. Θ(n²).
    ///
    /// # Panics
    /// If the dimensions differ.
    pub fn sub(&self, other: &Self) -> Self {
        assert!(
            self.n == other.n,
            "dimension mismatch: {} vs {}",
            self.n,
            other.n
        );
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| a - b)
            .collect();
        Self { n: self.n, data }
    }

    /// True iff `other` has the same dimension and every entry differs by
    /// at most [`EPSILON`] in absolute value.
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.n == other.n
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| (a - b).abs() <= EPSILON)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    #[inline(always)]
    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.data[i * self.n + j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline(always)]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        &mut self.data[i * self.n + j]
    }
}

impl Add for &Matrix {
    type Output = Matrix;

    fn add(self, rhs: &Matrix) -> Matrix {
        Matrix::add(self, rhs)
    }
}

impl Sub for &Matrix {
    type Output = Matrix;

    fn sub(self, rhs: &Matrix) -> Matrix {
        Matrix::sub(self, rhs)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for i in 0..self.n {
            for j in 0..self.n {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self[(i, j)])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

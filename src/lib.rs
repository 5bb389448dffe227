//! # AlgoEngine Quickstart
//!
//! ```rust
//! use algo_engine::prelude::*;
//!
//! // Multiply a 2×2 matrix by itself, both ways
//! let a = Matrix::new(2, vec![1.0, 2.0, 3.0, 4.0]);
//! let slow = multiply_naive(&a, &a);
//! let fast = multiply_strassen(&a, &a);
//! assert!(slow.approx_eq(&fast));
//!
//! // Sort with the median-of-medians pivot
//! let mut data = vec![5, 4, 3, 2, 1];
//! let mut qs = Quicksort::new();
//! qs.quick_sort2(&mut data, 0, 4);
//! assert_eq!(data, vec![1, 2, 3, 4, 5]);
//! ```
//!
#![doc = include_str!("../README.md")]

// Core modules
pub mod classical;
pub mod gen;  // random input generation for test/benchmark harnesses
pub mod matrix;
pub mod prelude;
pub mod quicksort;
pub mod strassen;  // Strassen's O(n^2.807) divide-and-conquer multiply

// --- Public API exports ---

pub use classical::multiply_naive;
pub use matrix::{Matrix, EPSILON};
pub use quicksort::Quicksort;
pub use strassen::multiply_strassen;

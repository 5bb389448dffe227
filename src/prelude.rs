// src/prelude.rs
//! The “everything” import for AlgoEngine.
//!
//! Brings you the most commonly used types and functions with one glob:
//! ```rust
//! use algo_engine::prelude::*;
//! ```

// core data types
pub use crate::matrix::{Matrix, EPSILON};
pub use crate::quicksort::Quicksort;

// matrix multiplication kernels
pub use crate::classical::multiply_naive;
pub use crate::strassen::multiply_strassen;

// harness input generation
pub use crate::gen::{random_array, random_matrix};

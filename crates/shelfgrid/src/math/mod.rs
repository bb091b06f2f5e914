//! Small ndarray-like containers backing the tally matrix.
//!
//! `Array2` is the dense row-major grid and `Array1` carries the derived
//! per-row / per-column sequences.
pub mod matrix;
pub mod vector;

pub use matrix::{Array2, ShapeError};
pub use vector::Array1;

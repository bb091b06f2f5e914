use thiserror::Error;

/// Failures raised by the tally matrix.
///
/// Aggregates, the determinant and the summary report are total over a valid
/// matrix, so only construction and cell access can fail. A singular matrix
/// is not an error: its determinant is simply `0.0`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    #[error("cell ({row}, {col}) is outside a {size}x{size} matrix")]
    OutOfRange { row: usize, col: usize, size: usize },

    #[error("matrix size must be positive, got {0}")]
    InvalidSize(usize),

    #[error("expected {expected} labels, found {found}")]
    LabelCount { expected: usize, found: usize },

    #[error("value for cell ({row}, {col}) is not finite")]
    NonFinite { row: usize, col: usize },

    #[error("invalid shape: {0}")]
    Shape(String),
}

impl MatrixError {
    pub fn out_of_range(row: usize, col: usize, size: usize) -> Self {
        Self::OutOfRange { row, col, size }
    }
}

impl From<crate::math::ShapeError> for MatrixError {
    fn from(err: crate::math::ShapeError) -> Self {
        Self::Shape(err.to_string())
    }
}

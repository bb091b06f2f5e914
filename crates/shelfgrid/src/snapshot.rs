//! Plain serializable view of a matrix, for callers that need to ship or
//! store its state.
use serde::{Deserialize, Serialize};

use crate::error::MatrixError;
use crate::store::LibraryMatrix;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatrixSnapshot {
    pub size: usize,
    pub cells: Vec<Vec<f64>>,
    pub labels: Vec<String>,
}

impl From<&LibraryMatrix> for MatrixSnapshot {
    fn from(matrix: &LibraryMatrix) -> Self {
        Self {
            size: matrix.size(),
            cells: matrix.cells().to_rows(),
            labels: matrix.labels().to_vec(),
        }
    }
}

impl TryFrom<MatrixSnapshot> for LibraryMatrix {
    type Error = MatrixError;

    fn try_from(snapshot: MatrixSnapshot) -> Result<Self, Self::Error> {
        if snapshot.cells.len() != snapshot.size {
            return Err(MatrixError::Shape(format!(
                "snapshot declares size {} but has {} rows",
                snapshot.size,
                snapshot.cells.len()
            )));
        }
        LibraryMatrix::from_rows(snapshot.cells, snapshot.labels)
    }
}

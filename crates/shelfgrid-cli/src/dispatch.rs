//! Request/response contract between a front end and the matrix.
//!
//! Each `Request` maps onto exactly one matrix operation and each `Response`
//! serializes to the JSON shape callers expect for that operation.
use rand::Rng;
use serde::Serialize;

use shelfgrid::math::Array1;
use shelfgrid::{LibraryMatrix, MatrixError, MatrixOperations, MatrixSnapshot, SummaryReport};

use crate::format::to_exponential;

/// Digits after the decimal point in the scientific rendering of a determinant.
pub const SCIENTIFIC_DIGITS: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Snapshot,
    Regenerate,
    RowSums,
    ColSums,
    Swap,
    Determinant,
    RowAverages,
    ColAverages,
    Report,
    GetCell { row: usize, col: usize },
    SetCell { row: usize, col: usize, value: f64 },
}

impl Request {
    /// Whether serving this request changes the matrix.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Request::Regenerate | Request::Swap | Request::SetCell { .. }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MutationResponse {
    pub success: bool,
    pub snapshot: MatrixSnapshot,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SumsResponse {
    pub values: Array1<f64>,
    pub length: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AveragesResponse {
    pub values: Array1<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeterminantResponse {
    #[serde(with = "shelfgrid::report::float_serde")]
    pub value: f64,
    pub scientific: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellResponse {
    pub row: usize,
    pub col: usize,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Snapshot(MatrixSnapshot),
    Regenerated(MutationResponse),
    RowSums(SumsResponse),
    ColSums(SumsResponse),
    Swapped(MutationResponse),
    Determinant(DeterminantResponse),
    RowAverages(AveragesResponse),
    ColAverages(AveragesResponse),
    Report(Box<SummaryReport>),
    Cell(CellResponse),
    CellUpdated(MutationResponse),
}

/// Serve one request against `matrix`.
///
/// Only cell access can fail; a failed write leaves the matrix unchanged.
pub fn dispatch<R: Rng + ?Sized>(
    matrix: &mut LibraryMatrix,
    request: &Request,
    rng: &mut R,
) -> Result<Response, MatrixError> {
    log::debug!("dispatching {:?}", request);
    let response = match *request {
        Request::Snapshot => Response::Snapshot(MatrixSnapshot::from(&*matrix)),
        Request::Regenerate => {
            matrix.regenerate(rng);
            Response::Regenerated(mutated(matrix))
        }
        Request::RowSums => Response::RowSums(sums(matrix.row_sums())),
        Request::ColSums => Response::ColSums(sums(matrix.col_sums())),
        Request::Swap => {
            matrix.swap_across_diagonal();
            Response::Swapped(mutated(matrix))
        }
        Request::Determinant => {
            let value = matrix.determinant();
            Response::Determinant(DeterminantResponse {
                value,
                scientific: to_exponential(value, SCIENTIFIC_DIGITS),
            })
        }
        Request::RowAverages => Response::RowAverages(AveragesResponse {
            values: matrix.row_averages(),
        }),
        Request::ColAverages => Response::ColAverages(AveragesResponse {
            values: matrix.col_averages(),
        }),
        Request::Report => Response::Report(Box::new(matrix.summary_report())),
        Request::GetCell { row, col } => Response::Cell(CellResponse {
            row,
            col,
            value: matrix.get_cell(row, col)?,
        }),
        Request::SetCell { row, col, value } => {
            matrix.set_cell(row, col, value)?;
            Response::CellUpdated(mutated(matrix))
        }
    };
    Ok(response)
}

fn sums(values: Array1<f64>) -> SumsResponse {
    SumsResponse {
        length: values.len(),
        values,
    }
}

fn mutated(matrix: &LibraryMatrix) -> MutationResponse {
    MutationResponse {
        success: true,
        snapshot: MatrixSnapshot::from(matrix),
    }
}

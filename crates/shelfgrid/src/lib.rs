//! shelfgrid: a square tally matrix and its derived views.
//!
//! The crate models counts laid out as categories (rows) by time slots
//! (columns). It provides randomized generation, bounds-checked cell access,
//! an in-place swap across the main diagonal, row/column sums and averages,
//! a partial-pivot determinant, and a summary report with first-max
//! tie-breaking.
//!
//! Formatting for display is left to callers; every value here is raw.
pub mod config;
pub mod error;
pub mod linalg;
pub mod math;
pub mod operations;
pub mod report;
pub mod snapshot;
pub mod store;

pub use error::MatrixError;
pub use operations::MatrixOperations;
pub use report::SummaryReport;
pub use snapshot::MatrixSnapshot;
pub use store::LibraryMatrix;

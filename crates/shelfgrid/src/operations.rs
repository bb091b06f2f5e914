use crate::math::Array1;

/// The operation contract every tally matrix exposes.
///
/// There are no default bodies: an implementation that forgets one of these
/// does not compile.
pub trait MatrixOperations {
    /// Sum of every row, one entry per row.
    fn row_sums(&self) -> Array1<f64>;

    /// Sum of every column, one entry per column.
    fn col_sums(&self) -> Array1<f64>;

    /// Exchange each off-diagonal cell with its mirror across the main diagonal.
    fn swap_across_diagonal(&mut self);

    /// Determinant of the current grid. Never mutates the grid.
    fn determinant(&self) -> f64;

    fn row_averages(&self) -> Array1<f64>;

    fn col_averages(&self) -> Array1<f64>;
}

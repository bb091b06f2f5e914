use crate::math::Array2;

/// Absolute pivot magnitude below which a matrix is treated as singular.
///
/// This tolerance is not scaled by the magnitude of the entries: a singular
/// matrix multiplied by a large constant can slip past it and produce a tiny
/// non-zero determinant instead of `0.0`.
pub const SINGULAR_PIVOT_TOLERANCE: f64 = 1e-5;

/// Compute the determinant of a square matrix by Gaussian elimination with
/// partial pivoting.
///
/// The elimination runs on a private copy, the input is never touched. For
/// every pivot column the row with the largest absolute entry at or below
/// the diagonal is selected (the earliest row wins ties). If that entry is
/// smaller than [`SINGULAR_PIVOT_TOLERANCE`] the function returns `0.0`
/// immediately without finishing the elimination. Each row exchange flips
/// the sign of the running product, which is then multiplied by the pivot.
///
/// # Arguments
///
/// * `grid` - A square 2D array of values.
///
/// # Returns
///
/// The determinant as an `f64`. Overflow and NaN inputs propagate through the
/// arithmetic unchanged; they are results, not errors. An empty matrix has
/// determinant `1.0`.
pub fn determinant(grid: &Array2<f64>) -> f64 {
    debug_assert!(grid.is_square(), "determinant requires a square matrix");
    let n = grid.nrows();
    let mut work = grid.clone();
    let mut det = 1.0;

    for i in 0..n {
        let max_row = pivot_row(&work, i);

        if work[(max_row, i)].abs() < SINGULAR_PIVOT_TOLERANCE {
            log::trace!("pivot column {} below tolerance, matrix is singular", i);
            return 0.0;
        }

        if max_row != i {
            work.swap_rows(i, max_row);
            det = -det;
        }

        let pivot = work[(i, i)];
        det *= pivot;

        for k in (i + 1)..n {
            let factor = work[(k, i)] / pivot;
            for j in i..n {
                let delta = factor * work[(i, j)];
                work[(k, j)] -= delta;
            }
        }
    }

    det
}

/// Row index `k >= col` maximising `|grid[k][col]|`, first occurrence on ties.
fn pivot_row(grid: &Array2<f64>, col: usize) -> usize {
    let mut max_row = col;
    for k in (col + 1)..grid.nrows() {
        if grid[(k, col)].abs() > grid[(max_row, col)].abs() {
            max_row = k;
        }
    }
    max_row
}

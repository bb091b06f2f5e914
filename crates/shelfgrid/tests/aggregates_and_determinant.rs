//! Integration tests for row/column aggregates and the pivoted determinant.

use approx::assert_relative_eq;

use shelfgrid::linalg::{determinant, SINGULAR_PIVOT_TOLERANCE};
use shelfgrid::{LibraryMatrix, MatrixOperations};

fn matrix(rows: Vec<Vec<f64>>) -> LibraryMatrix {
    let labels = (0..rows.len()).map(|i| format!("row {}", i)).collect();
    LibraryMatrix::from_rows(rows, labels).unwrap()
}

fn known_3x3() -> Vec<Vec<f64>> {
    vec![
        vec![2.0, 1.0, 3.0],
        vec![0.0, -1.0, 4.0],
        vec![1.0, 2.0, 0.0],
    ]
}

// ---------------------------------------------------------------------------
// Aggregates
// ---------------------------------------------------------------------------

#[test]
fn two_by_two_scenario() {
    let m = matrix(vec![vec![4.0, 3.0], vec![6.0, 3.0]]);
    assert_eq!(m.row_sums().to_vec(), vec![7.0, 9.0]);
    assert_eq!(m.col_sums().to_vec(), vec![10.0, 6.0]);
    assert_eq!(m.row_averages().to_vec(), vec![3.5, 4.5]);
    assert_eq!(m.col_averages().to_vec(), vec![5.0, 3.0]);
    assert_relative_eq!(m.determinant(), -6.0, epsilon = 1e-9);
}

#[test]
fn sums_have_one_entry_per_row_and_column() {
    let m = matrix(known_3x3());
    assert_eq!(m.row_sums().len(), 3);
    assert_eq!(m.col_sums().len(), 3);
    assert_eq!(m.row_sums().to_vec(), vec![6.0, 3.0, 3.0]);
    assert_eq!(m.col_sums().to_vec(), vec![3.0, 2.0, 7.0]);
}

#[test]
fn averages_are_fractional_for_integer_grids() {
    let m = matrix(vec![
        vec![1.0, 0.0, 0.0],
        vec![0.0, 0.0, 0.0],
        vec![0.0, 0.0, 0.0],
    ]);
    assert_relative_eq!(m.row_averages()[0], 1.0 / 3.0);
    assert_relative_eq!(m.col_averages()[0], 1.0 / 3.0);
}

#[test]
fn aggregates_do_not_mutate() {
    let m = matrix(known_3x3());
    let before = m.clone();
    let _ = m.row_sums();
    let _ = m.col_sums();
    let _ = m.row_averages();
    let _ = m.col_averages();
    let _ = m.determinant();
    assert_eq!(m, before);
}

// ---------------------------------------------------------------------------
// Determinant
// ---------------------------------------------------------------------------

#[test]
fn determinant_of_known_3x3() {
    let m = matrix(known_3x3());
    assert_relative_eq!(m.determinant(), -9.0, epsilon = 1e-9);
}

#[test]
fn determinant_of_identity_and_diagonal() {
    let identity = matrix(vec![
        vec![1.0, 0.0, 0.0, 0.0],
        vec![0.0, 1.0, 0.0, 0.0],
        vec![0.0, 0.0, 1.0, 0.0],
        vec![0.0, 0.0, 0.0, 1.0],
    ]);
    assert_relative_eq!(identity.determinant(), 1.0);

    let diagonal = matrix(vec![
        vec![2.0, 0.0, 0.0],
        vec![0.0, 3.0, 0.0],
        vec![0.0, 0.0, 4.0],
    ]);
    assert_relative_eq!(diagonal.determinant(), 24.0);
}

#[test]
fn single_row_swap_negates_determinant() {
    let mut rows = known_3x3();
    let original = matrix(rows.clone()).determinant();
    rows.swap(0, 2);
    let swapped = matrix(rows).determinant();
    assert_relative_eq!(original, -9.0, epsilon = 1e-9);
    assert_relative_eq!(swapped, -original, epsilon = 1e-9);
}

#[test]
fn identical_rows_give_exact_zero() {
    let m = matrix(vec![vec![3.0, 1.0, 4.0, 1.0]; 4]);
    assert_eq!(m.determinant(), 0.0);

    let two_equal = matrix(vec![
        vec![1.0, 2.0, 3.0],
        vec![1.0, 2.0, 3.0],
        vec![4.0, 5.0, 7.0],
    ]);
    assert_eq!(two_equal.determinant(), 0.0);
}

#[test]
fn zero_pivot_short_circuits() {
    let m = matrix(vec![
        vec![0.0, 0.0, 0.0],
        vec![1.0, 2.0, 3.0],
        vec![4.0, 5.0, 6.0],
    ]);
    let det = m.determinant();
    // Finishing the elimination would multiply the negative running product
    // by the zero pivot and yield -0.0; the early return yields +0.0.
    assert_eq!(det, 0.0);
    assert!(det.is_sign_positive());
}

#[test]
fn all_zero_matrix_is_singular() {
    let m = matrix(vec![vec![0.0; 5]; 5]);
    assert_eq!(m.determinant(), 0.0);
}

#[test]
fn tolerance_is_absolute_for_small_entries() {
    // det = 1e-12 mathematically, but the first pivot is below the absolute
    // tolerance so the matrix is reported as singular.
    let m = matrix(vec![vec![1e-6, 0.0], vec![0.0, 1e-6]]);
    assert!(1e-6 < SINGULAR_PIVOT_TOLERANCE);
    assert_eq!(m.determinant(), 0.0);
}

#[test]
fn tolerance_is_absolute_for_large_entries() {
    // A singular matrix scaled by 1e10 is not guaranteed to hit the
    // threshold: rounding residue can exceed 1e-5 at this magnitude. Only
    // pin that any non-zero result is negligible relative to the scale.
    let scale = 1e10;
    let m = matrix(vec![
        vec![1.0 * scale, 2.0 * scale, 3.0 * scale],
        vec![4.0 * scale, 5.0 * scale, 6.0 * scale],
        vec![7.0 * scale, 8.0 * scale, 9.0 * scale],
    ]);
    let det = m.determinant();
    assert!(det.abs() <= scale.powi(3) * 1e-9, "det {} not negligible", det);
}

#[test]
fn overflow_is_a_value_not_an_error() {
    let big = 1e200;
    let m = matrix(vec![vec![big, 0.0], vec![0.0, big]]);
    assert!(m.determinant().is_infinite());
}

#[test]
fn free_function_matches_trait_method() {
    let m = matrix(known_3x3());
    assert_eq!(determinant(m.cells()), m.determinant());
}

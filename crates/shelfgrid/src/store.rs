//! The tally matrix: an N×N grid of counts with one label per row.
//!
//! `LibraryMatrix` is the sole owner of its grid. Mutation goes through
//! `&mut self`, so exclusive access during any call is enforced by the
//! borrow checker rather than by locking.
use rand::Rng;

use crate::error::MatrixError;
use crate::linalg;
use crate::math::{Array1, Array2};
use crate::operations::MatrixOperations;
use crate::report::SummaryReport;

/// Size used when nothing else is requested.
pub const DEFAULT_SIZE: usize = 20;

/// Largest count the generator produces. Draws are uniform over `0..=MAX_DRAW`.
pub const MAX_DRAW: u32 = 50;

/// Category names used when the caller does not supply labels.
pub const DEFAULT_CATEGORIES: [&str; 20] = [
    "Fiction",
    "Science",
    "History",
    "Technology",
    "Arts",
    "Biography",
    "Children",
    "Medicine",
    "Law",
    "Business",
    "Philosophy",
    "Religion",
    "Sports",
    "Cooking",
    "Travel",
    "Music",
    "Photography",
    "Programming",
    "Mathematics",
    "Physics",
];

/// The first `size` default categories, padded with `Category n` past the
/// built-in list.
pub fn default_labels(size: usize) -> Vec<String> {
    (0..size)
        .map(|i| match DEFAULT_CATEGORIES.get(i) {
            Some(name) => name.to_string(),
            None => format!("Category {}", i + 1),
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct LibraryMatrix {
    size: usize,
    cells: Array2<f64>,
    labels: Vec<String>,
}

impl LibraryMatrix {
    /// Create a `size`×`size` matrix filled with random counts.
    pub fn new<R: Rng + ?Sized>(
        size: usize,
        labels: Vec<String>,
        rng: &mut R,
    ) -> Result<Self, MatrixError> {
        check_dimensions(size, &labels)?;
        let cells = Array2::from_shape_fn((size, size), |_, _| draw(rng));
        log::debug!("created {}x{} matrix with random counts", size, size);
        Ok(Self {
            size,
            cells,
            labels,
        })
    }

    pub fn with_default_labels<R: Rng + ?Sized>(
        size: usize,
        rng: &mut R,
    ) -> Result<Self, MatrixError> {
        Self::new(size, default_labels(size), rng)
    }

    /// Build a matrix from explicit rows.
    ///
    /// Rows must form a square grid of finite values and `labels` must have
    /// one entry per row.
    pub fn from_rows(rows: Vec<Vec<f64>>, labels: Vec<String>) -> Result<Self, MatrixError> {
        let size = rows.len();
        check_dimensions(size, &labels)?;
        let cells = Array2::from_rows(rows)?;
        if !cells.is_square() {
            return Err(MatrixError::Shape(format!(
                "expected a square grid, got {}x{}",
                cells.nrows(),
                cells.ncols()
            )));
        }
        if let Some(pos) = cells.as_slice().iter().position(|v| !v.is_finite()) {
            return Err(MatrixError::NonFinite {
                row: pos / size,
                col: pos % size,
            });
        }
        Ok(Self {
            size,
            cells,
            labels,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn cells(&self) -> &Array2<f64> {
        &self.cells
    }

    /// Overwrite every cell with a fresh independent draw. Labels are kept.
    pub fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for value in self.cells.as_mut_slice() {
            *value = draw(rng);
        }
        log::debug!("regenerated {}x{} matrix", self.size, self.size);
    }

    pub fn get_cell(&self, row: usize, col: usize) -> Result<f64, MatrixError> {
        self.cells
            .get(row, col)
            .copied()
            .ok_or_else(|| MatrixError::out_of_range(row, col, self.size))
    }

    /// Write `value` at `(row, col)`.
    ///
    /// Bounds and finiteness are checked before anything is written, so a
    /// rejected call leaves the grid exactly as it was.
    pub fn set_cell(&mut self, row: usize, col: usize, value: f64) -> Result<(), MatrixError> {
        let size = self.size;
        let cell = self
            .cells
            .get_mut(row, col)
            .ok_or_else(|| MatrixError::out_of_range(row, col, size))?;
        if !value.is_finite() {
            return Err(MatrixError::NonFinite { row, col });
        }
        *cell = value;
        Ok(())
    }

    pub fn summary_report(&self) -> SummaryReport {
        SummaryReport::from_matrix(self)
    }
}

impl MatrixOperations for LibraryMatrix {
    fn row_sums(&self) -> Array1<f64> {
        (0..self.size)
            .map(|i| self.cells.row_slice(i).iter().sum::<f64>())
            .collect()
    }

    fn col_sums(&self) -> Array1<f64> {
        let mut sums = Array1::zeros(self.size);
        for i in 0..self.size {
            for (j, value) in self.cells.row_slice(i).iter().enumerate() {
                sums[j] += *value;
            }
        }
        sums
    }

    fn swap_across_diagonal(&mut self) {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                self.cells.swap((i, j), (j, i));
            }
        }
    }

    fn determinant(&self) -> f64 {
        linalg::determinant(&self.cells)
    }

    fn row_averages(&self) -> Array1<f64> {
        let n = self.size as f64;
        self.row_sums().mapv(|sum| sum / n)
    }

    fn col_averages(&self) -> Array1<f64> {
        let n = self.size as f64;
        self.col_sums().mapv(|sum| sum / n)
    }
}

fn check_dimensions(size: usize, labels: &[String]) -> Result<(), MatrixError> {
    if size == 0 {
        return Err(MatrixError::InvalidSize(size));
    }
    if labels.len() != size {
        return Err(MatrixError::LabelCount {
            expected: size,
            found: labels.len(),
        });
    }
    Ok(())
}

fn draw<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    f64::from(rng.gen_range(0..=MAX_DRAW))
}

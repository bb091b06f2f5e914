use serde::{Deserialize, Serialize};

use crate::math::Array1;
use crate::operations::MatrixOperations;
use crate::store::LibraryMatrix;

/// Everything the matrix can tell about itself in one value.
///
/// `peak_column_index` and `peak_row_index` use first-max semantics: on a
/// tie the lowest index wins.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    pub size: usize,
    pub row_sums: Array1<f64>,
    pub col_sums: Array1<f64>,
    pub row_averages: Array1<f64>,
    pub col_averages: Array1<f64>,
    #[serde(with = "float_serde")]
    pub determinant: f64,
    pub total_count: f64,
    pub peak_column_index: usize,
    pub peak_row_index: usize,
    pub peak_row_label: String,
    pub cells: Vec<Vec<f64>>,
}

impl SummaryReport {
    pub fn from_matrix(matrix: &LibraryMatrix) -> Self {
        let row_sums = matrix.row_sums();
        let col_sums = matrix.col_sums();
        let total_count = row_sums.sum();
        // A LibraryMatrix is never empty, so both scans find an index.
        let peak_column_index = col_sums.argmax_first().unwrap_or(0);
        let peak_row_index = row_sums.argmax_first().unwrap_or(0);
        let peak_row_label = matrix
            .labels()
            .get(peak_row_index)
            .cloned()
            .unwrap_or_default();

        Self {
            size: matrix.size(),
            row_averages: matrix.row_averages(),
            col_averages: matrix.col_averages(),
            determinant: matrix.determinant(),
            row_sums,
            col_sums,
            total_count,
            peak_column_index,
            peak_row_index,
            peak_row_label,
            cells: matrix.cells().to_rows(),
        }
    }

    /// Sum of the busiest column.
    pub fn peak_column_total(&self) -> f64 {
        self.col_sums[self.peak_column_index]
    }

    /// Sum of the most popular row.
    pub fn peak_row_total(&self) -> f64 {
        self.row_sums[self.peak_row_index]
    }

    /// Mean count per column (time slot).
    pub fn average_per_column(&self) -> f64 {
        self.total_count / self.size as f64
    }
}

/// `f64` that survives JSON when it is not finite.
///
/// Finite values stay plain numbers. Infinities and NaN are written as the
/// strings `"Infinity"`, `"-Infinity"` and `"NaN"` and read back from them.
pub mod float_serde {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else if value.is_nan() {
            serializer.serialize_str("NaN")
        } else if value.is_sign_positive() {
            serializer.serialize_str("Infinity")
        } else {
            serializer.serialize_str("-Infinity")
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Ok(value),
            Repr::Text(text) => match text.as_str() {
                "NaN" => Ok(f64::NAN),
                "Infinity" => Ok(f64::INFINITY),
                "-Infinity" => Ok(f64::NEG_INFINITY),
                other => Err(D::Error::custom(format!("not a number: {:?}", other))),
            },
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::error::{DummyError, Result};
use crate::index::RowIndex;

/// Row-aligned 0/1 indicator columns.
///
/// Values are stored row-major in a dense `f64` buffer. The row index is the
/// one the source column carried, so rows can be joined back onto it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawIndicatorTable")]
pub struct IndicatorTable {
    index: RowIndex,
    columns: Vec<String>,
    data: Vec<f64>,
}

#[derive(Deserialize)]
struct RawIndicatorTable {
    index: RowIndex,
    columns: Vec<String>,
    data: Vec<f64>,
}

impl TryFrom<RawIndicatorTable> for IndicatorTable {
    type Error = DummyError;

    fn try_from(raw: RawIndicatorTable) -> Result<Self> {
        Self::from_parts(raw.index, raw.columns, raw.data)
    }
}

impl IndicatorTable {
    /// Assemble a table from its parts.
    ///
    /// `data` must hold `index.len() * columns.len()` values in row-major order.
    pub fn from_parts(index: RowIndex, columns: Vec<String>, data: Vec<f64>) -> Result<Self> {
        let rows = index.len();
        let cols = columns.len();
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(DummyError::ShapeMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self {
            index,
            columns,
            data,
        })
    }

    pub fn index(&self) -> &RowIndex {
        &self.index
    }

    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    pub fn n_rows(&self) -> usize {
        self.index.len()
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows(), self.n_cols())
    }

    pub fn value(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.n_rows() || col >= self.n_cols() {
            return None;
        }
        self.data.get(row * self.n_cols() + col).copied()
    }

    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row >= self.n_rows() {
            return None;
        }
        let width = self.n_cols();
        Some(&self.data[row * width..(row + 1) * width])
    }

    /// Values of the column at `col`, top to bottom.
    pub fn column(&self, col: usize) -> Option<Vec<f64>> {
        if col >= self.n_cols() {
            return None;
        }
        Some(
            self.data
                .iter()
                .skip(col)
                .step_by(self.n_cols())
                .copied()
                .collect(),
        )
    }

    /// Values of the first column called `name`.
    pub fn column_by_name(&self, name: &str) -> Option<Vec<f64>> {
        let col = self.columns.iter().position(|column| column == name)?;
        self.column(col)
    }

    /// Sum of each row across all columns.
    pub fn row_sums(&self) -> Vec<f64> {
        (0..self.n_rows())
            .filter_map(|row| self.row(row))
            .map(|values| values.iter().sum())
            .collect()
    }

    /// Raw row-major buffer.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn into_parts(self) -> (RowIndex, Vec<String>, Vec<f64>) {
        (self.index, self.columns, self.data)
    }
}

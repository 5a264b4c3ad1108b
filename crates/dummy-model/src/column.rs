use serde::{Deserialize, Serialize};

use crate::error::{DummyError, Result};
use crate::index::RowIndex;

/// A row-indexed sequence of categorical values.
///
/// `None` marks a missing value. Missing values are never levels: fitting
/// skips them and expansion leaves their rows all-zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "RawCategoricalColumn<L>",
    bound(deserialize = "L: Deserialize<'de>")
)]
pub struct CategoricalColumn<L> {
    index: RowIndex,
    values: Vec<Option<L>>,
}

#[derive(Deserialize)]
struct RawCategoricalColumn<L> {
    index: RowIndex,
    values: Vec<Option<L>>,
}

impl<L> TryFrom<RawCategoricalColumn<L>> for CategoricalColumn<L> {
    type Error = DummyError;

    fn try_from(raw: RawCategoricalColumn<L>) -> Result<Self> {
        Self::from_optional(raw.values).with_index(raw.index)
    }
}

impl<L> CategoricalColumn<L> {
    /// Create a column with positional row labels.
    pub fn new(values: Vec<L>) -> Self {
        Self::from_optional(values.into_iter().map(Some).collect())
    }

    /// Create a column that may contain missing values.
    pub fn from_optional(values: Vec<Option<L>>) -> Self {
        Self {
            index: RowIndex::Range(values.len()),
            values,
        }
    }

    /// Replace the row labels. The index must label every value.
    pub fn with_index(mut self, index: impl Into<RowIndex>) -> Result<Self> {
        let index = index.into();
        if index.len() != self.values.len() {
            return Err(DummyError::IndexLengthMismatch {
                index_len: index.len(),
                values_len: self.values.len(),
            });
        }
        self.index = index;
        Ok(self)
    }

    pub fn index(&self) -> &RowIndex {
        &self.index
    }

    pub fn values(&self) -> &[Option<L>] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<&L>> + '_ {
        self.values.iter().map(Option::as_ref)
    }

    pub fn into_parts(self) -> (RowIndex, Vec<Option<L>>) {
        (self.index, self.values)
    }
}

impl<L> FromIterator<L> for CategoricalColumn<L> {
    fn from_iter<I: IntoIterator<Item = L>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

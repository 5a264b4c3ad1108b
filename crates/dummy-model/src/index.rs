use std::fmt;

use serde::{Deserialize, Serialize};

/// Row labels carried by a categorical column and copied into its
/// indicator table, so encoded rows can be joined back onto the source frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "labels")]
pub enum RowIndex {
    /// Positional labels `0..n`.
    Range(usize),
    Int(Vec<i64>),
    Text(Vec<String>),
}

/// A single borrowed row label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IndexLabel<'a> {
    Int(i64),
    Text(&'a str),
}

impl RowIndex {
    pub fn len(&self) -> usize {
        match self {
            RowIndex::Range(len) => *len,
            RowIndex::Int(labels) => labels.len(),
            RowIndex::Text(labels) => labels.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Label of the row at `position`, or `None` past the end.
    pub fn get(&self, position: usize) -> Option<IndexLabel<'_>> {
        match self {
            RowIndex::Range(len) if position < *len => {
                i64::try_from(position).ok().map(IndexLabel::Int)
            }
            RowIndex::Range(_) => None,
            RowIndex::Int(labels) => labels.get(position).copied().map(IndexLabel::Int),
            RowIndex::Text(labels) => labels
                .get(position)
                .map(|label| IndexLabel::Text(label.as_str())),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = IndexLabel<'_>> + '_ {
        (0..self.len()).filter_map(move |position| self.get(position))
    }
}

impl Default for RowIndex {
    fn default() -> Self {
        RowIndex::Range(0)
    }
}

impl From<Vec<i64>> for RowIndex {
    fn from(labels: Vec<i64>) -> Self {
        RowIndex::Int(labels)
    }
}

impl From<Vec<String>> for RowIndex {
    fn from(labels: Vec<String>) -> Self {
        RowIndex::Text(labels)
    }
}

impl From<Vec<&str>> for RowIndex {
    fn from(labels: Vec<&str>) -> Self {
        RowIndex::Text(labels.into_iter().map(str::to_string).collect())
    }
}

impl fmt::Display for IndexLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexLabel::Int(value) => write!(f, "{value}"),
            IndexLabel::Text(value) => f.write_str(value),
        }
    }
}

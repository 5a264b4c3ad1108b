//! Categorical level values.
//!
//! A level is any value that can be compared for equality, sorted, and
//! rendered as text for column naming. Typed callers use their own types
//! directly through the blanket [`Level`] impl; dynamically typed sources
//! (data frames) go through [`LevelValue`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Operations a categorical value must support to be fit and expanded.
///
/// - `Ord` gives the sorted catalog order and exact matching.
/// - `Display` feeds indicator column naming.
pub trait Level: Ord + Clone + fmt::Display {}

impl<T: Ord + Clone + fmt::Display> Level for T {}

/// A dynamically typed level read from a data frame column.
///
/// Variants order before their payloads, so a catalog fit on a single dtype
/// sorts exactly like the underlying values.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(tag = "kind", content = "value")]
pub enum LevelValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl fmt::Display for LevelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelValue::Bool(value) => write!(f, "{value}"),
            LevelValue::Int(value) => write!(f, "{value}"),
            LevelValue::Text(value) => f.write_str(value),
        }
    }
}

impl From<&str> for LevelValue {
    fn from(value: &str) -> Self {
        LevelValue::Text(value.to_string())
    }
}

impl From<String> for LevelValue {
    fn from(value: String) -> Self {
        LevelValue::Text(value)
    }
}

impl From<i64> for LevelValue {
    fn from(value: i64) -> Self {
        LevelValue::Int(value)
    }
}

impl From<bool> for LevelValue {
    fn from(value: bool) -> Self {
        LevelValue::Bool(value)
    }
}

//! Indicator expansion for categorical columns.
//!
//! This crate provides the transform phase of dummy encoding:
//!
//! - **expander**: dense 0/1 expansion against a fitted [`LevelCatalog`](dummy_model::LevelCatalog),
//!   full or reduced rank, plus per-row level codes
//! - **frame**: Polars adapters for reading level and index columns and
//!   writing indicator tables back as DataFrames

pub mod error;
pub mod expander;
pub mod frame;

pub use error::{Result, TransformError};
pub use expander::{Expander, fit_transform, transform};
pub use frame::{
    DEFAULT_INDEX_NAME, column_from_frame, column_from_series, fit_series, row_index_from_series,
    table_to_frame, transform_frame, transform_series,
};

use dummy_model::DummyError;
use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error(transparent)]
    Model(#[from] DummyError),
    #[error("column `{column}` has unsupported dtype {dtype}")]
    TypeMismatch { column: String, dtype: String },
    #[error("index column `{column}` has {count} null labels")]
    NullIndexLabels { column: String, count: usize },
    #[error("indicator column `{name}` has the same name as the index column")]
    IndexNameClash { name: String },
    #[error("row index of {len} positions does not fit in i64 labels")]
    IndexOverflow { len: usize },
    #[error("polars error: {0}")]
    Polars(#[from] PolarsError),
}

pub type Result<T> = std::result::Result<T, TransformError>;

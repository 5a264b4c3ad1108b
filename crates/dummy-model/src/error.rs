use thiserror::Error;

#[derive(Debug, Error)]
pub enum DummyError {
    #[error("level catalog has not been fit")]
    NotFitted,
    #[error("row index has {index_len} labels but column has {values_len} values")]
    IndexLengthMismatch { index_len: usize, values_len: usize },
    #[error("indicator buffer of length {len} does not match {rows} rows x {cols} columns")]
    ShapeMismatch { rows: usize, cols: usize, len: usize },
    #[error("duplicate indicator column name `{name}`")]
    NameCollision { name: String },
    #[error("invalid level catalog: {0}")]
    InvalidCatalog(String),
}

pub type Result<T> = std::result::Result<T, DummyError>;

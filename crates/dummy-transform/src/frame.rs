//! Polars adapters for dummy encoding.
//!
//! Converts Polars columns into [`CategoricalColumn`]s of [`LevelValue`] and
//! indicator tables back into DataFrames whose first column is the row index.
//!
//! Supported level dtypes are `String`, `Boolean` and every integer dtype
//! (widened to `i64`). Floating point and temporal dtypes have no exact total
//! order suitable for levels and are rejected with
//! [`TransformError::TypeMismatch`]. Nulls become missing values.

use dummy_model::{
    CategoricalColumn, IndicatorTable, LevelCatalog, LevelValue, RankMode, RowIndex,
};
use polars::prelude::{Column, DataFrame, DataType, NamedFrom, Series};

use crate::error::{Result, TransformError};
use crate::expander::transform;

/// Index column name used when the source frame has none.
pub const DEFAULT_INDEX_NAME: &str = "index";

fn type_mismatch(series: &Series) -> TransformError {
    TransformError::TypeMismatch {
        column: series.name().to_string(),
        dtype: series.dtype().to_string(),
    }
}

/// Read a Polars series as a categorical column with positional row labels.
pub fn column_from_series(series: &Series) -> Result<CategoricalColumn<LevelValue>> {
    let values: Vec<Option<LevelValue>> = match series.dtype() {
        DataType::String => series
            .str()?
            .into_iter()
            .map(|value| value.map(LevelValue::from))
            .collect(),
        DataType::Boolean => series
            .bool()?
            .into_iter()
            .map(|value| value.map(LevelValue::Bool))
            .collect(),
        dtype if dtype.is_integer() => series
            .strict_cast(&DataType::Int64)?
            .i64()?
            .into_iter()
            .map(|value| value.map(LevelValue::Int))
            .collect(),
        _ => return Err(type_mismatch(series)),
    };
    Ok(CategoricalColumn::from_optional(values))
}

/// Read a Polars series as row labels. Labels must be non-null integers or strings.
pub fn row_index_from_series(series: &Series) -> Result<RowIndex> {
    let nulls = series.null_count();
    if nulls > 0 {
        return Err(TransformError::NullIndexLabels {
            column: series.name().to_string(),
            count: nulls,
        });
    }
    match series.dtype() {
        DataType::String => Ok(RowIndex::Text(
            series
                .str()?
                .into_no_null_iter()
                .map(str::to_string)
                .collect(),
        )),
        dtype if dtype.is_integer() => Ok(RowIndex::Int(
            series
                .strict_cast(&DataType::Int64)?
                .i64()?
                .into_no_null_iter()
                .collect(),
        )),
        _ => Err(type_mismatch(series)),
    }
}

/// Read `value_column` of `df`, labelled by `index_column` when given.
pub fn column_from_frame(
    df: &DataFrame,
    value_column: &str,
    index_column: Option<&str>,
) -> Result<CategoricalColumn<LevelValue>> {
    let column = column_from_series(df.column(value_column)?.as_materialized_series())?;
    match index_column {
        Some(name) => {
            let index = row_index_from_series(df.column(name)?.as_materialized_series())?;
            Ok(column.with_index(index)?)
        }
        None => Ok(column),
    }
}

/// Fit `catalog` on the values of `series`.
pub fn fit_series(catalog: &mut LevelCatalog<LevelValue>, series: &Series) -> Result<()> {
    catalog.fit(&column_from_series(series)?)?;
    Ok(())
}

/// Expand `series` against a fitted catalog.
pub fn transform_series(
    catalog: &LevelCatalog<LevelValue>,
    series: &Series,
    rank: impl Into<RankMode>,
) -> Result<IndicatorTable> {
    catalog.fitted()?;
    let column = column_from_series(series)?;
    Ok(transform(catalog, &column, rank)?)
}

fn index_series(name: &str, index: &RowIndex) -> Result<Series> {
    let series = match index {
        RowIndex::Range(len) => {
            let end =
                i64::try_from(*len).map_err(|_| TransformError::IndexOverflow { len: *len })?;
            Series::new(name.into(), (0..end).collect::<Vec<i64>>())
        }
        RowIndex::Int(labels) => Series::new(name.into(), labels.clone()),
        RowIndex::Text(labels) => Series::new(name.into(), labels.clone()),
    };
    Ok(series)
}

/// Build a DataFrame with the row index in `index_name` followed by one
/// `Float64` column per indicator.
///
/// An indicator named `index_name` fails with
/// [`TransformError::IndexNameClash`]. Polars rejects duplicate column names,
/// so a catalog fit with
/// [`NameCollisionPolicy::Allow`](dummy_model::NameCollisionPolicy::Allow)
/// that produced duplicates fails here with [`TransformError::Polars`].
pub fn table_to_frame(table: &IndicatorTable, index_name: &str) -> Result<DataFrame> {
    if table.column_names().iter().any(|name| name == index_name) {
        return Err(TransformError::IndexNameClash {
            name: index_name.to_string(),
        });
    }
    let mut columns: Vec<Column> = Vec::with_capacity(table.n_cols() + 1);
    columns.push(index_series(index_name, table.index())?.into());
    for (col, name) in table.column_names().iter().enumerate() {
        let values = table.column(col).unwrap_or_default();
        columns.push(Series::new(name.as_str().into(), values).into());
    }
    Ok(DataFrame::new(columns)?)
}

/// Expand `value_column` of `df` into an indicator frame keyed by the same
/// row labels.
pub fn transform_frame(
    catalog: &LevelCatalog<LevelValue>,
    df: &DataFrame,
    value_column: &str,
    index_column: Option<&str>,
    rank: impl Into<RankMode>,
) -> Result<DataFrame> {
    catalog.fitted()?;
    let column = column_from_frame(df, value_column, index_column)?;
    let table = transform(catalog, &column, rank)?;
    table_to_frame(&table, index_column.unwrap_or(DEFAULT_INDEX_NAME))
}

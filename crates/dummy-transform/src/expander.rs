//! Dense indicator expansion against a fitted level catalog.
//!
//! Each row's value is matched exactly against the catalog's sorted levels.
//! A match at position `i` sets column `i` of that row to `1.0`; every other
//! cell stays `0.0`. Values the catalog has never seen, and missing values,
//! leave their row all-zero. That is the unknown-category policy, not an
//! error, and no extra column is ever added for it.

use dummy_model::{CategoricalColumn, IndicatorTable, Level, LevelCatalog, RankMode, Result};
use tracing::debug;

/// Expands categorical columns into indicator tables for one catalog.
///
/// The catalog is only read, so any number of expanders may share it.
#[derive(Debug, Clone)]
pub struct Expander<'a, L> {
    catalog: &'a LevelCatalog<L>,
    rank: RankMode,
}

impl<'a, L: Level> Expander<'a, L> {
    pub fn new(catalog: &'a LevelCatalog<L>) -> Self {
        Self {
            catalog,
            rank: RankMode::default(),
        }
    }

    /// Accepts a [`RankMode`] or a `reduced_rank` flag.
    pub fn with_rank(mut self, rank: impl Into<RankMode>) -> Self {
        self.rank = rank.into();
        self
    }

    pub fn rank(&self) -> RankMode {
        self.rank
    }

    /// Names of the columns [`Expander::transform`] produces.
    ///
    /// Under [`RankMode::Reduced`] the first level's name is dropped; a
    /// catalog with zero or one level then yields no columns.
    pub fn output_names(&self) -> Result<&'a [String]> {
        let names = self.catalog.column_names()?;
        let dropped = self.rank.dropped_levels().min(names.len());
        Ok(&names[dropped..])
    }

    /// Catalog position matched by each row, `None` for unknown or missing
    /// values. Positions index the full level list regardless of rank.
    pub fn codes(&self, column: &CategoricalColumn<L>) -> Result<Vec<Option<usize>>> {
        let fitted = self.catalog.fitted()?;
        Ok(column
            .iter()
            .map(|value| value.and_then(|level| fitted.position_of(level)))
            .collect())
    }

    /// Expand `column` into a table with one row per input row.
    ///
    /// The output carries a copy of the column's row index.
    ///
    /// # Errors
    ///
    /// [`DummyError::NotFitted`](dummy_model::DummyError::NotFitted) if the catalog has not been fit. Nothing is
    /// allocated in that case.
    pub fn transform(&self, column: &CategoricalColumn<L>) -> Result<IndicatorTable> {
        let fitted = self.catalog.fitted()?;
        let dropped = self.rank.dropped_levels().min(fitted.len());
        let names = fitted.column_names()[dropped..].to_vec();
        let width = names.len();
        let rows = column.len();

        let mut data = vec![0.0_f64; rows * width];
        let mut unmatched = 0usize;
        for (row, value) in column.iter().enumerate() {
            match value.and_then(|level| fitted.position_of(level)) {
                Some(position) if position >= dropped => {
                    data[row * width + position - dropped] = 1.0;
                }
                Some(_) => {}
                None => unmatched += 1,
            }
        }

        debug!(
            rows,
            columns = width,
            unmatched,
            rank = ?self.rank,
            "expanded categorical column"
        );

        IndicatorTable::from_parts(column.index().clone(), names, data)
    }
}

/// Expand `column` against `catalog`.
pub fn transform<L: Level>(
    catalog: &LevelCatalog<L>,
    column: &CategoricalColumn<L>,
    rank: impl Into<RankMode>,
) -> Result<IndicatorTable> {
    Expander::new(catalog).with_rank(rank).transform(column)
}

/// Fit `catalog` on `column`, then expand the same column.
pub fn fit_transform<L: Level>(
    catalog: &mut LevelCatalog<L>,
    column: &CategoricalColumn<L>,
    rank: impl Into<RankMode>,
) -> Result<IndicatorTable> {
    catalog.fit(column)?;
    transform(catalog, column, rank)
}

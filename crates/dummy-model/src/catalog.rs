//! Level catalog: the fit phase of dummy encoding.
//!
//! A [`LevelCatalog`] starts [`CatalogState::Unfit`]. Each call to
//! [`LevelCatalog::fit`] scans a column, collects its distinct non-missing
//! values in ascending order, derives one column name per level and replaces
//! the whole state with [`CatalogState::Fit`]. There is no incremental update;
//! fitting twice on the same data yields an identical catalog.
//!
//! ```text
//! Unfit --fit--> Fit --fit--> Fit (replaced)
//!                 |
//!                 +--> transform (read-only, repeatable)
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::column::CategoricalColumn;
use crate::error::{DummyError, Result};
use crate::level::Level;
use crate::naming::derive_column_names;
use crate::options::EncoderOptions;

/// Sorted levels and their parallel column names.
///
/// `levels` is strictly ascending and `colnames[i]` names `levels[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "RawFittedLevels<L>",
    bound(deserialize = "L: Deserialize<'de> + Ord")
)]
pub struct FittedLevels<L> {
    levels: Vec<L>,
    colnames: Vec<String>,
}

#[derive(Deserialize)]
struct RawFittedLevels<L> {
    levels: Vec<L>,
    colnames: Vec<String>,
}

impl<L: Ord> TryFrom<RawFittedLevels<L>> for FittedLevels<L> {
    type Error = DummyError;

    fn try_from(raw: RawFittedLevels<L>) -> Result<Self> {
        if raw.levels.len() != raw.colnames.len() {
            return Err(DummyError::InvalidCatalog(format!(
                "{} levels but {} column names",
                raw.levels.len(),
                raw.colnames.len()
            )));
        }
        if raw.levels.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(DummyError::InvalidCatalog(
                "levels are not strictly ascending".to_string(),
            ));
        }
        Ok(Self {
            levels: raw.levels,
            colnames: raw.colnames,
        })
    }
}

impl<L> FittedLevels<L> {
    pub fn levels(&self) -> &[L] {
        &self.levels
    }

    pub fn column_names(&self) -> &[String] {
        &self.colnames
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl<L: Ord> FittedLevels<L> {
    /// Catalog position of `level`, matched exactly.
    pub fn position_of(&self, level: &L) -> Option<usize> {
        self.levels.binary_search(level).ok()
    }
}

/// Whether a catalog has been fit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "state",
    rename_all = "snake_case",
    bound(deserialize = "L: Deserialize<'de> + Ord")
)]
pub enum CatalogState<L> {
    Unfit,
    Fit(FittedLevels<L>),
}

impl<L> Default for CatalogState<L> {
    fn default() -> Self {
        CatalogState::Unfit
    }
}

/// The distinct levels of a categorical column and the indicator column
/// names derived from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "L: Deserialize<'de> + Ord"))]
pub struct LevelCatalog<L> {
    options: EncoderOptions,
    state: CatalogState<L>,
}

impl<L> Default for LevelCatalog<L> {
    fn default() -> Self {
        Self::new(EncoderOptions::default())
    }
}

impl<L> LevelCatalog<L> {
    /// Create an unfit catalog.
    pub fn new(options: EncoderOptions) -> Self {
        Self {
            options,
            state: CatalogState::Unfit,
        }
    }

    /// Create an unfit catalog whose column names start with `<prefix>_`.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self::new(EncoderOptions::new().with_prefix(prefix))
    }

    pub fn options(&self) -> &EncoderOptions {
        &self.options
    }

    pub fn state(&self) -> &CatalogState<L> {
        &self.state
    }

    pub fn is_fitted(&self) -> bool {
        matches!(self.state, CatalogState::Fit(_))
    }

    /// The fitted levels, or [`DummyError::NotFitted`].
    pub fn fitted(&self) -> Result<&FittedLevels<L>> {
        match &self.state {
            CatalogState::Fit(fitted) => Ok(fitted),
            CatalogState::Unfit => Err(DummyError::NotFitted),
        }
    }

    pub fn levels(&self) -> Result<&[L]> {
        self.fitted().map(FittedLevels::levels)
    }

    pub fn column_names(&self) -> Result<&[String]> {
        self.fitted().map(FittedLevels::column_names)
    }

    pub fn n_levels(&self) -> Result<usize> {
        self.fitted().map(FittedLevels::len)
    }

    /// Drop any fitted state.
    pub fn reset(&mut self) {
        self.state = CatalogState::Unfit;
    }
}

impl<L: Level> LevelCatalog<L> {
    /// Learn the sorted distinct levels of `column`, replacing any prior fit.
    ///
    /// Missing values are skipped. A column with no present values fits to
    /// zero levels. On error the previous state is kept.
    ///
    /// # Errors
    ///
    /// [`DummyError::NameCollision`] when two levels derive the same column
    /// name and the policy is [`NameCollisionPolicy::Reject`](crate::NameCollisionPolicy::Reject).
    pub fn fit(&mut self, column: &CategoricalColumn<L>) -> Result<()> {
        let distinct: BTreeSet<&L> = column.iter().flatten().collect();
        let levels: Vec<L> = distinct.into_iter().cloned().collect();
        let colnames = derive_column_names(&levels, &self.options)?;

        debug!(
            rows = column.len(),
            missing = column.values().iter().filter(|value| value.is_none()).count(),
            levels = levels.len(),
            "fitted level catalog"
        );

        self.state = CatalogState::Fit(FittedLevels { levels, colnames });
        Ok(())
    }

    /// Catalog position of `level`.
    pub fn position_of(&self, level: &L) -> Result<Option<usize>> {
        self.fitted().map(|fitted| fitted.position_of(level))
    }
}

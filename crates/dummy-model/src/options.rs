//! Configuration options for dummy encoding.

use serde::{Deserialize, Serialize};

/// What to do when two levels normalize to the same column name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NameCollisionPolicy {
    /// Keep duplicate names as separate entries and log a warning.
    #[default]
    Allow,
    /// Append `_1`, `_2`, ... to later duplicates until every name is unique.
    Disambiguate,
    /// Fail the fit with [`DummyError::NameCollision`](crate::DummyError::NameCollision).
    Reject,
}

/// Whether the first level keeps its indicator column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RankMode {
    /// One indicator per level.
    #[default]
    Full,
    /// Drop the first level's indicator (K levels in K-1 columns), removing
    /// the collinearity a full dummy set adds to additive linear models.
    Reduced,
}

impl RankMode {
    /// Number of leading levels without an output column.
    pub fn dropped_levels(self) -> usize {
        match self {
            RankMode::Full => 0,
            RankMode::Reduced => 1,
        }
    }
}

impl From<bool> for RankMode {
    /// Maps a `reduced_rank` flag.
    fn from(reduced_rank: bool) -> Self {
        if reduced_rank {
            RankMode::Reduced
        } else {
            RankMode::Full
        }
    }
}

/// Construction-time options for a level catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncoderOptions {
    /// Prepended to every column name as `<prefix>_<level>`.
    /// `None` uses the normalized level alone.
    pub prefix: Option<String>,

    /// Handling of duplicate derived column names.
    /// Default: [`NameCollisionPolicy::Allow`].
    pub collision_policy: NameCollisionPolicy,
}

impl EncoderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_collision_policy(mut self, policy: NameCollisionPolicy) -> Self {
        self.collision_policy = policy;
        self
    }
}

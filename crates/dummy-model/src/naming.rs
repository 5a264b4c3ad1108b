//! Indicator column naming.
//!
//! A column name is the level's display text with every space replaced by a
//! hyphen, optionally prefixed as `<prefix>_<level>`. Nothing else in the
//! level text is altered, so distinct levels such as `"a b"` and `"a-b"`
//! derive the same name; [`NameCollisionPolicy`] decides what happens then.

use std::collections::HashSet;

use tracing::warn;

use crate::error::{DummyError, Result};
use crate::options::{EncoderOptions, NameCollisionPolicy};

/// Joins the prefix and the normalized level.
pub const PREFIX_SEPARATOR: char = '_';

/// Replaces spaces inside level text.
pub const SPACE_REPLACEMENT: char = '-';

/// Replace every space character with [`SPACE_REPLACEMENT`].
///
/// Only `' '` is replaced; tabs and other whitespace pass through unchanged.
///
/// # Examples
///
/// ```
/// use dummy_model::naming::normalize_level_name;
///
/// assert_eq!(normalize_level_name("light blue"), "light-blue");
/// assert_eq!(normalize_level_name("a  b"), "a--b");
/// assert_eq!(normalize_level_name("tab\there"), "tab\there");
/// ```
pub fn normalize_level_name(level: &str) -> String {
    level.replace(' ', &SPACE_REPLACEMENT.to_string())
}

/// Build the column name for one level.
pub fn column_name(prefix: Option<&str>, level: &str) -> String {
    let normalized = normalize_level_name(level);
    match prefix {
        Some(prefix) => format!("{prefix}{PREFIX_SEPARATOR}{normalized}"),
        None => normalized,
    }
}

/// Derive column names for sorted levels, applying the collision policy.
pub fn derive_column_names<L: ToString>(
    levels: &[L],
    options: &EncoderOptions,
) -> Result<Vec<String>> {
    let names: Vec<String> = levels
        .iter()
        .map(|level| column_name(options.prefix.as_deref(), &level.to_string()))
        .collect();

    match options.collision_policy {
        NameCollisionPolicy::Allow => {
            for name in duplicate_names(&names) {
                warn!(column = %name, "duplicate indicator column name");
            }
            Ok(names)
        }
        NameCollisionPolicy::Reject => match duplicate_names(&names).into_iter().next() {
            Some(name) => Err(DummyError::NameCollision { name }),
            None => Ok(names),
        },
        NameCollisionPolicy::Disambiguate => Ok(disambiguate(names)),
    }
}

/// Names that occur more than once, each reported once in first-repeat order.
fn duplicate_names(names: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();
    for name in names {
        if !seen.insert(name.as_str()) && reported.insert(name.as_str()) {
            duplicates.push(name.clone());
        }
    }
    duplicates
}

fn disambiguate(names: Vec<String>) -> Vec<String> {
    let mut taken: HashSet<String> = names.iter().cloned().collect();
    let mut seen: HashSet<String> = HashSet::with_capacity(names.len());
    let mut out = Vec::with_capacity(names.len());
    for name in names {
        if seen.insert(name.clone()) {
            out.push(name);
            continue;
        }
        let mut suffix = 1usize;
        let unique = loop {
            let candidate = format!("{name}{PREFIX_SEPARATOR}{suffix}");
            if !taken.contains(&candidate) {
                break candidate;
            }
            suffix += 1;
        };
        taken.insert(unique.clone());
        seen.insert(unique.clone());
        out.push(unique);
    }
    out
}

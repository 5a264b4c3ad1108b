//! Data model for categorical dummy encoding.
//!
//! - **catalog**: [`LevelCatalog`], the fit phase (sorted levels + column names)
//! - **column**: [`CategoricalColumn`], row-indexed input values
//! - **table**: [`IndicatorTable`], row-aligned 0/1 output
//! - **naming**: column name derivation and collision handling
//! - **options**: [`EncoderOptions`], [`NameCollisionPolicy`], [`RankMode`]

pub mod catalog;
pub mod column;
pub mod error;
pub mod index;
pub mod level;
pub mod naming;
pub mod options;
pub mod table;

pub use catalog::{CatalogState, FittedLevels, LevelCatalog};
pub use column::CategoricalColumn;
pub use error::{DummyError, Result};
pub use index::{IndexLabel, RowIndex};
pub use level::{Level, LevelValue};
pub use options::{EncoderOptions, NameCollisionPolicy, RankMode};
pub use table::IndicatorTable;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_sorts_distinct_levels() {
        let column = CategoricalColumn::new(vec!["red", "blue", "red", "green"]);
        let mut catalog = LevelCatalog::default();
        catalog.fit(&column).expect("fit");

        assert_eq!(catalog.levels().unwrap(), &["blue", "green", "red"]);
        assert_eq!(catalog.column_names().unwrap(), &["blue", "green", "red"]);
    }

    #[test]
    fn unfit_catalog_reports_not_fitted() {
        let catalog: LevelCatalog<String> = LevelCatalog::default();
        assert!(!catalog.is_fitted());
        assert!(matches!(catalog.levels(), Err(DummyError::NotFitted)));
        assert!(matches!(catalog.n_levels(), Err(DummyError::NotFitted)));
    }

    #[test]
    fn reset_returns_to_unfit() {
        let mut catalog = LevelCatalog::with_prefix("size");
        catalog.fit(&CategoricalColumn::new(vec![3_i64, 1, 2])).unwrap();
        assert_eq!(catalog.column_names().unwrap(), &["size_1", "size_2", "size_3"]);

        catalog.reset();
        assert_eq!(catalog.state(), &CatalogState::Unfit);
    }

    #[test]
    fn table_rejects_wrong_buffer_length() {
        let result = IndicatorTable::from_parts(
            RowIndex::Range(2),
            vec!["a".to_string(), "b".to_string()],
            vec![1.0, 0.0, 0.0],
        );
        assert!(matches!(
            result,
            Err(DummyError::ShapeMismatch {
                rows: 2,
                cols: 2,
                len: 3
            })
        ));
    }

    #[test]
    fn row_index_labels() {
        let range = RowIndex::Range(3);
        assert_eq!(range.get(2), Some(IndexLabel::Int(2)));
        assert_eq!(range.get(3), None);

        let text = RowIndex::from(vec!["b", "a"]);
        let labels: Vec<String> = text.iter().map(|label| label.to_string()).collect();
        assert_eq!(labels, vec!["b", "a"]);
    }

    #[test]
    fn table_accessors() {
        let table = IndicatorTable::from_parts(
            RowIndex::Int(vec![5, 9]),
            vec!["x".to_string(), "y".to_string()],
            vec![0.0, 1.0, 1.0, 0.0],
        )
        .unwrap();

        assert_eq!(table.value(0, 1), Some(1.0));
        assert_eq!(table.value(2, 0), None);
        assert_eq!(table.column(0), Some(vec![0.0, 1.0]));
        assert_eq!(table.column_by_name("y"), Some(vec![1.0, 0.0]));
        assert_eq!(table.row_sums(), vec![1.0, 1.0]);

        let (index, columns, data) = table.into_parts();
        assert_eq!(index.len(), 2);
        assert_eq!(columns.len(), 2);
        assert_eq!(data.len(), 4);
    }

    #[test]
    fn level_value_display() {
        assert_eq!(LevelValue::from("New York").to_string(), "New York");
        assert_eq!(LevelValue::Int(-4).to_string(), "-4");
        assert_eq!(LevelValue::Bool(true).to_string(), "true");
        assert!(LevelValue::Int(99) < LevelValue::from("0"));
    }
}

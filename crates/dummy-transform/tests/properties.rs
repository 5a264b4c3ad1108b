//! Property tests for indicator expansion.

use dummy_model::{CategoricalColumn, LevelCatalog, RankMode, RowIndex};
use dummy_transform::transform;
use proptest::prelude::*;

fn labels() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-e]{1,2}", 0..30)
}

proptest! {
    #[test]
    fn row_and_column_counts(train in labels(), test in labels(), reduced in any::<bool>()) {
        let mut catalog = LevelCatalog::default();
        catalog.fit(&CategoricalColumn::new(train)).unwrap();
        let levels = catalog.n_levels().unwrap();

        let rows = test.len();
        let table = transform(&catalog, &CategoricalColumn::new(test), reduced).unwrap();

        prop_assert_eq!(table.n_rows(), rows);
        let expected_cols = if reduced { levels.saturating_sub(1) } else { levels };
        prop_assert_eq!(table.n_cols(), expected_cols);
    }

    #[test]
    fn full_rank_rows_are_one_hot(train in labels(), test in labels()) {
        let mut catalog = LevelCatalog::default();
        catalog.fit(&CategoricalColumn::new(train)).unwrap();
        let column = CategoricalColumn::new(test.clone());
        let table = transform(&catalog, &column, RankMode::Full).unwrap();

        for (value, sum) in test.iter().zip(table.row_sums()) {
            let known = catalog.position_of(value).unwrap().is_some();
            prop_assert_eq!(sum, if known { 1.0 } else { 0.0 });
        }
        prop_assert!(table.as_slice().iter().all(|cell| *cell == 0.0 || *cell == 1.0));
    }

    #[test]
    fn index_is_copied_verbatim(
        pairs in prop::collection::vec(("[a-c]", any::<i64>()), 0..20)
    ) {
        let mut catalog = LevelCatalog::default();
        catalog.fit(&CategoricalColumn::new(vec!["a".to_string(), "b".to_string()])).unwrap();

        let (values, labels): (Vec<String>, Vec<i64>) = pairs.into_iter().unzip();
        let column = CategoricalColumn::new(values).with_index(labels.clone()).unwrap();
        let table = transform(&catalog, &column, RankMode::Reduced).unwrap();

        prop_assert_eq!(table.index(), &RowIndex::Int(labels));
    }
}

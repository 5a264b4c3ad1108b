//! Property tests for level catalog fitting.

use dummy_model::{CategoricalColumn, LevelCatalog};
use proptest::prelude::*;

fn labels() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-d ]{0,3}", 0..40)
}

proptest! {
    #[test]
    fn fit_is_idempotent(values in labels()) {
        let column = CategoricalColumn::new(values);
        let mut first = LevelCatalog::with_prefix("p");
        let mut second = LevelCatalog::with_prefix("p");
        first.fit(&column).unwrap();
        second.fit(&column).unwrap();
        second.fit(&column).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn levels_are_sorted_and_distinct(values in labels()) {
        let mut catalog = LevelCatalog::default();
        catalog.fit(&CategoricalColumn::new(values.clone())).unwrap();
        let levels = catalog.levels().unwrap();

        prop_assert!(levels.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert_eq!(levels.len(), catalog.column_names().unwrap().len());
        for value in &values {
            prop_assert!(levels.contains(value));
        }
    }

    #[test]
    fn row_order_does_not_change_catalog(mut values in labels()) {
        let mut forward = LevelCatalog::default();
        forward.fit(&CategoricalColumn::new(values.clone())).unwrap();
        values.reverse();
        let mut reversed = LevelCatalog::default();
        reversed.fit(&CategoricalColumn::new(values)).unwrap();
        prop_assert_eq!(forward, reversed);
    }
}

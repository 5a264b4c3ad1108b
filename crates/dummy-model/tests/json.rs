//! JSON persistence of columns and indicator tables.

use dummy_model::{CategoricalColumn, IndicatorTable, RowIndex};

#[test]
fn table_survives_json() {
    let table = IndicatorTable::from_parts(
        RowIndex::from(vec!["r1", "r2"]),
        vec!["blue".to_string(), "red".to_string()],
        vec![0.0, 1.0, 1.0, 0.0],
    )
    .unwrap();

    let json = serde_json::to_string(&table).expect("serialize table");
    let round: IndicatorTable = serde_json::from_str(&json).expect("deserialize table");
    assert_eq!(round, table);
}

#[test]
fn table_rejects_short_buffer() {
    let json = r#"{"index":{"kind":"Range","labels":2},"columns":["a","b"],"data":[1.0]}"#;
    let result: Result<IndicatorTable, _> = serde_json::from_str(json);
    let err = result.expect_err("buffer too short for 2x2");
    assert!(err.to_string().contains("does not match 2 rows x 2 columns"));
}

#[test]
fn table_rejects_long_buffer() {
    let json = r#"{"index":{"kind":"Int","labels":[7]},"columns":["a"],"data":[1.0,0.0]}"#;
    let result: Result<IndicatorTable, _> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[test]
fn column_survives_json() {
    let column = CategoricalColumn::from_optional(vec![Some("red".to_string()), None])
        .with_index(vec![10_i64, 20])
        .unwrap();

    let json = serde_json::to_string(&column).expect("serialize column");
    let round: CategoricalColumn<String> = serde_json::from_str(&json).expect("deserialize column");
    assert_eq!(round, column);
}

#[test]
fn column_rejects_index_length_mismatch() {
    let json = r#"{"index":{"kind":"Range","labels":3},"values":["red",null]}"#;
    let result: Result<CategoricalColumn<String>, _> = serde_json::from_str(json);
    let err = result.expect_err("three labels for two values");
    assert!(err.to_string().contains("3 labels but column has 2 values"));
}

mod common;

use common::{
    synthetic_row, synthetic_symbol, synthetic_table_toml, synthetic_table_with_row, table_toml,
};
use elemtab::{ELEMENT_COUNT, ElemTabError, ElementTable};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

#[test]
fn loads_valid_synthetic_table() {
    let table = ElementTable::load_from_str(&synthetic_table_toml()).unwrap();
    assert_eq!(table.len(), ELEMENT_COUNT);
    assert_eq!(table.symbol(0).unwrap(), synthetic_symbol(0));
    assert_eq!(table.symbol(103).unwrap(), synthetic_symbol(103));
}

#[test]
fn rejects_wrong_entry_count() {
    let rows: Vec<String> = (0..3).map(synthetic_row).collect();
    let result = ElementTable::load_from_str(&table_toml(&rows));
    assert!(matches!(
        result,
        Err(ElemTabError::WrongEntryCount {
            expected: ELEMENT_COUNT,
            found: 3,
        })
    ));
}

#[test]
fn rejects_invalid_symbol() {
    let doc = synthetic_table_with_row(
        17,
        "{ symbol = \"Qx\", radius = 1.00, color = [0.50, 0.50, 0.50], energy = [0.60, 0.60, 0.60] }",
    );
    let result = ElementTable::load_from_str(&doc);
    assert!(matches!(
        result,
        Err(ElemTabError::InvalidSymbol { index: 17, .. })
    ));
}

#[test]
fn rejects_color_channel_outside_unit_range() {
    let doc = synthetic_table_with_row(
        8,
        "{ symbol = \"qq\", radius = 1.00, color = [0.50, 1.20, 0.50], energy = [0.60, 0.60, 0.60] }",
    );
    let result = ElementTable::load_from_str(&doc);
    match result {
        Err(ElemTabError::ColorOutOfRange { index, value }) => {
            assert_eq!(index, 8);
            assert_eq!(value, 1.20);
        }
        other => panic!("expected ColorOutOfRange, got {:?}", other),
    }
}

#[test]
fn rejects_non_positive_radius() {
    let doc = synthetic_table_with_row(
        42,
        "{ symbol = \"qq\", radius = 0.00, color = [0.50, 0.50, 0.50], energy = [0.60, 0.60, 0.60] }",
    );
    let result = ElementTable::load_from_str(&doc);
    assert!(matches!(
        result,
        Err(ElemTabError::NonPositiveValue {
            index: 42,
            field: "radius",
            ..
        })
    ));
}

#[test]
fn rejects_non_positive_energy_coefficient() {
    let doc = synthetic_table_with_row(
        99,
        "{ symbol = \"qq\", radius = 1.00, color = [0.50, 0.50, 0.50], energy = [0.60, -0.60, 0.60] }",
    );
    let result = ElementTable::load_from_str(&doc);
    assert!(matches!(
        result,
        Err(ElemTabError::NonPositiveValue {
            index: 99,
            field: "energy",
            ..
        })
    ));
}

#[test]
fn rejects_invalid_toml() {
    let result = ElementTable::load_from_str("this is not valid toml");
    assert!(matches!(
        result,
        Err(ElemTabError::DeserializationError(_))
    ));
}

#[test]
fn rejects_missing_field() {
    let doc = synthetic_table_with_row(
        0,
        "{ symbol = \"qq\", radius = 1.00, color = [0.50, 0.50, 0.50] }",
    );
    let result = ElementTable::load_from_str(&doc);
    assert!(matches!(
        result,
        Err(ElemTabError::DeserializationError(_))
    ));
}

#[test]
fn loads_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", synthetic_table_toml()).unwrap();

    let table = ElementTable::load_from_file(temp_file.path()).unwrap();
    assert_eq!(table.len(), ELEMENT_COUNT);
}

#[test]
fn reports_missing_file() {
    let path = Path::new("non_existent_table.toml");
    let result = ElementTable::load_from_file(path);
    assert!(matches!(result, Err(ElemTabError::IoError { .. })));
}

//! Column tests.

use valuetable_foundation::Column;

#[test]
fn headers_round_trip() {
    for column in Column::ALL {
        assert_eq!(Column::from_header(column.header()), Some(column));
    }
}

#[test]
fn headers_are_trimmed_but_case_sensitive() {
    assert_eq!(Column::from_header("  Value "), Some(Column::Value));
    assert_eq!(Column::from_header("value"), None);
    assert_eq!(Column::from_header("Rate of change"), None);
}

#[test]
fn aliases_cover_numeric_columns() {
    for column in Column::NUMERIC {
        let alias = column.alias().unwrap();
        assert_eq!(Column::from_alias(alias), Some(column));
        assert_eq!(Column::from_alias(&alias.to_uppercase()), Some(column));
        assert!(column.is_numeric());
    }
    assert_eq!(Column::Name.alias(), None);
    assert!(!Column::Name.is_numeric());
}

//! CSV loading tests.

use std::io::Write;

use tempfile::NamedTempFile;
use valuetable_foundation::ErrorKind;
use valuetable_storage::{CsvSource, DatasetStore};

const HEADER: &str = "Item name,Demand (out of 10),Value,rate of change\n";

fn write_csv(body: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{body}").unwrap();
    file
}

#[test]
fn loads_file_in_order() {
    let file = write_csv(&format!(
        "{HEADER}Frost Aura,8,100,1.2\nFestival Aura,6,50,0.5\nStorm Aura,7,\"1,250\",-0.3\n"
    ));
    let store = DatasetStore::load(CsvSource::from_path(file.path()).unwrap()).unwrap();

    let names: Vec<_> = store.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Frost Aura", "Festival Aura", "Storm Aura"]);
    assert_eq!(store.get(2).unwrap().value, Some(1250.0));
    assert_eq!(store.get(2).unwrap().rate_of_change, Some(-0.3));
}

#[test]
fn headers_may_be_padded_and_reordered() {
    let data = " Value , Item name ,rate of change,Demand (out of 10),Notes\n100,Frost Aura,1.2,8,cold\n";
    let store = DatasetStore::load(CsvSource::from_reader(data.as_bytes())).unwrap();
    let frost = store.get(0).unwrap();
    assert_eq!(frost.name, "Frost Aura");
    assert_eq!(frost.value, Some(100.0));
    assert_eq!(frost.demand, Some(8.0));
}

#[test]
fn missing_file_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = CsvSource::from_path(dir.path().join("absent.csv"))
        .err()
        .unwrap();
    assert!(matches!(err.kind, ErrorKind::Load(_)));
    assert!(err.is_fatal());
}

#[test]
fn missing_headers_are_all_named() {
    let file = write_csv("Item name,Value\nFrost Aura,100\n");
    let err = DatasetStore::load(CsvSource::from_path(file.path()).unwrap()).unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::MissingColumns(vec![
            "Demand (out of 10)".to_string(),
            "rate of change".to_string()
        ])
    );
    assert!(err.is_fatal());
    let context = err.context.unwrap().to_string();
    assert!(context.contains(&file.path().display().to_string()));
}

#[test]
fn header_case_matters() {
    let data = "item name,Demand (out of 10),Value,rate of change\nFrost Aura,8,100,1.2\n";
    let err = DatasetStore::load(CsvSource::from_reader(data.as_bytes())).unwrap_err();
    assert_eq!(err.kind.code(), "missing_columns");
}

#[test]
fn header_only_file_is_empty_store() {
    let file = write_csv(HEADER);
    let store = DatasetStore::load(CsvSource::from_path(file.path()).unwrap()).unwrap();
    assert!(store.is_empty());
}

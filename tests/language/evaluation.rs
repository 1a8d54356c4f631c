//! Filter evaluation tests.

use valuetable_language::{Filter, Truth, parse};
use valuetable_storage::ItemRecord;

fn records() -> Vec<ItemRecord> {
    vec![
        ItemRecord::new("Frost Aura")
            .with_demand(8.0)
            .with_value(100.0)
            .with_rate_of_change(1.2),
        ItemRecord::new("Festival Aura")
            .with_demand(6.0)
            .with_value(50.0)
            .with_rate_of_change(0.5),
        ItemRecord::new("Mystery Aura").with_demand(9.0),
    ]
}

fn names(source: &str) -> Vec<String> {
    let records = records();
    Filter::compile(source)
        .unwrap()
        .apply(&records)
        .into_iter()
        .map(|r| r.name.clone())
        .collect()
}

#[test]
fn simple_comparison() {
    assert_eq!(names("value > 60"), vec!["Frost Aura"]);
}

#[test]
fn matches_keep_load_order() {
    assert_eq!(names("demand >= 6"), vec!["Frost Aura", "Festival Aura", "Mystery Aura"]);
}

#[test]
fn absent_cells_never_match() {
    assert_eq!(names("value < 1000"), vec!["Frost Aura", "Festival Aura"]);
    assert_eq!(names("not value < 1000"), Vec::<String>::new());
}

#[test]
fn known_side_decides_disjunction() {
    assert_eq!(
        names("value > 60 or demand > 8"),
        vec!["Frost Aura", "Mystery Aura"]
    );
}

#[test]
fn field_to_field_comparison() {
    assert_eq!(names("demand > value"), Vec::<String>::new());
    assert_eq!(names("value > demand"), vec!["Frost Aura", "Festival Aura"]);
}

#[test]
fn unknown_truth_is_reported() {
    let mystery = ItemRecord::new("Mystery Aura").with_demand(9.0);
    let expr = parse("value > 1 and demand > 1").unwrap();
    assert_eq!(expr.evaluate(&mystery), Truth::Unknown);
    let expr = parse("value > 1 and demand > 10").unwrap();
    assert_eq!(expr.evaluate(&mystery), Truth::False);
}

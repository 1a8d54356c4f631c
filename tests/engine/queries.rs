//! Ranking and filter query tests.

use proptest::prelude::*;
use valuetable_engine::{Criterion, QueryEngine};
use valuetable_foundation::ErrorKind;
use valuetable_storage::{DatasetStore, ItemRecord};

fn store() -> DatasetStore {
    DatasetStore::from_records([
        ItemRecord::new("Frost Aura")
            .with_demand(8.0)
            .with_value(100.0)
            .with_rate_of_change(1.2),
        ItemRecord::new("Festival Aura")
            .with_demand(6.0)
            .with_value(50.0)
            .with_rate_of_change(0.5),
        ItemRecord::new("Storm Aura")
            .with_demand(8.0)
            .with_rate_of_change(-0.4),
        ItemRecord::new("Ember Aura").with_value(100.0),
    ])
    .unwrap()
}

fn names(records: &[&ItemRecord]) -> Vec<String> {
    records.iter().map(|r| r.name.clone()).collect()
}

#[test]
fn top_value_skips_absent_and_keeps_ties_in_order() {
    let store = store();
    let top = QueryEngine::new(&store).top_n("value", 10).unwrap();
    assert_eq!(names(&top), vec!["Frost Aura", "Ember Aura", "Festival Aura"]);
}

#[test]
fn top_demand_truncates() {
    let store = store();
    let top = QueryEngine::new(&store).top_n(" Demand ", 2).unwrap();
    assert_eq!(names(&top), vec!["Frost Aura", "Storm Aura"]);
}

#[test]
fn rate_of_change_is_not_a_top_criterion() {
    let store = store();
    let err = QueryEngine::new(&store)
        .top_n("rate_of_change", 3)
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidCriterion("rate_of_change".into()));
    assert!(Criterion::parse("price").is_err());
}

#[test]
fn recent_ranks_by_rate_of_change() {
    let store = store();
    let recent = QueryEngine::new(&store).recent(5);
    assert_eq!(names(&recent), vec!["Frost Aura", "Festival Aura", "Storm Aura"]);
}

#[test]
fn filter_keeps_load_order() {
    let store = store();
    let matched = QueryEngine::new(&store)
        .filter("demand >= 8 or value >= 100")
        .unwrap();
    assert_eq!(names(&matched), vec!["Frost Aura", "Storm Aura", "Ember Aura"]);
}

#[test]
fn bad_filter_echoes_expression() {
    let store = store();
    let err = QueryEngine::new(&store).filter("value >> 3").unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::InvalidFilterExpression { ref expression, .. } if expression == "value >> 3"
    ));
}

#[test]
fn oversized_filter_is_an_error() {
    let store = store();
    let source = vec!["value > 1"; 10_000].join(" and ");
    let err = QueryEngine::new(&store).filter(&source).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidFilterExpression { .. }));
}

#[test]
fn empty_store_answers_empty() {
    let store = DatasetStore::default();
    let queries = QueryEngine::new(&store);
    assert!(queries.top_n("value", 5).unwrap().is_empty());
    assert!(queries.filter("value > 0").unwrap().is_empty());
}

fn records() -> impl Strategy<Value = Vec<ItemRecord>> {
    prop::collection::vec(prop::option::of(0i32..20), 0..30).prop_map(|values| {
        values
            .into_iter()
            .enumerate()
            .map(|(i, v)| {
                let mut record = ItemRecord::new(format!("Item {i}"));
                record.value = v.map(f64::from);
                record
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn top_n_is_sorted_bounded_and_stable(records in records(), n in 1usize..40) {
        let store = DatasetStore::from_records(records.clone()).unwrap();
        let top = QueryEngine::new(&store).top_n("value", n).unwrap();

        let present = records.iter().filter(|r| r.value.is_some()).count();
        prop_assert_eq!(top.len(), n.min(present));

        for pair in top.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            prop_assert!(a.value >= b.value);
            if a.value == b.value {
                let index = |r: &ItemRecord| records.iter().position(|x| x.name == r.name);
                prop_assert!(index(a) < index(b));
            }
        }
    }

    #[test]
    fn filter_results_all_satisfy_the_predicate(records in records(), bound in 0i32..20) {
        let store = DatasetStore::from_records(records).unwrap();
        let matched = QueryEngine::new(&store)
            .filter(&format!("value > {bound}"))
            .unwrap();
        for record in &matched {
            prop_assert!(record.value.is_some_and(|v| v > f64::from(bound)));
        }
        let expected = store
            .iter()
            .filter(|r| r.value.is_some_and(|v| v > f64::from(bound)))
            .count();
        prop_assert_eq!(matched.len(), expected);
    }
}

//! Property-based filter tests.

use proptest::prelude::*;
use valuetable_language::{Filter, parse};
use valuetable_storage::ItemRecord;

fn column() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("demand"), Just("value"), Just("rate_of_change")]
}

fn op() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(">"), Just("<"), Just(">="), Just("<="), Just("=="), Just("!=")]
}

fn comparison() -> impl Strategy<Value = String> {
    (column(), op(), -100i32..100).prop_map(|(c, o, n)| format!("{c} {o} {n}"))
}

fn expression() -> impl Strategy<Value = String> {
    comparison().prop_recursive(4, 32, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(a, b)| format!("({a}) and ({b})")),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| format!("({a}) or ({b})")),
            inner.prop_map(|a| format!("not ({a})")),
        ]
    })
}

fn record() -> impl Strategy<Value = ItemRecord> {
    (
        prop::option::of(0i32..10),
        prop::option::of(-100i32..100),
        prop::option::of(-5i32..5),
    )
        .prop_map(|(d, v, r)| {
            let mut record = ItemRecord::new("Item");
            record.demand = d.map(f64::from);
            record.value = v.map(f64::from);
            record.rate_of_change = r.map(f64::from);
            record
        })
}

proptest! {
    #[test]
    fn printed_expressions_reparse_to_the_same_tree(source in expression()) {
        let expr = parse(&source).unwrap();
        let printed = expr.to_string();
        let reparsed = parse(&printed).unwrap();
        prop_assert_eq!(printed, reparsed.to_string());
    }

    #[test]
    fn filtering_is_idempotent(
        source in expression(),
        records in prop::collection::vec(record(), 0..20),
    ) {
        let filter = Filter::compile(&source).unwrap();
        let once: Vec<ItemRecord> = filter.apply(&records).into_iter().cloned().collect();
        let twice: Vec<ItemRecord> = filter.apply(&once).into_iter().cloned().collect();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn a_filter_and_its_negation_never_both_match(
        source in expression(),
        record in record(),
    ) {
        let filter = Filter::compile(&source).unwrap();
        let negated = Filter::compile(&format!("not ({source})")).unwrap();
        prop_assert!(!(filter.matches(&record) && negated.matches(&record)));
    }

    #[test]
    fn complete_records_match_exactly_one_side(
        source in expression(),
        d in 0i32..10,
        v in -100i32..100,
        r in -5i32..5,
    ) {
        let record = ItemRecord::new("Item")
            .with_demand(f64::from(d))
            .with_value(f64::from(v))
            .with_rate_of_change(f64::from(r));
        let filter = Filter::compile(&source).unwrap();
        let negated = Filter::compile(&format!("not ({source})")).unwrap();
        prop_assert!(filter.matches(&record) != negated.matches(&record));
    }
}

//! Trade valuation tests.

use proptest::prelude::*;
use valuetable_engine::{Fairness, LineOutcome, TradeComparator, TradeParty};
use valuetable_foundation::ErrorKind;
use valuetable_parser::{DEFAULT_TRADE_SEPARATOR as FOR, NameResolver, TradeExpression};
use valuetable_storage::{DatasetStore, ItemRecord};

fn store() -> DatasetStore {
    DatasetStore::from_records([
        ItemRecord::new("Frost Aura").with_value(100.0),
        ItemRecord::new("Festival Aura").with_value(50.0),
        ItemRecord::new("Shadow Cloak").with_value(12.9),
        ItemRecord::new("Mystery Box"),
    ])
    .unwrap()
}

fn compare(expression: &str) -> valuetable_engine::TradeResult {
    TradeComparator::default()
        .compare(&store(), &NameResolver::new(), expression)
        .unwrap()
}

#[test]
fn balanced_trade_is_fair() {
    let result = compare(&format!("Frost Aura x1 {FOR} Festival Aura x2"));
    assert_eq!(result.verdict, Fairness::Fair);
    assert_eq!(result.mine.total, 100);
    assert_eq!(result.theirs.total, 100);
    assert_eq!(result.difference, 0);
}

#[test]
fn larger_side_is_overpaying() {
    let result = compare(&format!("Frost Aura x2 {FOR} Festival Aura x1"));
    assert_eq!(result.verdict, Fairness::Overpaying(TradeParty::Mine));
    assert_eq!(result.difference, 150);
}

#[test]
fn unit_values_are_truncated() {
    let result = compare(&format!("Shadow Cloak x3 {FOR}"));
    assert_eq!(
        result.mine.lines[0].outcome,
        LineOutcome::Priced {
            item_name: "Shadow Cloak".into(),
            unit_value: 12,
            line_total: 36
        }
    );
}

#[test]
fn misspelled_lines_resolve_to_closest_item() {
    let result = compare(&format!("<:ice:1> Frost Aurra x1 {FOR} Festivle Aura x2"));
    assert_eq!(result.verdict, Fairness::Fair);
    assert_eq!(result.mine.lines[0].raw_name, "<:ice:1> Frost Aurra");
}

#[test]
fn unknown_and_unpriced_lines_count_zero() {
    let result = compare(&format!("zzzznotreal x4, Mystery Box x2 {FOR} Frost Aura x1"));
    assert_eq!(result.mine.lines[0].outcome, LineOutcome::NotFound);
    assert_eq!(
        result.mine.lines[1].outcome,
        LineOutcome::Unpriced {
            item_name: "Mystery Box".into()
        }
    );
    assert_eq!(result.mine.total, 0);
    assert_eq!(result.verdict, Fairness::Overpaying(TradeParty::Theirs));
}

#[test]
fn separator_errors_surface() {
    let comparator = TradeComparator::default();
    let resolver = NameResolver::new();
    let err = comparator
        .compare(&store(), &resolver, "Frost Aura x1")
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MissingSeparator(_)));
    let err = comparator
        .compare(&store(), &resolver, &format!("a x1 {FOR} b x1 {FOR}"))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::RepeatedSeparator(_)));
}

fn side() -> impl Strategy<Value = Vec<(usize, u32)>> {
    prop::collection::vec((0usize..3, 1u32..50), 0..5)
}

proptest! {
    #[test]
    fn swapping_sides_mirrors_the_result(mine in side(), theirs in side()) {
        let store = store();
        let render = |side: &[(usize, u32)]| {
            side.iter()
                .map(|(i, q)| format!("{} x{q}", store.get(*i).unwrap().name))
                .collect::<Vec<_>>()
                .join(", ")
        };
        let trade = TradeExpression::parse(&format!("{} {FOR} {}", render(&mine), render(&theirs)), FOR)
            .unwrap();
        let resolver = NameResolver::new();

        let forward = TradeComparator::value(&store, &resolver, &trade);
        let backward = TradeComparator::value(&store, &resolver, &trade.swapped());

        prop_assert_eq!(backward.difference, -forward.difference);
        let mirrored = match forward.verdict {
            Fairness::Fair => Fairness::Fair,
            Fairness::Overpaying(party) => Fairness::Overpaying(party.other()),
        };
        prop_assert_eq!(backward.verdict, mirrored);
        prop_assert_eq!(forward.clone().swapped(), backward);
    }
}

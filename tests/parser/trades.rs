//! Trade expression tests.

use proptest::prelude::*;
use valuetable_foundation::ErrorKind;
use valuetable_parser::{DEFAULT_TRADE_SEPARATOR as FOR, IgnoreReason, TradeExpression, TradeSide};

#[test]
fn oversized_quantity_is_invalid() {
    let side = TradeSide::parse("Frost Aura x99999999999");
    assert!(side.is_empty());
    assert_eq!(side.ignored[0].reason, IgnoreReason::InvalidQuantity);
}

#[test]
fn both_sides_may_be_empty() {
    let trade = TradeExpression::parse(FOR, FOR).unwrap();
    assert!(trade.mine.is_empty());
    assert!(trade.theirs.is_empty());
}

#[test]
fn separator_inside_a_word_still_splits() {
    let trade = TradeExpression::parse("a x1=>b x2", "=>").unwrap();
    assert_eq!(trade.mine.entries[0].name, "a");
    assert_eq!(trade.theirs.entries[0].quantity, 2);
}

#[test]
fn plain_for_is_not_the_separator() {
    let err = TradeExpression::parse("a x1 for b x1", FOR).unwrap_err();
    assert_eq!(err.kind, ErrorKind::MissingSeparator(FOR.to_string()));
}

fn entry() -> impl Strategy<Value = (String, u32)> {
    ("[A-Z][a-w ]{0,10}[a-w]", 1u32..1000)
}

proptest! {
    #[test]
    fn well_formed_entries_are_read_back(
        mine in prop::collection::vec(entry(), 0..5),
        theirs in prop::collection::vec(entry(), 0..5),
    ) {
        let render = |side: &[(String, u32)]| {
            side.iter()
                .map(|(name, qty)| format!("{name} x{qty}"))
                .collect::<Vec<_>>()
                .join(", ")
        };
        let text = format!("{} {FOR} {}", render(&mine), render(&theirs));
        let trade = TradeExpression::parse(&text, FOR).unwrap();

        let read = |side: &TradeSide| {
            side.entries
                .iter()
                .map(|e| (e.name.clone(), e.quantity))
                .collect::<Vec<_>>()
        };
        let trimmed = |side: &[(String, u32)]| {
            side.iter()
                .map(|(name, qty)| (name.trim().to_string(), *qty))
                .collect::<Vec<_>>()
        };
        prop_assert_eq!(read(&trade.mine), trimmed(&mine));
        prop_assert_eq!(read(&trade.theirs), trimmed(&theirs));
    }

    #[test]
    fn swapping_twice_is_identity(text in "[a-z ,0-9x]{0,30}", rest in "[a-z ,0-9x]{0,30}") {
        let trade = TradeExpression::parse(&format!("{text}{FOR}{rest}"), FOR).unwrap();
        prop_assert_eq!(trade.clone().swapped().swapped(), trade);
    }
}

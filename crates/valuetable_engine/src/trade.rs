//! Trade valuation.
//!
//! Each entry of a parsed [`TradeExpression`] is resolved to its closest
//! dataset row and priced at `trunc(value) * quantity`. Entries that cannot
//! be priced contribute zero but still appear in the breakdown.

use tracing::debug;
use valuetable_foundation::Result;
use valuetable_parser::{IgnoredToken, NameResolver, TradeEntry, TradeExpression, TradeSide};
use valuetable_storage::DatasetStore;

/// How one trade line was priced.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "status", rename_all = "snake_case"))]
pub enum LineOutcome {
    /// Resolved to an item with a value.
    Priced {
        /// Dataset name of the resolved item.
        item_name: String,
        /// Whole-number unit value.
        unit_value: i64,
        /// `unit_value * quantity`, saturating.
        line_total: i64,
    },
    /// Resolved to an item without a value.
    Unpriced {
        /// Dataset name of the resolved item.
        item_name: String,
    },
    /// No item was close enough.
    NotFound,
}

impl LineOutcome {
    /// Returns the amount this line adds to its side.
    #[must_use]
    pub const fn contribution(&self) -> i64 {
        match self {
            Self::Priced { line_total, .. } => *line_total,
            Self::Unpriced { .. } | Self::NotFound => 0,
        }
    }
}

/// One priced entry.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TradeLine {
    /// Name as written.
    pub raw_name: String,
    /// Units traded.
    pub quantity: u32,
    /// Pricing result.
    pub outcome: LineOutcome,
}

/// Priced breakdown of one side.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SideBreakdown {
    /// Lines in the order written.
    pub lines: Vec<TradeLine>,
    /// Sum of line contributions, saturating.
    pub total: i64,
    /// Entries skipped while parsing.
    pub ignored: Vec<IgnoredToken>,
}

/// A party to the trade.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TradeParty {
    /// The requester.
    Mine,
    /// The other party.
    Theirs,
}

impl TradeParty {
    /// Returns the other party.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Mine => Self::Theirs,
            Self::Theirs => Self::Mine,
        }
    }
}

/// Fairness verdict.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "verdict", content = "party", rename_all = "snake_case"))]
pub enum Fairness {
    /// Both sides total the same.
    Fair,
    /// This party gives more value than it receives.
    Overpaying(TradeParty),
}

/// Result of valuing a trade.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TradeResult {
    /// What the requester gives.
    pub mine: SideBreakdown,
    /// What the other party gives.
    pub theirs: SideBreakdown,
    /// Verdict on the totals.
    pub verdict: Fairness,
    /// `mine.total - theirs.total`, saturating.
    pub difference: i64,
}

impl TradeResult {
    fn from_sides(mine: SideBreakdown, theirs: SideBreakdown) -> Self {
        let verdict = match mine.total.cmp(&theirs.total) {
            std::cmp::Ordering::Equal => Fairness::Fair,
            std::cmp::Ordering::Greater => Fairness::Overpaying(TradeParty::Mine),
            std::cmp::Ordering::Less => Fairness::Overpaying(TradeParty::Theirs),
        };
        let difference = mine.total.saturating_sub(theirs.total);
        Self {
            mine,
            theirs,
            verdict,
            difference,
        }
    }

    /// Returns the same result seen from the other party.
    #[must_use]
    pub fn swapped(self) -> Self {
        Self::from_sides(self.theirs, self.mine)
    }
}

/// Values trades against a dataset.
#[derive(Clone, Debug)]
pub struct TradeComparator {
    separator: String,
}

impl TradeComparator {
    /// Creates a comparator splitting sides at `separator`.
    #[must_use]
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }

    /// Returns the side separator.
    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Parses and values a trade expression.
    ///
    /// # Errors
    /// Returns `MissingSeparator` or `RepeatedSeparator` if the expression
    /// does not contain the separator exactly once.
    pub fn compare(
        &self,
        store: &DatasetStore,
        resolver: &NameResolver,
        expression: &str,
    ) -> Result<TradeResult> {
        let trade = TradeExpression::parse(expression, &self.separator)?;
        Ok(Self::value(store, resolver, &trade))
    }

    /// Values an already parsed trade.
    #[must_use]
    pub fn value(store: &DatasetStore, resolver: &NameResolver, trade: &TradeExpression) -> TradeResult {
        let mine = price_side(store, resolver, &trade.mine);
        let theirs = price_side(store, resolver, &trade.theirs);
        let result = TradeResult::from_sides(mine, theirs);
        debug!(
            mine = result.mine.total,
            theirs = result.theirs.total,
            verdict = ?result.verdict,
            "valued trade"
        );
        result
    }
}

impl Default for TradeComparator {
    fn default() -> Self {
        Self::new(valuetable_parser::DEFAULT_TRADE_SEPARATOR)
    }
}

fn price_side(store: &DatasetStore, resolver: &NameResolver, side: &TradeSide) -> SideBreakdown {
    let lines: Vec<TradeLine> = side
        .entries
        .iter()
        .map(|entry| price_line(store, resolver, entry))
        .collect();
    let total = lines
        .iter()
        .fold(0i64, |acc, line| acc.saturating_add(line.outcome.contribution()));
    SideBreakdown {
        lines,
        total,
        ignored: side.ignored.clone(),
    }
}

fn price_line(store: &DatasetStore, resolver: &NameResolver, entry: &TradeEntry) -> TradeLine {
    let outcome = match resolver.resolve_closest(store, &entry.name) {
        None => LineOutcome::NotFound,
        Some(record) => match record.value {
            None => LineOutcome::Unpriced {
                item_name: record.name.clone(),
            },
            Some(value) => {
                let unit_value = whole_value(value);
                LineOutcome::Priced {
                    item_name: record.name.clone(),
                    unit_value,
                    line_total: unit_value.saturating_mul(i64::from(entry.quantity)),
                }
            }
        },
    };
    TradeLine {
        raw_name: entry.name.clone(),
        quantity: entry.quantity,
        outcome,
    }
}

/// Truncates toward zero, saturating at the `i64` bounds.
#[allow(clippy::cast_possible_truncation)]
fn whole_value(value: f64) -> i64 {
    // `as` saturates for out-of-range floats.
    value.trunc() as i64
}

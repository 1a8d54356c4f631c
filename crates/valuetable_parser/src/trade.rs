//! Trade expression parsing.
//!
//! A trade expression names what each party gives, separated by a single
//! separator token:
//!
//! ```text
//! Frost Aura x2, Festival Aura x1 <:for:1310746627572633664> Mystery Box x3
//! └──────────── mine ───────────┘                            └── theirs ──┘
//! ```
//!
//! Each side is a comma-separated list of `name x quantity` entries, split at
//! the last `x`. Entries that cannot be read are kept as [`IgnoredToken`]s
//! rather than failing the whole trade.

use std::fmt;

use valuetable_foundation::{Error, Result};

/// Separator used when none is configured.
pub const DEFAULT_TRADE_SEPARATOR: &str = "<:for:1310746627572633664>";

/// One `name x quantity` entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TradeEntry {
    /// Raw item name, before sanitizing or resolution.
    pub name: String,
    /// Number of units; always positive.
    pub quantity: u32,
}

/// Why an entry was skipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum IgnoreReason {
    /// Nothing between the commas.
    Empty,
    /// No `x` marker or nothing after it.
    MissingQuantity,
    /// The text after the last `x` is not a whole number.
    InvalidQuantity,
    /// The quantity is zero.
    ZeroQuantity,
    /// Nothing before the last `x`.
    MissingName,
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Empty => "empty entry",
            Self::MissingQuantity => "missing 'x<quantity>'",
            Self::InvalidQuantity => "quantity is not a whole number",
            Self::ZeroQuantity => "quantity must be at least 1",
            Self::MissingName => "missing item name",
        })
    }
}

/// An entry that was skipped, with the reason.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IgnoredToken {
    /// The entry text as written, trimmed.
    pub token: String,
    /// Why it was skipped.
    pub reason: IgnoreReason,
}

/// One party's side of a trade.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TradeSide {
    /// Entries in the order written.
    pub entries: Vec<TradeEntry>,
    /// Entries that could not be read.
    pub ignored: Vec<IgnoredToken>,
}

impl TradeSide {
    /// Parses a comma-separated entry list.
    ///
    /// Each entry splits at its last `x`, so names that themselves contain
    /// an `x` (`Mystery Box x3`, `Lynx Pelt x2`) are accepted as written.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut side = Self::default();
        for token in text.split(',') {
            match parse_entry(token) {
                Ok(entry) => side.entries.push(entry),
                Err(reason) => side.ignored.push(IgnoredToken {
                    token: token.trim().to_string(),
                    reason,
                }),
            }
        }
        side
    }

    /// Returns true if no entry could be read.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse_entry(token: &str) -> std::result::Result<TradeEntry, IgnoreReason> {
    let token = token.trim();
    if token.is_empty() {
        return Err(IgnoreReason::Empty);
    }
    let (name, quantity) = token.rsplit_once('x').ok_or(IgnoreReason::MissingQuantity)?;
    let (name, quantity) = (name.trim(), quantity.trim());
    if quantity.is_empty() {
        return Err(IgnoreReason::MissingQuantity);
    }
    if !quantity.bytes().all(|b| b.is_ascii_digit()) {
        return Err(IgnoreReason::InvalidQuantity);
    }
    let quantity: u32 = quantity
        .parse()
        .map_err(|_| IgnoreReason::InvalidQuantity)?;
    if quantity == 0 {
        return Err(IgnoreReason::ZeroQuantity);
    }
    if name.is_empty() {
        return Err(IgnoreReason::MissingName);
    }
    Ok(TradeEntry {
        name: name.to_string(),
        quantity,
    })
}

/// A parsed two-sided trade.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TradeExpression {
    /// What the requester gives.
    pub mine: TradeSide,
    /// What the other party gives.
    pub theirs: TradeSide,
}

impl TradeExpression {
    /// Splits an expression at the separator and parses both sides.
    ///
    /// # Errors
    /// Returns `MissingSeparator` if the separator is absent (or empty) and
    /// `RepeatedSeparator` if it appears more than once.
    pub fn parse(expression: &str, separator: &str) -> Result<Self> {
        if separator.is_empty() {
            return Err(Error::missing_separator(separator));
        }
        let (mine, theirs) = expression
            .split_once(separator)
            .ok_or_else(|| Error::missing_separator(separator))?;
        if theirs.contains(separator) {
            return Err(Error::repeated_separator(separator));
        }
        Ok(Self {
            mine: TradeSide::parse(mine),
            theirs: TradeSide::parse(theirs),
        })
    }

    /// Returns the same trade seen from the other party.
    #[must_use]
    pub fn swapped(self) -> Self {
        Self {
            mine: self.theirs,
            theirs: self.mine,
        }
    }
}

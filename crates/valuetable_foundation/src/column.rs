//! Dataset column identifiers.
//!
//! The dataset has a fixed shape: one name column and three numeric columns.
//! Each column knows the exact header text it is loaded from and, for numeric
//! columns, the short alias users type in filter expressions.

use std::fmt;

/// A column of the item dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Column {
    /// Item display name and lookup key.
    Name,
    /// Demand score, semantically 0 to 10.
    Demand,
    /// Trade value.
    Value,
    /// Recent rate of change of the value.
    RateOfChange,
}

impl Column {
    /// Every column, in header order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Demand, Self::Value, Self::RateOfChange];

    /// The numeric columns.
    pub const NUMERIC: [Self; 3] = [Self::Demand, Self::Value, Self::RateOfChange];

    /// Returns the required header text (case-sensitive, compared after trimming).
    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            Self::Name => "Item name",
            Self::Demand => "Demand (out of 10)",
            Self::Value => "Value",
            Self::RateOfChange => "rate of change",
        }
    }

    /// Returns the filter alias for numeric columns.
    #[must_use]
    pub const fn alias(self) -> Option<&'static str> {
        match self {
            Self::Name => None,
            Self::Demand => Some("demand"),
            Self::Value => Some("value"),
            Self::RateOfChange => Some("rate_of_change"),
        }
    }

    /// Returns true if the column holds numbers.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        !matches!(self, Self::Name)
    }

    /// Looks up a numeric column by its filter alias (ASCII case-insensitive).
    #[must_use]
    pub fn from_alias(alias: &str) -> Option<Self> {
        Self::NUMERIC
            .into_iter()
            .find(|c| c.alias().is_some_and(|a| a.eq_ignore_ascii_case(alias)))
    }

    /// Looks up a column by its header text, trimming surrounding whitespace.
    #[must_use]
    pub fn from_header(header: &str) -> Option<Self> {
        let header = header.trim();
        Self::ALL.into_iter().find(|c| c.header() == header)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

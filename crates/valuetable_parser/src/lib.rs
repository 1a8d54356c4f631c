//! Free-text item name resolution, trade parsing, and command parsing.
//!
//! This crate turns noisy chat input into structured requests and dataset rows.
//!
//! # Architecture
//!
//! ```text
//! "!compare <:Frost:131..> x2, festval aura x1 <:for:131..> Frost Aura x3"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ COMMAND         │  → CompareTrade { expression }
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ TRADE           │  → mine: [(<:Frost:131..>, 2), (festval aura, 1)]
//! │ EXPRESSION      │    theirs: [(Frost Aura, 3)]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ SANITIZE        │  → alias or strip decorative tokens, trim
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ NAME            │  → exact → substring → fuzzy
//! │ RESOLUTION      │    Unique / Ambiguous / NotFound
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`sanitize`] - Decorative token stripping and alias substitution
//! - [`resolver`] - Exact, substring, and fuzzy name matching
//! - [`trade`] - Two-sided trade expression parsing
//! - [`command`] - Command verb and argument parsing

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod resolver;
pub mod sanitize;
pub mod trade;

// Re-export main types for convenience
pub use command::Command;
pub use resolver::{MatchPolicy, NameResolver, Resolution, ResolvedMatch};
pub use sanitize::{AliasTable, sanitize};
pub use trade::{
    DEFAULT_TRADE_SEPARATOR, IgnoreReason, IgnoredToken, TradeEntry, TradeExpression, TradeSide,
};

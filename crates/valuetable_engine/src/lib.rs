//! Ranking, filtering, item comparison, and trade valuation for Valuetable.
//!
//! This crate provides:
//! - [`QueryEngine`] - Top-N, recent, and filter queries
//! - [`compare_items`] - Side-by-side item comparison
//! - [`TradeComparator`] - Trade valuation and fairness verdicts
//! - [`Engine`] - Command dispatch over a loaded dataset
//!
//! Every operation is a pure function of the dataset and its input. Results
//! are structured values; rendering them is left to the caller.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod engine;
pub mod help;
pub mod lookup;
pub mod query;
pub mod trade;

pub use engine::{Engine, Response};
pub use help::{HelpTopic, help_topics};
pub use lookup::{Differences, ItemComparison, compare_items, lookup};
pub use query::{Criterion, QueryEngine};
pub use trade::{
    Fairness, LineOutcome, SideBreakdown, TradeComparator, TradeLine, TradeParty, TradeResult,
};

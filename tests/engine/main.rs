//! Integration tests for the valuetable_engine crate.
//!
//! Tests for answering commands:
//! - Ranking and filtering
//! - Trade valuation
//! - Command dispatch

mod queries;
mod trades;

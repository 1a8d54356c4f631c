//! Integration tests for the valuetable_parser crate.
//!
//! Tests for turning user text into structured requests:
//! - Decorative token sanitizing and aliases
//! - Name resolution
//! - Trade expressions
//! - Command parsing

mod resolution;
mod trades;

//! Integration tests for the valuetable_foundation crate.
//!
//! Tests for core types:
//! - Error kinds, codes, and context
//! - Column headers and aliases
//! - Numeric cell coercion

mod columns;
mod errors;

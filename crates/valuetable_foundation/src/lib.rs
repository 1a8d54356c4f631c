//! Core types, column identifiers, numeric coercion, and errors for Valuetable.
//!
//! This crate provides:
//! - [`Column`] - The closed set of dataset columns and their header/alias text
//! - [`parse_numeric`] - Absent-safe numeric coercion for spreadsheet cells
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod column;
pub mod error;
pub mod numeric;

pub use column::Column;
pub use error::{Error, ErrorContext, ErrorKind};
pub use numeric::parse_numeric;

/// Result type alias using the Valuetable error type.
pub type Result<T> = std::result::Result<T, Error>;

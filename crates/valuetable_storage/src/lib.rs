//! Tabular sources, item records, and the immutable dataset store for Valuetable.
//!
//! This crate provides:
//! - [`TabularSource`] - The seam to external tabular input ([`CsvSource`], [`Table`])
//! - [`DatasetSchema`] - Required header validation and column positions
//! - [`ItemRecord`] - One normalized dataset row
//! - [`DatasetStore`] - Immutable, cheaply cloneable record sequence

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod record;
pub mod schema;
pub mod source;
pub mod store;

pub use record::ItemRecord;
pub use schema::DatasetSchema;
pub use source::{CsvSource, Table, TabularSource};
pub use store::{DatasetStore, LoadReport, normalize};

//! Integration tests for the valuetable_storage crate.
//!
//! Tests for dataset ingestion:
//! - CSV files and streams
//! - Header validation
//! - Row normalization and the load report
//! - Store sharing

mod csv_loading;

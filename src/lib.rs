//! Valuetable - item value lookup and trade comparison
//!
//! This crate re-exports all layers of the Valuetable system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: valuetable_runtime    - Config, logging, rendering, REPL, CLI
//! Layer 3: valuetable_engine     - Query engine, trade comparator, command dispatch
//! Layer 2: valuetable_language   - Filter expression lexer, parser, evaluator
//!          valuetable_parser     - Name resolver, trade and command parsing
//! Layer 1: valuetable_storage    - Tabular sources, item records, dataset store
//! Layer 0: valuetable_foundation - Core types (Column, numeric coercion, Error)
//! ```

pub use valuetable_engine as engine;
pub use valuetable_foundation as foundation;
pub use valuetable_language as language;
pub use valuetable_parser as parser;
pub use valuetable_runtime as runtime;
pub use valuetable_storage as storage;

//! CLI, REPL, configuration, and output rendering for Valuetable.
//!
//! This crate provides:
//! - [`Cli`] - Command-line arguments with environment fallbacks
//! - [`RuntimeConfig`] - Dataset, separator, alias, and output settings
//! - [`Repl`] - Interactive read-eval-print loop
//! - [`run_batch`] - One command per input line, for scripts
//! - [`render`] - Text and JSON rendering of responses
//! - [`init_logging`] - `tracing` subscriber setup

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cli;
pub mod config;
pub mod editor;
pub mod logging;
pub mod render;
pub mod repl;

pub use cli::{Cli, Mode};
pub use config::{OutputFormat, RuntimeConfig};
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use logging::init_logging;
pub use render::{render, render_error, render_text};
pub use repl::{BatchSummary, Repl, run_batch};

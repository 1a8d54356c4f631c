//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{DEFAULT_DATASET, OutputFormat, RuntimeConfig, parse_alias};

/// Item value lookup, filtering, and trade comparison.
///
/// With no COMMAND, starts an interactive prompt. With a COMMAND, answers it
/// and exits. With `--batch`, answers one command per line of stdin.
#[derive(Debug, Parser)]
#[command(name = "valuetable", version, about, long_about = None)]
pub struct Cli {
    /// CSV dataset with `Item name`, `Demand (out of 10)`, `Value`, and `rate of change` columns.
    #[arg(short, long, env = "VALUETABLE_DATASET", default_value = DEFAULT_DATASET)]
    pub dataset: PathBuf,

    /// Token separating the two sides of a trade.
    #[arg(long, env = "VALUETABLE_SEPARATOR")]
    pub separator: Option<String>,

    /// Extra emoji alias, as TOKEN=ITEM NAME. May be repeated.
    #[arg(long = "alias", value_name = "TOKEN=ITEM", value_parser = parse_alias)]
    pub aliases: Vec<(String, String)>,

    /// Drop the built-in emoji aliases.
    #[arg(long)]
    pub no_default_aliases: bool,

    /// Match item names case-sensitively.
    #[arg(long)]
    pub case_sensitive: bool,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Shorthand for `--output json`.
    #[arg(long, conflicts_with = "output")]
    pub json: bool,

    /// Log filter such as `info` or `valuetable_parser=debug`; overrides `RUST_LOG`.
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,

    /// Read commands from stdin, one per line, without a prompt.
    #[arg(short, long, conflicts_with = "command")]
    pub batch: bool,

    /// Do not print the REPL banner.
    #[arg(long)]
    pub quiet: bool,

    /// A single command to run, such as `top 5 value`.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

/// How the binary should serve commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Interactive prompt.
    Interactive,
    /// One command per stdin line.
    Batch,
    /// A single command from the arguments.
    Once(String),
}

impl Cli {
    /// Returns the serving mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        if self.batch {
            Mode::Batch
        } else if self.command.is_empty() {
            Mode::Interactive
        } else {
            Mode::Once(self.command.join(" "))
        }
    }

    /// Builds the runtime configuration.
    #[must_use]
    pub fn config(&self) -> RuntimeConfig {
        let mut config = RuntimeConfig::new()
            .with_dataset(&self.dataset)
            .with_case_sensitive(self.case_sensitive)
            .with_output(if self.json {
                OutputFormat::Json
            } else {
                self.output
            });
        if let Some(separator) = &self.separator {
            config = config.with_separator(separator.clone());
        }
        if self.no_default_aliases {
            config = config.without_aliases();
        }
        for (key, item) in &self.aliases {
            config = config.with_alias(key.clone(), item.clone());
        }
        if let Some(filter) = &self.log_level {
            config = config.with_log_filter(filter.clone());
        }
        if self.quiet {
            config = config.without_banner();
        }
        config
    }
}

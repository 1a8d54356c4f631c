//! Runtime configuration.
//!
//! [`RuntimeConfig`] gathers everything the binary needs to load a dataset
//! and answer commands. It is built from the command line by
//! [`Cli`](crate::cli::Cli), or directly with the builder methods.

use std::path::{Path, PathBuf};

use tracing::info;
use valuetable_engine::Engine;
use valuetable_foundation::Result;
use valuetable_parser::{AliasTable, DEFAULT_TRADE_SEPARATOR, NameResolver};
use valuetable_storage::{CsvSource, DatasetStore, LoadReport};

/// Dataset path used when none is configured.
pub const DEFAULT_DATASET: &str = "values.csv";

/// Log filter used when neither `--log-level` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Emoji aliases recognized out of the box.
pub const BUILTIN_ALIASES: &[(&str, &str)] = &[
    ("<:FrostSSJ4_Aura:1310698865510584411>", "Frost aura"),
    ("<:FestivalAura:1310704728765632644>", "Festival aura"),
];

/// How responses are written to stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// One JSON document per response.
    Json,
}

/// Configuration for loading a dataset and serving commands.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    /// Path to the CSV dataset
    pub dataset: PathBuf,
    /// Token separating the two sides of a trade
    pub separator: String,
    /// Decorative token aliases
    pub aliases: AliasTable,
    /// Whether name matching respects case
    pub case_sensitive: bool,
    /// Response format
    pub output: OutputFormat,
    /// Explicit log filter; `None` defers to `RUST_LOG`
    pub log_filter: Option<String>,
    /// Whether the REPL prints its banner
    pub show_banner: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            dataset: PathBuf::from(DEFAULT_DATASET),
            separator: DEFAULT_TRADE_SEPARATOR.to_string(),
            aliases: BUILTIN_ALIASES.iter().copied().collect(),
            case_sensitive: false,
            output: OutputFormat::Text,
            log_filter: None,
            show_banner: true,
        }
    }
}

impl RuntimeConfig {
    /// Creates a configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the dataset path.
    #[must_use]
    pub fn with_dataset(mut self, path: impl AsRef<Path>) -> Self {
        self.dataset = path.as_ref().to_path_buf();
        self
    }

    /// Sets the trade separator.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Adds an alias, overriding any built-in alias with the same key.
    #[must_use]
    pub fn with_alias(mut self, key: impl Into<String>, item_name: impl Into<String>) -> Self {
        self.aliases.insert(key, item_name);
        self
    }

    /// Removes every alias, built-ins included.
    #[must_use]
    pub fn without_aliases(mut self) -> Self {
        self.aliases = AliasTable::new();
        self
    }

    /// Sets case-sensitive name matching.
    #[must_use]
    pub const fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Sets the response format.
    #[must_use]
    pub const fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    /// Sets an explicit log filter.
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = Some(filter.into());
        self
    }

    /// Disables the REPL banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Builds the name resolver described by this configuration.
    #[must_use]
    pub fn resolver(&self) -> NameResolver {
        NameResolver::new()
            .with_case_sensitive(self.case_sensitive)
            .with_aliases(self.aliases.clone())
    }

    /// Loads the dataset and builds an engine.
    ///
    /// # Errors
    /// Returns a fatal `Load` or `MissingColumns` error if the dataset cannot
    /// be read.
    pub fn load_engine(&self) -> Result<(Engine, LoadReport)> {
        let source = CsvSource::from_path(&self.dataset)?;
        let (store, report) = DatasetStore::load_with_report(source)?;
        info!(
            dataset = %self.dataset.display(),
            items = store.count(),
            aliases = self.aliases.len(),
            "engine ready"
        );
        Ok((self.engine_for(store), report))
    }

    /// Builds an engine over an already loaded store.
    #[must_use]
    pub fn engine_for(&self, store: DatasetStore) -> Engine {
        Engine::new(store)
            .with_resolver(self.resolver())
            .with_separator(self.separator.clone())
    }
}

/// Parses a `TOKEN=ITEM NAME` alias argument.
///
/// # Errors
/// Returns a message if there is no `=` or either side is empty.
pub fn parse_alias(arg: &str) -> std::result::Result<(String, String), String> {
    let (key, item) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected TOKEN=ITEM NAME, got '{arg}'"))?;
    let (key, item) = (key.trim(), item.trim());
    if key.is_empty() || item.is_empty() {
        return Err(format!("expected TOKEN=ITEM NAME, got '{arg}'"));
    }
    Ok((key.to_string(), item.to_string()))
}

//! Command dispatch.
//!
//! [`Engine`] owns the loaded dataset and everything needed to answer a
//! [`Command`]. It is immutable after construction, cheap to clone, and safe
//! to share across threads.

use tracing::debug;
use valuetable_foundation::{Error, Result};
use valuetable_parser::{Command, NameResolver, ResolvedMatch};
use valuetable_storage::{DatasetStore, ItemRecord};

use crate::help::{HelpTopic, help_topics};
use crate::lookup::{ItemComparison, compare_items, lookup};
use crate::query::{Criterion, QueryEngine};
use crate::trade::{TradeComparator, TradeResult};

/// Structured answer to a command.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "data", rename_all = "snake_case"))]
pub enum Response {
    /// A single item, or suggestions for a misspelled name.
    Lookup(ResolvedMatch),
    /// Items ranked by a criterion, highest first.
    Ranking {
        /// Column the items are ranked by.
        criterion: Criterion,
        /// Number of items requested.
        requested: usize,
        /// Ranked items.
        items: Vec<ItemRecord>,
    },
    /// Items matching a filter, in load order.
    Filtered {
        /// Expression as supplied.
        expression: String,
        /// Matching items.
        items: Vec<ItemRecord>,
    },
    /// Two items side by side.
    Comparison(ItemComparison),
    /// A valued trade.
    Trade(TradeResult),
    /// The help listing.
    Help(&'static [HelpTopic]),
}

/// Answers commands against one dataset.
#[derive(Clone, Debug)]
pub struct Engine {
    store: DatasetStore,
    resolver: NameResolver,
    comparator: TradeComparator,
}

impl Engine {
    /// Creates an engine with the default resolver and trade separator.
    #[must_use]
    pub fn new(store: DatasetStore) -> Self {
        Self {
            store,
            resolver: NameResolver::new(),
            comparator: TradeComparator::default(),
        }
    }

    /// Sets the name resolver.
    #[must_use]
    pub fn with_resolver(mut self, resolver: NameResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Sets the trade separator.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.comparator = TradeComparator::new(separator);
        self
    }

    /// Returns the dataset.
    #[must_use]
    pub fn store(&self) -> &DatasetStore {
        &self.store
    }

    /// Returns the name resolver.
    #[must_use]
    pub fn resolver(&self) -> &NameResolver {
        &self.resolver
    }

    /// Returns the trade separator.
    #[must_use]
    pub fn separator(&self) -> &str {
        self.comparator.separator()
    }

    /// Returns a query engine over the dataset.
    #[must_use]
    pub fn queries(&self) -> QueryEngine<'_> {
        QueryEngine::new(&self.store)
    }

    /// Parses and executes one line of input.
    ///
    /// # Errors
    /// Returns any error from [`Command::parse`] or [`Engine::execute`].
    pub fn run(&self, input: &str) -> Result<Response> {
        let command = Command::parse(input, self.separator())?;
        self.execute(command)
    }

    /// Executes a command.
    ///
    /// # Errors
    /// - `ItemNotFound` if a lookup matches nothing, not even a suggestion
    /// - `InvalidCriterion` for a `top` criterion other than demand or value
    /// - `InvalidFilterExpression` for a malformed filter
    /// - `MissingSeparator` or `RepeatedSeparator` for a malformed trade
    pub fn execute(&self, command: Command) -> Result<Response> {
        debug!(verb = command.verb(), "executing command");
        let queries = self.queries();
        match command {
            Command::Lookup { query } => match lookup(&self.store, &self.resolver, &query) {
                ResolvedMatch::NotFound => Err(Error::item_not_found(query)),
                found => Ok(Response::Lookup(found)),
            },
            Command::Top { count, criterion } => {
                let criterion = Criterion::parse(&criterion)?;
                Ok(Response::Ranking {
                    criterion,
                    requested: count,
                    items: owned(queries.rank(criterion, count)),
                })
            }
            Command::Recent { count } => Ok(Response::Ranking {
                criterion: Criterion::RateOfChange,
                requested: count,
                items: owned(queries.recent(count)),
            }),
            Command::Filter { expression } => {
                let items = owned(queries.filter(&expression)?);
                Ok(Response::Filtered { expression, items })
            }
            Command::CompareItems { left, right } => Ok(Response::Comparison(compare_items(
                &self.store,
                &self.resolver,
                &left,
                &right,
            ))),
            Command::CompareTrade { expression } => Ok(Response::Trade(
                self.comparator
                    .compare(&self.store, &self.resolver, &expression)?,
            )),
            Command::Help => Ok(Response::Help(help_topics())),
        }
    }
}

fn owned(records: Vec<&ItemRecord>) -> Vec<ItemRecord> {
    records.into_iter().cloned().collect()
}

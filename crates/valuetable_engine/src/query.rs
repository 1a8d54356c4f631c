//! Ranking and filtering over the dataset.
//!
//! This module provides:
//! - [`Criterion`] - The numeric column a ranking sorts by
//! - [`QueryEngine`] - Top-N, recent, and filter queries against a store

use std::fmt;

use tracing::debug;
use valuetable_foundation::{Column, Error, Result};
use valuetable_language::Filter;
use valuetable_storage::{DatasetStore, ItemRecord};

// =============================================================================
// Criterion
// =============================================================================

/// Column a ranking sorts by, descending.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Criterion {
    /// Demand score.
    Demand,
    /// Trade value.
    Value,
    /// Rate of change. Used by `recent`; not accepted by [`Criterion::parse`].
    RateOfChange,
}

impl Criterion {
    /// Parses a user-supplied criterion name, ignoring case.
    ///
    /// Only `demand` and `value` are accepted.
    ///
    /// # Errors
    /// Returns `InvalidCriterion` for any other name.
    pub fn parse(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "demand" => Ok(Self::Demand),
            "value" => Ok(Self::Value),
            _ => Err(Error::invalid_criterion(name.trim())),
        }
    }

    /// Returns the column this criterion reads.
    #[must_use]
    pub const fn column(self) -> Column {
        match self {
            Self::Demand => Column::Demand,
            Self::Value => Column::Value,
            Self::RateOfChange => Column::RateOfChange,
        }
    }

    /// Returns the lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Demand => "demand",
            Self::Value => "value",
            Self::RateOfChange => "rate_of_change",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Query Engine
// =============================================================================

/// Read-only queries over a [`DatasetStore`].
#[derive(Clone, Copy, Debug)]
pub struct QueryEngine<'a> {
    store: &'a DatasetStore,
}

impl<'a> QueryEngine<'a> {
    /// Creates a query engine over a store.
    #[must_use]
    pub fn new(store: &'a DatasetStore) -> Self {
        Self { store }
    }

    /// Returns up to `n` records with the highest value of a named criterion.
    ///
    /// # Errors
    /// Returns `InvalidCriterion` if the name is not `demand` or `value`.
    pub fn top_n(&self, criterion: &str, n: usize) -> Result<Vec<&'a ItemRecord>> {
        let criterion = Criterion::parse(criterion)?;
        Ok(self.rank(criterion, n))
    }

    /// Returns up to `n` records with the highest rate of change.
    #[must_use]
    pub fn recent(&self, n: usize) -> Vec<&'a ItemRecord> {
        self.rank(Criterion::RateOfChange, n)
    }

    /// Ranks records by a criterion, descending, and keeps the first `n`.
    ///
    /// Records with an absent value are dropped. Ties keep load order.
    #[must_use]
    pub fn rank(&self, criterion: Criterion, n: usize) -> Vec<&'a ItemRecord> {
        let column = criterion.column();
        let mut ranked: Vec<(&'a ItemRecord, f64)> = self
            .store
            .iter()
            .filter_map(|r| r.get(column).map(|v| (r, v)))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked.truncate(n);
        debug!(%criterion, n, returned = ranked.len(), "ranked records");
        ranked.into_iter().map(|(r, _)| r).collect()
    }

    /// Returns the records matching a filter expression, in load order.
    ///
    /// # Errors
    /// Returns `InvalidFilterExpression` if the expression cannot be parsed.
    pub fn filter(&self, expression: &str) -> Result<Vec<&'a ItemRecord>> {
        let filter = Filter::compile(expression)?;
        Ok(self.filter_compiled(&filter))
    }

    /// Applies an already compiled filter.
    #[must_use]
    pub fn filter_compiled(&self, filter: &Filter) -> Vec<&'a ItemRecord> {
        let matched = filter.apply(self.store.iter());
        debug!(expression = filter.source(), matched = matched.len(), "filtered records");
        matched
    }
}

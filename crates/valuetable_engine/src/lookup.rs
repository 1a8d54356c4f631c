//! Item lookup and side-by-side comparison.

use valuetable_foundation::Column;
use valuetable_parser::{NameResolver, ResolvedMatch};
use valuetable_storage::{DatasetStore, ItemRecord};

/// Numeric differences between two items, `left - right`.
///
/// A difference is `None` when either item lacks the value.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Differences {
    /// Demand difference.
    pub demand: Option<f64>,
    /// Value difference.
    pub value: Option<f64>,
    /// Rate of change difference.
    pub rate_of_change: Option<f64>,
}

impl Differences {
    /// Computes the differences between two records.
    #[must_use]
    pub fn between(left: &ItemRecord, right: &ItemRecord) -> Self {
        let diff = |column| Some(left.get(column)? - right.get(column)?);
        Self {
            demand: diff(Column::Demand),
            value: diff(Column::Value),
            rate_of_change: diff(Column::RateOfChange),
        }
    }
}

/// Result of comparing two items.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemComparison {
    /// How the left query resolved.
    pub left: ResolvedMatch,
    /// How the right query resolved.
    pub right: ResolvedMatch,
    /// Present only when both sides resolved to a single item.
    pub differences: Option<Differences>,
}

/// Resolves a lookup query, offering suggestions on a miss.
#[must_use]
pub fn lookup(store: &DatasetStore, resolver: &NameResolver, query: &str) -> ResolvedMatch {
    resolver.resolve(store, query).into_owned()
}

/// Resolves both queries and reports their differences.
#[must_use]
pub fn compare_items(
    store: &DatasetStore,
    resolver: &NameResolver,
    left: &str,
    right: &str,
) -> ItemComparison {
    let left = resolver.resolve(store, left);
    let right = resolver.resolve(store, right);
    let differences = match (left.record(), right.record()) {
        (Some(l), Some(r)) => Some(Differences::between(l, r)),
        _ => None,
    };
    ItemComparison {
        left: left.into_owned(),
        right: right.into_owned(),
        differences,
    }
}

//! Item name resolution.
//!
//! Maps a free-text query to a dataset row. Resolution order:
//! 1. Exact name match
//! 2. Substring match (first row in load order)
//! 3. Fuzzy match on normalized edit distance
//!
//! What happens at step 3 depends on the [`MatchPolicy`]: a lookup offers
//! suggestions, while a trade line commits to the single closest name.

use tracing::debug;
use valuetable_storage::{DatasetStore, ItemRecord};

use crate::sanitize::AliasTable;

/// Minimum similarity for a name to be offered as a suggestion.
pub const DEFAULT_SUGGESTION_CUTOFF: f64 = 0.5;

/// Minimum similarity for a name to be taken as the closest match.
pub const DEFAULT_CLOSEST_CUTOFF: f64 = 0.6;

/// Maximum number of suggestions returned for one query.
pub const MAX_SUGGESTIONS: usize = 5;

/// How to treat a query with no exact or substring match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchPolicy {
    /// Return up to [`MAX_SUGGESTIONS`] similar names for the user to pick.
    Suggest,
    /// Commit to the single most similar name.
    Closest,
}

/// Result of resolving a query against a dataset.
#[derive(Clone, Debug, PartialEq)]
pub enum Resolution<'a> {
    /// Resolved to one row.
    Unique(&'a ItemRecord),
    /// No direct match; these names are similar.
    Ambiguous(Vec<String>),
    /// Nothing matched.
    NotFound,
}

impl<'a> Resolution<'a> {
    /// Returns the resolved row, if unique.
    #[must_use]
    pub fn record(&self) -> Option<&'a ItemRecord> {
        match self {
            Self::Unique(record) => Some(*record),
            _ => None,
        }
    }

    /// Returns true if resolution produced a single row.
    #[must_use]
    pub fn is_unique(&self) -> bool {
        matches!(self, Self::Unique(_))
    }

    /// Detaches the resolution from the store it borrows.
    #[must_use]
    pub fn into_owned(self) -> ResolvedMatch {
        match self {
            Self::Unique(record) => ResolvedMatch::Unique(record.clone()),
            Self::Ambiguous(names) => ResolvedMatch::Ambiguous(names),
            Self::NotFound => ResolvedMatch::NotFound,
        }
    }
}

/// An owned [`Resolution`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "data", rename_all = "snake_case"))]
pub enum ResolvedMatch {
    /// Resolved to one row.
    Unique(ItemRecord),
    /// No direct match; these names are similar.
    Ambiguous(Vec<String>),
    /// Nothing matched.
    NotFound,
}

/// Resolves free-text queries to dataset rows.
#[derive(Clone, Debug)]
pub struct NameResolver {
    /// Whether exact and substring matching respect case
    case_sensitive: bool,
    /// Decorative token aliases applied before matching
    aliases: AliasTable,
    /// Similarity floor for [`MatchPolicy::Suggest`]
    suggestion_cutoff: f64,
    /// Similarity floor for [`MatchPolicy::Closest`]
    closest_cutoff: f64,
}

impl Default for NameResolver {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            aliases: AliasTable::new(),
            suggestion_cutoff: DEFAULT_SUGGESTION_CUTOFF,
            closest_cutoff: DEFAULT_CLOSEST_CUTOFF,
        }
    }
}

impl NameResolver {
    /// Creates a case-insensitive resolver with no aliases.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether matching respects case.
    #[must_use]
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Sets the decorative token aliases.
    #[must_use]
    pub fn with_aliases(mut self, aliases: AliasTable) -> Self {
        self.aliases = aliases;
        self
    }

    /// Sets the similarity floors, each clamped to `0.0..=1.0`.
    #[must_use]
    pub fn with_cutoffs(mut self, suggestion: f64, closest: f64) -> Self {
        self.suggestion_cutoff = suggestion.clamp(0.0, 1.0);
        self.closest_cutoff = closest.clamp(0.0, 1.0);
        self
    }

    /// Returns true if matching respects case.
    #[must_use]
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Returns the alias table.
    #[must_use]
    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Applies aliases, strips remaining decorative tokens, and trims.
    #[must_use]
    pub fn clean(&self, raw: &str) -> String {
        self.aliases.apply(raw)
    }

    /// Resolves a lookup query, suggesting similar names on a miss.
    #[must_use]
    pub fn resolve<'a>(&self, store: &'a DatasetStore, raw: &str) -> Resolution<'a> {
        self.resolve_with(store, raw, MatchPolicy::Suggest)
    }

    /// Resolves a trade line name, committing to the closest similar name.
    #[must_use]
    pub fn resolve_closest<'a>(&self, store: &'a DatasetStore, raw: &str) -> Option<&'a ItemRecord> {
        self.resolve_with(store, raw, MatchPolicy::Closest).record()
    }

    /// Resolves a query under the given policy.
    #[must_use]
    pub fn resolve_with<'a>(
        &self,
        store: &'a DatasetStore,
        raw: &str,
        policy: MatchPolicy,
    ) -> Resolution<'a> {
        let query = self.clean(raw);
        if query.is_empty() {
            debug!(raw, "query is empty after sanitizing");
            return Resolution::NotFound;
        }
        let needle = self.fold(&query);

        if let Some(record) = store.iter().find(|r| self.fold(&r.name) == needle) {
            debug!(query = %query, name = %record.name, "exact match");
            return Resolution::Unique(record);
        }

        if let Some(record) = store.iter().find(|r| self.fold(&r.name).contains(&needle)) {
            debug!(query = %query, name = %record.name, "substring match");
            return Resolution::Unique(record);
        }

        let candidates = self.ranked_candidates(store, &needle, policy);
        match policy {
            MatchPolicy::Closest => match candidates.first() {
                Some(&(record, score)) => {
                    debug!(query = %query, name = %record.name, score, "closest match");
                    Resolution::Unique(record)
                }
                None => Resolution::NotFound,
            },
            MatchPolicy::Suggest => {
                let mut names: Vec<String> = Vec::new();
                for (record, _) in candidates {
                    if names.len() == MAX_SUGGESTIONS {
                        break;
                    }
                    if !names.contains(&record.name) {
                        names.push(record.name.clone());
                    }
                }
                if names.is_empty() {
                    debug!(query = %query, "no match");
                    Resolution::NotFound
                } else {
                    debug!(query = %query, suggestions = names.len(), "fuzzy suggestions");
                    Resolution::Ambiguous(names)
                }
            }
        }
    }

    /// Scores every row and returns those at or above the policy's cutoff,
    /// most similar first. Ties keep load order.
    fn ranked_candidates<'a>(
        &self,
        store: &'a DatasetStore,
        needle: &str,
        policy: MatchPolicy,
    ) -> Vec<(&'a ItemRecord, f64)> {
        let cutoff = match policy {
            MatchPolicy::Suggest => self.suggestion_cutoff,
            MatchPolicy::Closest => self.closest_cutoff,
        };
        let mut scored: Vec<_> = store
            .iter()
            .map(|r| (r, similarity(needle, &self.fold(&r.name))))
            .filter(|(_, score)| *score >= cutoff)
            .collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored
    }

    fn fold(&self, text: &str) -> String {
        if self.case_sensitive {
            text.to_string()
        } else {
            text.to_lowercase()
        }
    }
}

/// Similarity in `0.0..=1.0` between two already-folded strings.
#[must_use]
pub fn similarity(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(a, b)
}

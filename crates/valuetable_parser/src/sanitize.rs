//! Decorative token handling.
//!
//! Chat clients embed custom emoji as `<:name:id>` (or `<a:name:id>` when
//! animated). These tokens carry no item information on their own, so they
//! are either replaced through an [`AliasTable`] or stripped before a name is
//! matched against the dataset.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Matches one decorative token, capturing its name.
static DECORATIVE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<a?:([^:<>]+):[0-9]+>").expect("decorative token pattern is valid")
});

/// Collapses whitespace runs left behind by removed tokens.
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Maps decorative tokens to the item names they stand for.
///
/// A key is either a full token (`<:FrostSSJ4_Aura:1310704728765632644>`) or
/// just the token's name (`FrostSSJ4_Aura`), which matches the name under any
/// id. Full-token keys win over name keys.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AliasTable {
    entries: HashMap<String, String>,
}

impl AliasTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an alias, replacing any previous target for the same key.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, item_name: impl Into<String>) -> Self {
        self.insert(key, item_name);
        self
    }

    /// Adds an alias in place.
    pub fn insert(&mut self, key: impl Into<String>, item_name: impl Into<String>) {
        self.entries
            .insert(key.into().trim().to_string(), item_name.into().trim().to_string());
    }

    /// Returns the item name a token stands for, if any.
    #[must_use]
    pub fn lookup(&self, token: &str, name: &str) -> Option<&str> {
        self.entries
            .get(token)
            .or_else(|| self.entries.get(name))
            .map(String::as_str)
    }

    /// Returns the number of aliases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table holds no aliases.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replaces aliased tokens with item names and strips the rest.
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        let replaced = DECORATIVE_TOKEN.replace_all(text, |caps: &Captures<'_>| {
            let token = &caps[0];
            let name = &caps[1];
            match self.lookup(token, name) {
                Some(item) => format!(" {item} "),
                None => " ".to_string(),
            }
        });
        tidy(&replaced)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AliasTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (key, item) in iter {
            table.insert(key, item);
        }
        table
    }
}

/// Removes every decorative token and trims surrounding whitespace.
///
/// Interior whitespace runs collapse to a single space.
#[must_use]
pub fn sanitize(text: &str) -> String {
    let stripped = DECORATIVE_TOKEN.replace_all(text, " ");
    tidy(&stripped)
}

/// Returns true if the text contains at least one decorative token.
#[must_use]
pub fn has_decorative_token(text: &str) -> bool {
    DECORATIVE_TOKEN.is_match(text)
}

fn tidy(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned()
}

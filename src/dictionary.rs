//! Localized label lookup
//!
//! Thin wrapper over a key-to-label map. Every call site supplies a literal
//! English default, so a missing or partial dictionary never breaks the UI.

use std::collections::HashMap;

/// Localized UI labels keyed by string
#[derive(Debug, Default, Clone)]
pub struct Dictionary {
    labels: HashMap<String, String>,
}

impl Dictionary {
    /// Empty dictionary; every lookup returns its default
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an iterator of (key, label) pairs
    pub fn from_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            labels: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Look up a label, falling back to the supplied English default
    #[must_use]
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.labels.get(key).map_or(default, String::as_str)
    }
}

//! Path-to-destination mapping.
//!
//! # Design Decisions
//! - Paths are matched literally: no normalization, no trailing-slash folding
//! - Destinations are opaque strings, never parsed or fetched
//! - Inserting a path twice keeps the later destination (last-write-wins)

use std::collections::HashMap;

/// Unique-keyed table of request paths to redirect destinations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mapping {
    entries: HashMap<String, String>,
}

impl Mapping {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mapping from `(path, destination)` pairs in source order.
    ///
    /// When a path appears more than once the later pair wins.
    pub fn from_entries<I, P, D>(entries: I) -> Self
    where
        I: IntoIterator<Item = (P, D)>,
        P: Into<String>,
        D: Into<String>,
    {
        let mut mapping = Self::new();
        for (path, destination) in entries {
            mapping.insert(path, destination);
        }
        mapping
    }

    /// Insert an entry, returning the destination it replaced, if any.
    pub fn insert(&mut self, path: impl Into<String>, destination: impl Into<String>) -> Option<String> {
        self.entries.insert(path.into(), destination.into())
    }

    /// Destination for an exact path.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(path, destination)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, d)| (p.as_str(), d.as_str()))
    }
}

impl<P: Into<String>, D: Into<String>> FromIterator<(P, D)> for Mapping {
    fn from_iter<T: IntoIterator<Item = (P, D)>>(iter: T) -> Self {
        Self::from_entries(iter)
    }
}

impl From<HashMap<String, String>> for Mapping {
    fn from(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }
}

impl IntoIterator for Mapping {
    type Item = (String, String);
    type IntoIter = std::collections::hash_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

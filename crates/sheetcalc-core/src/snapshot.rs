//! Snapshot of displayed cell values

use ahash::AHashMap;
use std::collections::HashMap;

/// Read-only view of what every cell currently shows
///
/// Keys are cell reference strings (e.g. "B12"), values are display strings.
/// Formula cells appear with their already-evaluated display value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    values: AHashMap<String, String>,
}

impl Snapshot {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty snapshot with room for `capacity` cells
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: AHashMap::with_capacity(capacity),
        }
    }

    /// Set the display value of a reference, returning the previous value
    pub fn insert(&mut self, reference: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(reference.into(), value.into())
    }

    /// Display value of a reference, if present
    pub fn get(&self, reference: &str) -> Option<&str> {
        self.values.get(reference).map(String::as_str)
    }

    /// Whether a reference is present
    pub fn contains(&self, reference: &str) -> bool {
        self.values.contains_key(reference)
    }

    /// Number of references in the snapshot
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the snapshot has no references
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(reference, value)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut snapshot = Snapshot::new();
        snapshot.extend(iter);
        snapshot
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Snapshot {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (reference, value) in iter {
            self.insert(reference, value);
        }
    }
}

impl From<HashMap<String, String>> for Snapshot {
    fn from(map: HashMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}

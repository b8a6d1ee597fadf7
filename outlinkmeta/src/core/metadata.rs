//! Multi-valued string metadata.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A mapping from names to ordered string values.
///
/// Used both for the metadata a fetched document carries in from the crawl
/// and for the metadata produced by parsing it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata {
    entries: BTreeMap<String, Vec<String>>,
}

impl Metadata {
    /// Creates empty metadata.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the first value for a name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns all values for a name, or an empty slice.
    #[must_use]
    pub fn values(&self, name: &str) -> &[String] {
        self.entries.get(name).map_or(&[], Vec::as_slice)
    }

    /// Returns true if the first value for a name is present and not empty.
    #[must_use]
    pub fn has_non_empty(&self, name: &str) -> bool {
        self.get(name).is_some_and(|v| !v.is_empty())
    }

    /// Appends a value.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.entry(name.into()).or_default().push(value.into());
    }

    /// Replaces all values for a name with a single value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(name.into(), vec![value.into()]);
    }

    /// Removes a name and returns its values.
    pub fn remove(&mut self, name: &str) -> Option<Vec<String>> {
        self.entries.remove(name)
    }

    /// Returns true if the name is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns all names.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Returns the number of names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no names.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Metadata
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut metadata = Self::new();
        for (name, value) in iter {
            metadata.add(name, value);
        }
        metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_values() {
        let mut md = Metadata::new();
        md.add("tag", "a");
        md.add("tag", "b");

        assert_eq!(md.get("tag"), Some("a"));
        assert_eq!(md.values("tag"), &["a".to_string(), "b".to_string()]);
        assert!(md.values("missing").is_empty());
    }

    #[test]
    fn test_set_replaces() {
        let mut md = Metadata::new();
        md.add("url", "relative.html");
        md.add("url", "other.html");
        md.set("url", "http://example.com/relative.html");

        assert_eq!(md.values("url"), &["http://example.com/relative.html".to_string()]);
    }

    #[test]
    fn test_has_non_empty() {
        let md: Metadata = [("empty", ""), ("full", "x")].into_iter().collect();

        assert!(!md.has_non_empty("empty"));
        assert!(md.has_non_empty("full"));
        assert!(!md.has_non_empty("missing"));
    }

    #[test]
    fn test_remove() {
        let mut md: Metadata = [("a", "1")].into_iter().collect();
        assert_eq!(md.remove("a"), Some(vec!["1".to_string()]));
        assert!(md.is_empty());
    }
}

//! Annotation bag carried by an outlink.

use super::IndexField;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field name to index field mapping attached to an outlink.
///
/// Never holds an empty field: inserting one is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutlinkAnnotations {
    fields: BTreeMap<String, IndexField>,
}

impl OutlinkAnnotations {
    /// Creates an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a field. Returns false if the field was empty and skipped.
    pub fn insert(&mut self, name: impl Into<String>, field: IndexField) -> bool {
        if field.is_empty() {
            return false;
        }
        self.fields.insert(name.into(), field);
        true
    }

    /// Gets a field.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&IndexField> {
        self.fields.get(name)
    }

    /// Iterates over the fields.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &IndexField)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the field names.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.fields.keys().map(String::as_str).collect()
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the bag has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

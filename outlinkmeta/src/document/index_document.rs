//! Output document handed to the index.

use crate::core::IndexField;
use serde::{Deserialize, Serialize};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// A document under construction for the index.
///
/// [`IndexDocument::add`] mirrors the usual indexing sink contract: the first
/// add to a missing field creates it, later adds append. A JSON array added to
/// a missing field is spread into values, but added to an existing field it is
/// appended as one nested value. Callers merging several values should add
/// them one by one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexDocument {
    fields: BTreeMap<String, IndexField>,
    /// Document boost.
    #[serde(default = "default_weight")]
    pub weight: f32,
}

fn default_weight() -> f32 {
    1.0
}

impl IndexDocument {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
            weight: default_weight(),
        }
    }

    /// Adds a value to a field.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<serde_json::Value>) {
        let value = value.into();
        match self.fields.entry(name.into()) {
            Entry::Occupied(mut entry) => entry.get_mut().add(value),
            Entry::Vacant(entry) => {
                let field = match value {
                    serde_json::Value::Array(items) => IndexField::from_values(items),
                    other => IndexField::single(other),
                };
                entry.insert(field);
            }
        }
    }

    /// Returns a field.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&IndexField> {
        self.fields.get(name)
    }

    /// Returns the values of a field, or an empty slice.
    #[must_use]
    pub fn values(&self, name: &str) -> &[serde_json::Value] {
        self.fields.get(name).map_or(&[], IndexField::values)
    }

    /// Removes a field.
    pub fn remove(&mut self, name: &str) -> Option<IndexField> {
        self.fields.remove(name)
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

    /// Returns true if the document has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

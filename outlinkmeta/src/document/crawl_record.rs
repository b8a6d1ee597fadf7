//! Crawl database entries.

use crate::core::{decode_field, encode_field, IndexField};
use crate::errors::UnexpectedValueShapeError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Opaque metadata stored with a crawl record.
///
/// Other crawl components may store arbitrary values here; index fields go
/// through the carrier codec so they can be told apart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CrawlMetadata {
    entries: BTreeMap<String, serde_json::Value>,
}

impl CrawlMetadata {
    /// Creates empty metadata.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets a raw value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.entries.get(name)
    }

    /// Stores a raw value.
    pub fn insert(&mut self, name: impl Into<String>, value: serde_json::Value) {
        self.entries.insert(name.into(), value);
    }

    /// Stores an encoded index field.
    pub fn insert_field(&mut self, name: impl Into<String>, field: &IndexField) {
        self.entries.insert(name.into(), encode_field(field));
    }

    /// Reads an index field. `None` if nothing is stored under the name.
    pub fn field(&self, name: &str) -> Option<Result<IndexField, UnexpectedValueShapeError>> {
        self.entries.get(name).map(|value| decode_field(name, value))
    }

    /// Returns true if the name is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The crawl database's view of one URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrawlRecord {
    /// The URL this record describes.
    pub url: String,
    /// When the URL was last fetched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fetch_time: Option<DateTime<Utc>>,
    /// Score assigned by the scoring stage.
    #[serde(default)]
    pub score: f32,
    /// Metadata carried between stages.
    #[serde(default)]
    pub metadata: CrawlMetadata,
}

impl CrawlRecord {
    /// Creates a record with no metadata.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            fetch_time: None,
            score: 0.0,
            metadata: CrawlMetadata::new(),
        }
    }

    /// Stores an encoded index field.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, field: &IndexField) -> Self {
        self.metadata.insert_field(name, field);
        self
    }

    /// Stores a raw value.
    #[must_use]
    pub fn with_raw(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(name, value);
        self
    }

    /// Marks the record as fetched now.
    pub fn mark_fetched(&mut self) {
        self.fetch_time = Some(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_roundtrip_through_record() {
        let record = CrawlRecord::new("http://a.example/").with_field("tag", &IndexField::from_values(["a", "b"]));

        let field = record.metadata.field("tag").unwrap().unwrap();
        assert_eq!(field.values(), &[json!("a"), json!("b")]);
        assert!(record.metadata.field("other").is_none());
    }

    #[test]
    fn test_foreign_value_is_rejected() {
        let record = CrawlRecord::new("http://a.example/").with_raw("tag", json!(42));

        let err = record.metadata.field("tag").unwrap().unwrap_err();
        assert_eq!(err.actual, "number");
    }

    #[test]
    fn test_mark_fetched() {
        let mut record = CrawlRecord::new("http://a.example/");
        assert!(record.fetch_time.is_none());
        record.mark_fetched();
        assert!(record.fetch_time.is_some());
    }

    #[test]
    fn test_serialization() {
        let record = CrawlRecord::new("http://a.example/").with_field("tag", &IndexField::single("a"));
        let json = serde_json::to_string(&record).unwrap();
        let back: CrawlRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}

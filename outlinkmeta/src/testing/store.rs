//! Crawl record storage.

use crate::document::CrawlRecord;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;

/// Storage for crawl records, shared by all pages of a crawl.
#[async_trait]
pub trait CrawlRecordStore: Send + Sync {
    /// Inserts a record for a newly discovered URL.
    ///
    /// Returns false if the URL was already known; the stored record is kept.
    async fn discover(&self, record: CrawlRecord) -> bool;

    /// Gets the record for a URL.
    async fn get(&self, url: &str) -> Option<CrawlRecord>;

    /// Replaces the record for a URL.
    async fn update(&self, record: CrawlRecord);
}

/// A store backed by a map.
#[derive(Debug, Default)]
pub struct InMemoryCrawlStore {
    records: RwLock<BTreeMap<String, CrawlRecord>>,
}

impl InMemoryCrawlStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Returns true if no records are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Returns all known URLs.
    #[must_use]
    pub fn urls(&self) -> Vec<String> {
        self.records.read().keys().cloned().collect()
    }
}

#[async_trait]
impl CrawlRecordStore for InMemoryCrawlStore {
    async fn discover(&self, record: CrawlRecord) -> bool {
        let mut records = self.records.write();
        if records.contains_key(&record.url) {
            return false;
        }
        records.insert(record.url.clone(), record);
        true
    }

    async fn get(&self, url: &str) -> Option<CrawlRecord> {
        self.records.read().get(url).cloned()
    }

    async fn update(&self, record: CrawlRecord) {
        self.records.write().insert(record.url.clone(), record);
    }
}

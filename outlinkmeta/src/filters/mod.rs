//! Filter plugin points and the outlinkmeta filters.
//!
//! The crawl calls parse filters after a document has been parsed and
//! indexing filters while it builds the index document. Filters are
//! stateless per document and never fail the crawl.

mod index_filter;
mod parse_filter;

pub use index_filter::OutlinkMetaIndexingFilter;
pub use parse_filter::OutlinkMetaParseFilter;

use crate::document::{Content, CrawlRecord, IndexDocument, Parse, ParseResult};
use std::fmt::Debug;
use std::sync::Arc;

/// Hook run after parsing.
pub trait ParseFilter: Send + Sync + Debug {
    /// Returns the name of the filter.
    fn name(&self) -> &str;

    /// Inspects and amends the parses produced for `content`.
    fn filter(&self, content: &Content, result: ParseResult) -> ParseResult;
}

/// Hook run while building the index document.
pub trait IndexingFilter: Send + Sync + Debug {
    /// Returns the name of the filter.
    fn name(&self) -> &str;

    /// Amends the document. Returning `None` drops it from the index.
    fn filter(&self, doc: Option<IndexDocument>, parse: &Parse, record: &CrawlRecord) -> Option<IndexDocument>;
}

/// Parse filters run in insertion order.
#[derive(Debug, Default, Clone)]
pub struct ParseFilterChain {
    filters: Vec<Arc<dyn ParseFilter>>,
}

impl ParseFilterChain {
    /// Creates an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a filter.
    #[must_use]
    pub fn with(mut self, filter: Arc<dyn ParseFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Runs every filter.
    pub fn run(&self, content: &Content, result: ParseResult) -> ParseResult {
        self.filters
            .iter()
            .fold(result, |result, filter| filter.filter(content, result))
    }

    /// Returns the filter names.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Returns the number of filters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Returns true if the chain is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

/// Indexing filters run in insertion order; a dropped document stops the
/// chain.
#[derive(Debug, Default, Clone)]
pub struct IndexingFilterChain {
    filters: Vec<Arc<dyn IndexingFilter>>,
}

impl IndexingFilterChain {
    /// Creates an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a filter.
    #[must_use]
    pub fn with(mut self, filter: Arc<dyn IndexingFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Runs every filter.
    pub fn run(&self, doc: IndexDocument, parse: &Parse, record: &CrawlRecord) -> Option<IndexDocument> {
        let mut doc = Some(doc);
        for filter in &self.filters {
            doc = filter.filter(doc, parse, record);
            if doc.is_none() {
                tracing::debug!(filter = filter.name(), url = %record.url, "Document dropped");
                return None;
            }
        }
        doc
    }

    /// Returns the filter names.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Returns the number of filters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Returns true if the chain is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

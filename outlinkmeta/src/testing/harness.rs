//! An in-memory crawl that exercises the filters end to end.
//!
//! Each depth level is crawled concurrently, one task per URL. Pages share
//! nothing but the crawl record store, which is how annotations travel from
//! a source page to its target.

use super::fixtures::SimulatedPage;
use super::store::CrawlRecordStore;
use crate::config::OutlinkMetaConfig;
use crate::core::Outlink;
use crate::document::{CrawlRecord, IndexDocument, ParseResult};
use crate::filters::{
    IndexingFilter, IndexingFilterChain, OutlinkMetaIndexingFilter, OutlinkMetaParseFilter, ParseFilter,
    ParseFilterChain,
};
use crate::scoring::ScoringRelay;
use futures::future::join_all;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::task::JoinSet;

/// A page that made it into the index.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedPage {
    /// The page URL.
    pub url: String,
    /// The index document built for it.
    pub document: IndexDocument,
}

#[derive(Debug, Default)]
struct PageOutcome {
    outlinks: Vec<Outlink>,
    indexed: Option<IndexedPage>,
}

/// Drives parse, score, fetch and index over a set of simulated pages.
pub struct CrawlHarness {
    store: Arc<dyn CrawlRecordStore>,
    pages: HashMap<String, SimulatedPage>,
    parse_filters: ParseFilterChain,
    indexing_filters: IndexingFilterChain,
    scoring: ScoringRelay,
}

impl CrawlHarness {
    /// Creates a harness with the outlinkmeta filters installed.
    #[must_use]
    pub fn new(config: Arc<OutlinkMetaConfig>, store: Arc<dyn CrawlRecordStore>) -> Self {
        Self {
            store,
            pages: HashMap::new(),
            parse_filters: ParseFilterChain::new().with(Arc::new(OutlinkMetaParseFilter::new(Arc::clone(&config)))),
            indexing_filters: IndexingFilterChain::new()
                .with(Arc::new(OutlinkMetaIndexingFilter::new(Arc::clone(&config)))),
            scoring: ScoringRelay::new(config),
        }
    }

    /// Registers a fetchable page.
    #[must_use]
    pub fn with_page(mut self, page: SimulatedPage) -> Self {
        self.pages.insert(page.url.clone(), page);
        self
    }

    /// Appends a parse filter after the installed ones.
    #[must_use]
    pub fn with_parse_filter(mut self, filter: Arc<dyn ParseFilter>) -> Self {
        self.parse_filters = self.parse_filters.with(filter);
        self
    }

    /// Appends an indexing filter after the installed ones.
    #[must_use]
    pub fn with_indexing_filter(mut self, filter: Arc<dyn IndexingFilter>) -> Self {
        self.indexing_filters = self.indexing_filters.with(filter);
        self
    }

    /// Crawls from the seeds, following outlinks up to `max_depth` hops.
    ///
    /// Returns the indexed pages sorted by URL.
    pub async fn run(self: Arc<Self>, seeds: &[&str], max_depth: usize) -> Vec<IndexedPage> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut frontier: Vec<String> = seeds
            .iter()
            .filter(|url| seen.insert((**url).to_string()))
            .map(|url| (*url).to_string())
            .collect();
        let mut indexed = Vec::new();

        for depth in 0..=max_depth {
            if frontier.is_empty() {
                break;
            }
            tracing::debug!(depth, urls = frontier.len(), "Crawling level");

            let mut tasks = JoinSet::new();
            for url in frontier.drain(..) {
                let harness = Arc::clone(&self);
                tasks.spawn(async move { harness.crawl_page(&url).await });
            }

            while let Some(joined) = tasks.join_next().await {
                match joined {
                    Ok(outcome) => {
                        for outlink in outcome.outlinks {
                            if seen.insert(outlink.to_url.clone()) {
                                frontier.push(outlink.to_url);
                            }
                        }
                        indexed.extend(outcome.indexed);
                    }
                    Err(err) => tracing::warn!("Crawl task failed: {err}"),
                }
            }
        }

        indexed.sort_by(|a: &IndexedPage, b: &IndexedPage| a.url.cmp(&b.url));
        indexed
    }

    async fn crawl_page(&self, url: &str) -> PageOutcome {
        let Some(page) = self.pages.get(url) else {
            tracing::debug!(url, "Page not fetchable");
            return PageOutcome::default();
        };

        // fetch
        let mut record = self.store.get(url).await.unwrap_or_else(|| CrawlRecord::new(url));
        let mut content = page.content();
        self.scoring.before_parsing(&record, &mut content);

        // parse
        let result = self
            .parse_filters
            .run(&content, ParseResult::single(url, page.parse.clone()));
        let Some(parse) = result.get(url) else {
            return PageOutcome::default();
        };

        // score
        let outlinks: Vec<Outlink> = parse.data.outlinks().to_vec();
        join_all(
            outlinks
                .iter()
                .map(|outlink| self.store.discover(self.scoring.initial_record(outlink))),
        )
        .await;
        record.mark_fetched();
        self.store.update(record.clone()).await;

        // index
        let mut doc = IndexDocument::new();
        doc.add("url", url);
        if !parse.data.title.is_empty() {
            doc.add("title", parse.data.title.as_str());
        }
        let indexed = self
            .indexing_filters
            .run(doc, parse, &record)
            .map(|document| IndexedPage {
                url: url.to_string(),
                document,
            });

        PageOutcome { outlinks, indexed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{annotated_source, plain_page, InMemoryCrawlStore};
    use serde_json::json;

    fn harness(config: OutlinkMetaConfig, pages: Vec<SimulatedPage>) -> (Arc<CrawlHarness>, Arc<InMemoryCrawlStore>) {
        let store = Arc::new(InMemoryCrawlStore::new());
        let mut harness = CrawlHarness::new(Arc::new(config), Arc::clone(&store) as Arc<dyn CrawlRecordStore>);
        for page in pages {
            harness = harness.with_page(page);
        }
        (Arc::new(harness), store)
    }

    #[tokio::test]
    async fn test_plain_crawl_follows_links() {
        let (harness, store) = harness(
            OutlinkMetaConfig::new(),
            vec![
                plain_page("http://a.example/", "A", &["http://b.example/"]),
                plain_page("http://b.example/", "B", &[]),
            ],
        );

        let indexed = harness.run(&["http://a.example/"], 2).await;

        assert_eq!(indexed.len(), 2);
        assert_eq!(indexed[1].document.values("title"), &[json!("B")]);
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn test_annotation_reaches_target() {
        let (harness, _) = harness(
            OutlinkMetaConfig::new().with_fields(["tag"]),
            vec![
                annotated_source("http://a.example/", "outlinkmeta.url", "/doc.pdf", &[("tag", "x"), ("tag", "y")]),
                plain_page("http://a.example/doc.pdf", "Doc", &[]),
            ],
        );

        let indexed = harness.run(&["http://a.example/"], 1).await;

        let target = indexed.iter().find(|p| p.url == "http://a.example/doc.pdf").unwrap();
        assert_eq!(target.document.values("tag"), &[json!("x"), json!("y")]);
        let source = indexed.iter().find(|p| p.url == "http://a.example/").unwrap();
        assert!(source.document.field("tag").is_none());
    }

    #[tokio::test]
    async fn test_depth_limit() {
        let (harness, _) = harness(
            OutlinkMetaConfig::new(),
            vec![
                plain_page("http://a.example/", "A", &["http://b.example/"]),
                plain_page("http://b.example/", "B", &["http://c.example/"]),
                plain_page("http://c.example/", "C", &[]),
            ],
        );

        let indexed = harness.run(&["http://a.example/"], 1).await;
        let urls: Vec<_> = indexed.iter().map(|p| p.url.as_str()).collect();
        assert_eq!(urls, vec!["http://a.example/", "http://b.example/"]);
    }
}

//! Testing utilities for outlinkmeta.
//!
//! This module provides:
//! - Page and document fixtures
//! - An in-memory crawl record store
//! - A crawl harness driving parse, score, fetch and index for many pages

mod fixtures;
mod harness;
mod store;

pub use fixtures::{annotated_source, plain_page, target_content, SimulatedPage};
pub use harness::{CrawlHarness, IndexedPage};
pub use store::{CrawlRecordStore, InMemoryCrawlStore};

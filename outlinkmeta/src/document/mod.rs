//! Documents as they pass through the crawl stages.
//!
//! - [`Content`]: a fetched document with the metadata the crawl attached
//! - [`Parse`]: what the parser extracted from it
//! - [`CrawlRecord`]: the crawl database entry for a URL
//! - [`IndexDocument`]: the record handed to the index

mod content;
mod crawl_record;
mod index_document;
mod parse;

pub use content::Content;
pub use crawl_record::{CrawlMetadata, CrawlRecord};
pub use index_document::IndexDocument;
pub use parse::{Parse, ParseData, ParseResult};

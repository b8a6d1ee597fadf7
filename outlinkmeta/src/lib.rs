//! # Outlinkmeta
//!
//! Carries metadata of a parsed document along one of its outlinks so that it
//! is indexed with the linked document instead.
//!
//! A crawl processes every URL on its own, in separate parse, score, fetch and
//! index stages. The only channel between a linking document (the source) and
//! the linked one (the target) is the crawl record of the target URL. This
//! crate provides:
//!
//! - **Packing**: builds an annotation bag from configured parse metadata
//!   fields and appends an outlink carrying it
//! - **Scoring pass-through**: copies the bag into the crawl record of the
//!   discovered URL and marks it as a target
//! - **Unpacking**: merges the carried fields into the target's index
//!   document, one value at a time
//! - **Binary relay**: optionally indexes the target's raw bytes, base64
//!   encoded
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use outlinkmeta::prelude::*;
//!
//! let config = Arc::new(OutlinkMetaConfig::new().with_fields(["tag", "author"]));
//!
//! // parse time, on the source
//! let result = OutlinkMetaParseFilter::new(config.clone()).filter(&content, result);
//!
//! // index time, on the target
//! let doc = OutlinkMetaIndexingFilter::new(config).filter(Some(doc), &parse, &record);
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod binary;
pub mod config;
pub mod core;
pub mod document;
pub mod errors;
pub mod filters;
pub mod observability;
pub mod packer;
pub mod role;
pub mod scoring;
pub mod testing;
pub mod unpacker;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::binary::BinaryRelay;
    pub use crate::config::OutlinkMetaConfig;
    pub use crate::core::{
        append_outlink, fields_equal, FieldComparer, IndexField, Metadata, Outlink,
        OutlinkAnnotations,
    };
    pub use crate::document::{
        Content, CrawlMetadata, CrawlRecord, IndexDocument, Parse, ParseData, ParseResult,
    };
    pub use crate::errors::{
        ConfigError, MalformedDestinationError, OutlinkMetaError, UnexpectedValueShapeError,
    };
    pub use crate::filters::{
        IndexingFilter, IndexingFilterChain, OutlinkMetaIndexingFilter, OutlinkMetaParseFilter,
        ParseFilter, ParseFilterChain,
    };
    pub use crate::observability::{init_logging, LoggingConfig};
    pub use crate::packer::{AnnotationPacker, PackOutcome};
    pub use crate::role::{DocumentRole, RoleDetector};
    pub use crate::scoring::ScoringRelay;
    pub use crate::unpacker::{AnnotationUnpacker, MergeReport};
}

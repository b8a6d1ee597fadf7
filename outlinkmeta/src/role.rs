//! Role detection.
//!
//! A document takes part in the outlink metadata protocol as a source (its
//! parse metadata names a destination URL), as a target (the crawl marked it
//! as the destination of such a link) or not at all. The role is computed
//! once per document and passed to the steps that depend on it.

use crate::config::OutlinkMetaConfig;
use crate::document::{Content, CrawlRecord, ParseData};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Role of a document in the outlink metadata protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentRole {
    /// Neither source nor target.
    Unrelated,
    /// Requests an annotated outlink.
    Source,
    /// Receives annotations from a linking document.
    Target,
    /// Both at once. Rare: a target whose own metadata names another
    /// destination.
    SourceAndTarget,
}

impl DocumentRole {
    /// Builds the role from the two independent signals.
    #[must_use]
    pub const fn from_flags(source: bool, target: bool) -> Self {
        match (source, target) {
            (false, false) => Self::Unrelated,
            (true, false) => Self::Source,
            (false, true) => Self::Target,
            (true, true) => Self::SourceAndTarget,
        }
    }

    /// Returns true for `Source` and `SourceAndTarget`.
    #[must_use]
    pub const fn is_source(self) -> bool {
        matches!(self, Self::Source | Self::SourceAndTarget)
    }

    /// Returns true for `Target` and `SourceAndTarget`.
    #[must_use]
    pub const fn is_target(self) -> bool {
        matches!(self, Self::Target | Self::SourceAndTarget)
    }

    /// Returns false for `Unrelated`.
    #[must_use]
    pub const fn is_applicable(self) -> bool {
        !matches!(self, Self::Unrelated)
    }
}

impl fmt::Display for DocumentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Unrelated => "unrelated",
            Self::Source => "source",
            Self::Target => "target",
            Self::SourceAndTarget => "source_and_target",
        };
        write!(f, "{s}")
    }
}

/// Decides document roles from the configured URL field.
#[derive(Debug, Clone)]
pub struct RoleDetector {
    config: Arc<OutlinkMetaConfig>,
}

impl RoleDetector {
    /// Creates a detector.
    #[must_use]
    pub fn new(config: Arc<OutlinkMetaConfig>) -> Self {
        Self { config }
    }

    /// Returns the URL field used as role marker.
    #[must_use]
    pub fn url_field(&self) -> &str {
        &self.config.url_field
    }

    /// True if the parse metadata names a destination URL.
    #[must_use]
    pub fn is_source(&self, parse: &ParseData) -> bool {
        parse.parse_meta.has_non_empty(&self.config.url_field)
    }

    /// True if the crawl marked the fetched content as a destination.
    #[must_use]
    pub fn is_target(&self, content: &Content) -> bool {
        content.metadata.has_non_empty(&self.config.url_field)
    }

    /// Computes the parse-time role of a document.
    #[must_use]
    pub fn detect(&self, content: &Content, parse: &ParseData) -> DocumentRole {
        let role = DocumentRole::from_flags(self.is_source(parse), self.is_target(content));
        if role == DocumentRole::SourceAndTarget {
            tracing::info!(url = %content.url, "Document is both outlink source and target");
        }
        role
    }

    /// True if the crawl record holds a non-empty destination URL field.
    #[must_use]
    pub fn is_target_record(&self, record: &CrawlRecord) -> bool {
        match record.metadata.field(&self.config.url_field) {
            Some(Ok(field)) => field.first_str().is_some_and(|url| !url.is_empty()),
            _ => false,
        }
    }

    /// Computes the index-time role of a crawl record.
    #[must_use]
    pub fn detect_record(&self, record: &CrawlRecord) -> DocumentRole {
        DocumentRole::from_flags(false, self.is_target_record(record))
    }
}

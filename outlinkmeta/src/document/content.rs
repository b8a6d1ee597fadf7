//! Fetched document content.

use crate::core::Metadata;
use serde::{Deserialize, Serialize};

/// Raw content of a fetched URL.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    /// The fetched URL.
    pub url: String,
    /// Base URL for resolving relative links.
    pub base_url: String,
    /// Raw bytes.
    #[serde(default)]
    pub content: Vec<u8>,
    /// MIME type reported by the fetcher.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Metadata supplied by the crawl, not by the document.
    #[serde(default)]
    pub metadata: Metadata,
}

impl Content {
    /// Creates content whose base URL is its own URL.
    #[must_use]
    pub fn new(url: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        let url = url.into();
        Self {
            base_url: url.clone(),
            url,
            content: content.into(),
            content_type: None,
            metadata: Metadata::new(),
        }
    }

    /// Sets the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the content type.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Adds a metadata value.
    #[must_use]
    pub fn with_metadata(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.add(name, value);
        self
    }
}

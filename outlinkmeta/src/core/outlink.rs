//! Outgoing links and copy-append.

use super::OutlinkAnnotations;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A link from a parsed document to another URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outlink {
    /// Absolute destination URL.
    pub to_url: String,
    /// Anchor text.
    #[serde(default)]
    pub anchor: String,
    /// Metadata to carry to the destination.
    #[serde(default, skip_serializing_if = "OutlinkAnnotations::is_empty")]
    pub annotations: OutlinkAnnotations,
}

impl Outlink {
    /// Creates an outlink without annotations.
    #[must_use]
    pub fn new(to_url: impl Into<String>, anchor: impl Into<String>) -> Self {
        Self {
            to_url: to_url.into(),
            anchor: anchor.into(),
            annotations: OutlinkAnnotations::new(),
        }
    }

    /// Attaches annotations.
    #[must_use]
    pub fn with_annotations(mut self, annotations: OutlinkAnnotations) -> Self {
        self.annotations = annotations;
        self
    }
}

/// Returns a new sequence holding the given outlinks followed by `outlink`.
///
/// The input slice is left untouched.
#[must_use]
pub fn append_outlink(outlinks: &[Outlink], outlink: Outlink) -> Arc<[Outlink]> {
    let mut extended = Vec::with_capacity(outlinks.len() + 1);
    extended.extend_from_slice(outlinks);
    extended.push(outlink);
    extended.into()
}

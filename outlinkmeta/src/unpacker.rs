//! Annotation merging on the target document.

use crate::config::OutlinkMetaConfig;
use crate::document::{CrawlRecord, IndexDocument};
use crate::errors::UnexpectedValueShapeError;
use crate::role::DocumentRole;
use std::sync::Arc;

/// Summary of one merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Fields whose values were added to the document.
    pub merged_fields: Vec<String>,
    /// Configured fields that the record did not carry.
    pub skipped_fields: Vec<String>,
    /// Fields that carried a foreign value.
    pub rejected_fields: Vec<UnexpectedValueShapeError>,
}

impl MergeReport {
    /// Returns true if nothing was merged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.merged_fields.is_empty()
    }
}

/// Reads carried annotations from a crawl record into an index document.
#[derive(Debug, Clone)]
pub struct AnnotationUnpacker {
    config: Arc<OutlinkMetaConfig>,
}

impl AnnotationUnpacker {
    /// Creates an unpacker.
    #[must_use]
    pub fn new(config: Arc<OutlinkMetaConfig>) -> Self {
        Self { config }
    }

    /// Merges the configured fields carried by `record` into `doc`.
    ///
    /// Values are added one at a time so they accumulate the same way
    /// whether or not the document already has the field.
    pub fn merge(&self, role: DocumentRole, doc: &mut IndexDocument, record: &CrawlRecord) -> MergeReport {
        let mut report = MergeReport::default();
        if !role.is_target() {
            return report;
        }

        for name in &self.config.fields {
            match record.metadata.field(name) {
                Some(Ok(field)) => {
                    for value in field.values {
                        doc.add(name.as_str(), value);
                    }
                    report.merged_fields.push(name.clone());
                }
                Some(Err(err)) => {
                    tracing::warn!(field = %err.field, actual = %err.actual, "{err}");
                    report.rejected_fields.push(err);
                }
                None => report.skipped_fields.push(name.clone()),
            }
        }
        report
    }
}

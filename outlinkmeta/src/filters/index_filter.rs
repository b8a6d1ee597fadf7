//! Index-time half of the protocol.

use super::IndexingFilter;
use crate::binary::BinaryRelay;
use crate::config::OutlinkMetaConfig;
use crate::document::{CrawlRecord, IndexDocument, Parse};
use crate::role::RoleDetector;
use crate::unpacker::{AnnotationUnpacker, MergeReport};
use std::sync::Arc;
use tracing::{debug, info};

/// Adds carried annotations and relayed binary content to the index
/// documents of targets.
#[derive(Debug, Clone)]
pub struct OutlinkMetaIndexingFilter {
    detector: RoleDetector,
    unpacker: AnnotationUnpacker,
    binary: BinaryRelay,
}

impl OutlinkMetaIndexingFilter {
    /// Creates the filter.
    #[must_use]
    pub fn new(config: Arc<OutlinkMetaConfig>) -> Self {
        Self {
            detector: RoleDetector::new(Arc::clone(&config)),
            unpacker: AnnotationUnpacker::new(Arc::clone(&config)),
            binary: BinaryRelay::new(config),
        }
    }

    /// Merges into `doc` and reports what was merged.
    pub fn process(&self, doc: &mut IndexDocument, parse: &Parse, record: &CrawlRecord) -> MergeReport {
        let role = self.detector.detect_record(record);
        if !role.is_target() {
            debug!(url = %record.url, "Not processing");
            return MergeReport::default();
        }
        info!(url = %record.url, "Processing document");

        self.binary.relay(role, &parse.data.parse_meta, doc);
        self.unpacker.merge(role, doc, record)
    }
}

impl IndexingFilter for OutlinkMetaIndexingFilter {
    fn name(&self) -> &str {
        "outlinkmeta-index"
    }

    fn filter(&self, doc: Option<IndexDocument>, parse: &Parse, record: &CrawlRecord) -> Option<IndexDocument> {
        let mut doc = doc?;
        self.process(&mut doc, parse, record);
        Some(doc)
    }
}

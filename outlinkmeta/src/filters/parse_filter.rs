//! Parse-time half of the protocol.

use super::ParseFilter;
use crate::binary::BinaryRelay;
use crate::config::OutlinkMetaConfig;
use crate::document::{Content, ParseResult};
use crate::packer::{AnnotationPacker, PackOutcome};
use crate::role::{DocumentRole, RoleDetector};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Stages binary content of targets and attaches annotated outlinks to
/// sources.
#[derive(Debug, Clone)]
pub struct OutlinkMetaParseFilter {
    detector: RoleDetector,
    packer: AnnotationPacker,
    binary: BinaryRelay,
}

impl OutlinkMetaParseFilter {
    /// Creates the filter.
    #[must_use]
    pub fn new(config: Arc<OutlinkMetaConfig>) -> Self {
        Self {
            detector: RoleDetector::new(Arc::clone(&config)),
            packer: AnnotationPacker::new(Arc::clone(&config)),
            binary: BinaryRelay::new(config),
        }
    }

    /// Processes the parse of `content` and returns the role it was given.
    pub fn process(&self, content: &Content, result: &mut ParseResult) -> DocumentRole {
        let Some(parse) = result.get_mut(&content.url) else {
            debug!(url = %content.url, "No parse for document");
            return DocumentRole::Unrelated;
        };

        let role = self.detector.detect(content, &parse.data);
        if !role.is_applicable() {
            debug!(url = %content.url, "Not processing");
            return role;
        }
        info!(url = %content.url, %role, "Processing");

        self.binary.stage(role, &content.content, &mut parse.data.parse_meta);

        if role.is_source() {
            match self.packer.pack(&content.base_url, &mut parse.data) {
                Ok(PackOutcome::Appended(outlink)) => {
                    info!(
                        url = %content.url,
                        to_url = %outlink.to_url,
                        fields = ?outlink.annotations.names(),
                        "Added annotated outlink"
                    );
                }
                Ok(outcome) => debug!(url = %content.url, ?outcome, "No outlink added"),
                Err(err) => warn!(url = %content.url, destination = %err.url, "Malformed outlink url: {err}"),
            }
        }
        role
    }
}

impl ParseFilter for OutlinkMetaParseFilter {
    fn name(&self) -> &str {
        "outlinkmeta-parse"
    }

    fn filter(&self, content: &Content, mut result: ParseResult) -> ParseResult {
        self.process(content, &mut result);
        result
    }
}

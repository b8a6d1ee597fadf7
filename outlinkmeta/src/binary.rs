//! Binary payload relay.
//!
//! When enabled, a target document stages its raw bytes, base64 encoded, in
//! its own parse metadata. The indexing side copies the staged string into
//! the index document unchanged.

use crate::config::OutlinkMetaConfig;
use crate::core::Metadata;
use crate::document::IndexDocument;
use crate::role::DocumentRole;
use base64::{engine::general_purpose::STANDARD, Engine};
use std::sync::Arc;

/// Stages and relays raw content for target documents.
#[derive(Debug, Clone)]
pub struct BinaryRelay {
    config: Arc<OutlinkMetaConfig>,
}

impl BinaryRelay {
    /// Creates a relay.
    #[must_use]
    pub fn new(config: Arc<OutlinkMetaConfig>) -> Self {
        Self { config }
    }

    /// Returns true if binary indexing is switched on.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.config.index_binary
    }

    /// Returns the reserved field name.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.config.binary_field
    }

    /// Encodes bytes the way they are staged.
    #[must_use]
    pub fn encode(bytes: &[u8]) -> String {
        STANDARD.encode(bytes)
    }

    /// Decodes a staged value back into bytes.
    pub fn decode(encoded: &str) -> Result<Vec<u8>, base64::DecodeError> {
        STANDARD.decode(encoded)
    }

    /// Stores the encoded content in the parse metadata of a target document.
    ///
    /// Returns true if something was staged.
    pub fn stage(&self, role: DocumentRole, content: &[u8], parse_meta: &mut Metadata) -> bool {
        if !self.is_enabled() || !role.is_target() {
            return false;
        }
        parse_meta.set(self.config.binary_field.as_str(), Self::encode(content));
        tracing::debug!(bytes = content.len(), field = %self.config.binary_field, "Staged binary content");
        true
    }

    /// Copies a staged value into the index document.
    ///
    /// Returns true if a field was added. A missing value is not an error.
    pub fn relay(&self, role: DocumentRole, parse_meta: &Metadata, doc: &mut IndexDocument) -> bool {
        if !self.is_enabled() || !role.is_target() {
            return false;
        }
        match parse_meta.get(&self.config.binary_field) {
            Some(encoded) => {
                doc.add(self.config.binary_field.as_str(), encoded);
                true
            }
            None => false,
        }
    }
}

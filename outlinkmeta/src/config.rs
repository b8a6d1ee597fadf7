//! Configuration for the outlinkmeta filters.
//!
//! The configuration is resolved once per process and shared read-only by the
//! parse filter, the indexing filter and the scoring relay.

use crate::errors::{ConfigError, OutlinkMetaError};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Property key listing the propagated fields.
pub const FIELDS_KEY: &str = "outlinkmeta.fields";
/// Property key naming the destination URL field.
pub const URL_FIELD_KEY: &str = "outlinkmeta.url_field";
/// Property key for the anchor text of generated outlinks.
pub const URL_DESCRIPTION_KEY: &str = "outlinkmeta.url_description";
/// Property key enabling the binary relay.
pub const INDEX_BINARY_KEY: &str = "outlinkmeta.index_binary";
/// Property key naming the reserved binary field.
pub const BINARY_FIELD_KEY: &str = "outlinkmeta.binary_field";

/// Settings shared by all outlinkmeta components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlinkMetaConfig {
    /// Names of the parse metadata fields copied onto the outlink.
    #[serde(default)]
    pub fields: Vec<String>,
    /// Field holding the destination URL. Also the role marker.
    #[serde(default = "default_url_field")]
    pub url_field: String,
    /// Anchor text for generated outlinks.
    #[serde(default = "default_url_description")]
    pub url_description: String,
    /// Whether target documents relay their raw content for indexing.
    #[serde(default)]
    pub index_binary: bool,
    /// Field holding the base64 encoded content.
    #[serde(default = "default_binary_field")]
    pub binary_field: String,
}

fn default_url_field() -> String {
    "outlinkmeta.url".to_string()
}

fn default_url_description() -> String {
    "outlinkmeta".to_string()
}

fn default_binary_field() -> String {
    "outlinkmeta.binary_content".to_string()
}

impl Default for OutlinkMetaConfig {
    fn default() -> Self {
        Self {
            fields: Vec::new(),
            url_field: default_url_field(),
            url_description: default_url_description(),
            index_binary: false,
            binary_field: default_binary_field(),
        }
    }
}

impl OutlinkMetaConfig {
    /// Creates a configuration with defaults and no propagated fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the propagated fields.
    #[must_use]
    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Adds one propagated field.
    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.fields.push(field.into());
        self
    }

    /// Sets the destination URL field.
    #[must_use]
    pub fn with_url_field(mut self, url_field: impl Into<String>) -> Self {
        self.url_field = url_field.into();
        self
    }

    /// Sets the anchor text of generated outlinks.
    #[must_use]
    pub fn with_url_description(mut self, description: impl Into<String>) -> Self {
        self.url_description = description.into();
        self
    }

    /// Enables or disables the binary relay.
    #[must_use]
    pub fn with_index_binary(mut self, enabled: bool) -> Self {
        self.index_binary = enabled;
        self
    }

    /// Sets the reserved binary field.
    #[must_use]
    pub fn with_binary_field(mut self, binary_field: impl Into<String>) -> Self {
        self.binary_field = binary_field.into();
        self
    }

    /// Reads the configuration from flat host properties.
    ///
    /// Missing keys fall back to the defaults. `outlinkmeta.fields` is split
    /// on commas and whitespace.
    pub fn from_properties(properties: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = properties.get(FIELDS_KEY) {
            config.fields = raw
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }
        if let Some(raw) = properties.get(URL_FIELD_KEY) {
            config.url_field = raw.trim().to_string();
        }
        if let Some(raw) = properties.get(URL_DESCRIPTION_KEY) {
            config.url_description = raw.clone();
        }
        if let Some(raw) = properties.get(INDEX_BINARY_KEY) {
            config.index_binary = raw
                .trim()
                .parse::<bool>()
                .map_err(|_| ConfigError::new(INDEX_BINARY_KEY, format!("expected true or false, got '{raw}'")))?;
        }
        if let Some(raw) = properties.get(BINARY_FIELD_KEY) {
            config.binary_field = raw.trim().to_string();
        }

        config.validate()?;
        Ok(config)
    }

    /// Parses a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self, OutlinkMetaError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, OutlinkMetaError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Checks the reserved names and the field list.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url_field.is_empty() {
            return Err(ConfigError::new(URL_FIELD_KEY, "must not be empty"));
        }
        if self.binary_field.is_empty() {
            return Err(ConfigError::new(BINARY_FIELD_KEY, "must not be empty"));
        }
        if self.url_field == self.binary_field {
            return Err(ConfigError::new(
                BINARY_FIELD_KEY,
                format!("must differ from {URL_FIELD_KEY} ('{}')", self.url_field),
            ));
        }

        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.as_str()) {
                return Err(ConfigError::new(FIELDS_KEY, format!("duplicate field '{field}'")));
            }
        }
        Ok(())
    }
}

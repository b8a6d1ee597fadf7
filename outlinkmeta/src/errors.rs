//! Error types for the outlinkmeta filters.
//!
//! None of these are fatal to a crawl. The filters log them and drop the
//! affected outlink or field; the lower-level helpers return them so the
//! recovery path can be observed.

use thiserror::Error;

/// The main error type for outlinkmeta operations.
#[derive(Debug, Error)]
pub enum OutlinkMetaError {
    /// The destination URL could not be resolved.
    #[error("{0}")]
    MalformedDestination(#[from] MalformedDestinationError),

    /// A carried value did not have the index field shape.
    #[error("{0}")]
    UnexpectedValueShape(#[from] UnexpectedValueShapeError),

    /// A configuration property was invalid.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for OutlinkMetaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Error raised when the destination URL of an annotated outlink cannot be
/// resolved against the base URL of the source document.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Malformed outlink url '{url}' (base '{base_url}'): {reason}")]
pub struct MalformedDestinationError {
    /// The raw destination value read from the metadata.
    pub url: String,
    /// The base URL it was resolved against.
    pub base_url: String,
    /// Why resolution failed.
    pub reason: String,
}

impl MalformedDestinationError {
    /// Creates a new malformed destination error.
    #[must_use]
    pub fn new(url: impl Into<String>, base_url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            base_url: base_url.into(),
            reason: reason.into(),
        }
    }
}

/// Error raised when a value stored under a propagated field name is not an
/// encoded index field.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Field {field} should have type index_field but has type {actual}")]
pub struct UnexpectedValueShapeError {
    /// The field name the value was stored under.
    pub field: String,
    /// The shape that was actually found.
    pub actual: String,
}

impl UnexpectedValueShapeError {
    /// Creates a new unexpected value shape error.
    #[must_use]
    pub fn new(field: impl Into<String>, actual: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            actual: actual.into(),
        }
    }
}

/// Error raised when a configuration property is invalid.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid configuration for '{key}': {message}")]
pub struct ConfigError {
    /// The offending property key.
    pub key: String,
    /// What is wrong with it.
    pub message: String,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[must_use]
    pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
        }
    }
}

/// Result alias used across the crate.
pub type Result<T, E = OutlinkMetaError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_destination_message() {
        let err = MalformedDestinationError::new("ht!tp://bad", "http://example.com/", "relative URL without a base");
        assert!(err.to_string().contains("ht!tp://bad"));
        assert!(err.to_string().contains("http://example.com/"));
    }

    #[test]
    fn test_unexpected_shape_message() {
        let err = UnexpectedValueShapeError::new("tag", "string");
        assert_eq!(
            err.to_string(),
            "Field tag should have type index_field but has type string"
        );
    }

    #[test]
    fn test_from_conversions() {
        let err: OutlinkMetaError = ConfigError::new("outlinkmeta.index_binary", "not a boolean").into();
        assert!(matches!(err, OutlinkMetaError::Config(_)));

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: OutlinkMetaError = json_err.into();
        assert!(matches!(err, OutlinkMetaError::Serialization(_)));
    }
}

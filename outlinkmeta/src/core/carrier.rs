//! Codec for values placed in crawl record metadata.
//!
//! Crawl record metadata is an opaque name to JSON value mapping owned by the
//! crawl database. Index fields are written into it with a stable type tag and
//! read back through [`decode_field`], which is the only place a foreign value
//! can be rejected.

use super::IndexField;
use crate::errors::UnexpectedValueShapeError;
use serde::{Deserialize, Serialize};

/// Tag written next to every encoded index field.
pub const INDEX_FIELD_TAG: &str = "index_field";

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum CarriedValue {
    IndexField(IndexField),
}

/// Encodes a field for the crawl record.
#[must_use]
pub fn encode_field(field: &IndexField) -> serde_json::Value {
    serde_json::to_value(CarriedValue::IndexField(field.clone()))
        .unwrap_or(serde_json::Value::Null)
}

/// Decodes a value read from the crawl record under `name`.
pub fn decode_field(name: &str, value: &serde_json::Value) -> Result<IndexField, UnexpectedValueShapeError> {
    match serde_json::from_value::<CarriedValue>(value.clone()) {
        Ok(CarriedValue::IndexField(field)) => Ok(field),
        Err(_) => Err(UnexpectedValueShapeError::new(name, value_kind(value))),
    }
}

/// Describes the shape of a JSON value for diagnostics.
#[must_use]
pub fn value_kind(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::Bool(_) => "boolean".to_string(),
        serde_json::Value::Number(_) => "number".to_string(),
        serde_json::Value::String(_) => "string".to_string(),
        serde_json::Value::Array(_) => "array".to_string(),
        serde_json::Value::Object(map) => match map.get("type").and_then(serde_json::Value::as_str) {
            Some(tag) => format!("object({tag})"),
            None => "object".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_encoded_shape() {
        let encoded = encode_field(&IndexField::from_values(["a", "b"]));
        assert_eq!(
            encoded,
            json!({"type": "index_field", "weight": 1.0, "values": ["a", "b"]})
        );
        assert_eq!(encoded["type"], INDEX_FIELD_TAG);
    }

    #[test]
    fn test_decode_encoded() {
        let field = IndexField::from_values(["x", "y"]).with_weight(2.5);
        let decoded = decode_field("tag", &encode_field(&field)).unwrap();
        assert_eq!(decoded, field);
    }

    #[test]
    fn test_decode_rejects_plain_string() {
        let err = decode_field("tag", &json!("a")).unwrap_err();
        assert_eq!(err.field, "tag");
        assert_eq!(err.actual, "string");
    }

    #[test]
    fn test_decode_rejects_untagged_object() {
        let err = decode_field("tag", &json!({"weight": 1.0, "values": ["a"]})).unwrap_err();
        assert_eq!(err.actual, "object");
    }

    #[test]
    fn test_decode_rejects_foreign_tag() {
        let err = decode_field("tag", &json!({"type": "score", "value": 0.5})).unwrap_err();
        assert_eq!(err.actual, "object(score)");
    }

    #[test]
    fn test_decode_rejects_bad_values() {
        let err = decode_field("tag", &json!({"type": "index_field", "values": "a"})).unwrap_err();
        assert_eq!(err.actual, "object(index_field)");
    }
}

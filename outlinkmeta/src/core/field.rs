//! Weighted, multi-valued index field.

use serde::{Deserialize, Serialize};

fn default_weight() -> f32 {
    1.0
}

/// An ordered sequence of values with a weight.
///
/// Values are opaque JSON values; in practice they are mostly strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexField {
    /// Boost applied by the index.
    #[serde(default = "default_weight")]
    pub weight: f32,
    /// Values in insertion order.
    #[serde(default)]
    pub values: Vec<serde_json::Value>,
}

impl Default for IndexField {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexField {
    /// Creates an empty field with weight 1.0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            weight: default_weight(),
            values: Vec::new(),
        }
    }

    /// Creates a field holding a single value.
    #[must_use]
    pub fn single(value: impl Into<serde_json::Value>) -> Self {
        let mut field = Self::new();
        field.add(value);
        field
    }

    /// Creates a field from a sequence of values.
    #[must_use]
    pub fn from_values<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<serde_json::Value>,
    {
        Self {
            weight: default_weight(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Sets the weight.
    #[must_use]
    pub fn with_weight(mut self, weight: f32) -> Self {
        self.weight = weight;
        self
    }

    /// Appends a value.
    pub fn add(&mut self, value: impl Into<serde_json::Value>) {
        self.values.push(value.into());
    }

    /// Returns the values.
    #[must_use]
    pub fn values(&self) -> &[serde_json::Value] {
        &self.values
    }

    /// Returns the weight.
    #[must_use]
    pub fn weight(&self) -> f32 {
        self.weight
    }

    /// Returns the number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the field holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the first value as a string, if it is one.
    #[must_use]
    pub fn first_str(&self) -> Option<&str> {
        self.values.first().and_then(serde_json::Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_field() {
        let field = IndexField::new();
        assert!(field.is_empty());
        assert_eq!(field.weight(), 1.0);
    }

    #[test]
    fn test_add_preserves_order() {
        let mut field = IndexField::new();
        field.add("b");
        field.add("a");
        field.add("b");

        assert_eq!(field.values(), &[json!("b"), json!("a"), json!("b")]);
        assert_eq!(field.len(), 3);
    }

    #[test]
    fn test_first_str() {
        assert_eq!(IndexField::single("x").first_str(), Some("x"));
        assert_eq!(IndexField::single(3).first_str(), None);
        assert_eq!(IndexField::new().first_str(), None);
    }

    #[test]
    fn test_deserialize_default_weight() {
        let field: IndexField = serde_json::from_value(json!({"values": ["a"]})).unwrap();
        assert_eq!(field.weight(), 1.0);
        assert_eq!(field.values(), &[json!("a")]);
    }
}

//! Value-level equality for index fields.

use super::IndexField;

/// Returns true if both fields have the same weight and pairwise equal
/// values in the same order.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn fields_equal(a: &IndexField, b: &IndexField) -> bool {
    if a.weight != b.weight {
        return false;
    }
    if a.values.len() != b.values.len() {
        return false;
    }
    a.values.iter().zip(&b.values).all(|(x, y)| x == y)
}

impl PartialEq for IndexField {
    fn eq(&self, other: &Self) -> bool {
        fields_equal(self, other)
    }
}

/// Wraps a field so it can be compared against other fields or against
/// carried JSON values.
///
/// A JSON value compares equal only if it decodes as an index field.
#[derive(Debug, Clone, Copy)]
pub struct FieldComparer<'a> {
    field: &'a IndexField,
}

impl<'a> FieldComparer<'a> {
    /// Wraps a field.
    #[must_use]
    pub fn new(field: &'a IndexField) -> Self {
        Self { field }
    }

    /// Returns the wrapped field.
    #[must_use]
    pub fn field(&self) -> &'a IndexField {
        self.field
    }
}

impl PartialEq<IndexField> for FieldComparer<'_> {
    fn eq(&self, other: &IndexField) -> bool {
        fields_equal(self.field, other)
    }
}

impl PartialEq<serde_json::Value> for FieldComparer<'_> {
    fn eq(&self, other: &serde_json::Value) -> bool {
        super::decode_field("", other).is_ok_and(|decoded| fields_equal(self.field, &decoded))
    }
}

//! Case record type.
//!
//! A case record is a schema-free JSON object loaded verbatim from the source
//! file. Only two fields are recognized by name; everything else passes
//! through to the search engine unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field holding the full text of a legal case.
pub const FULL_CASE_TEXT_FIELD: &str = "full_case_text";

/// Field holding the case's human-readable identifier.
pub const CASE_IDENTIFIER_FIELD: &str = "case_identifier";

/// A single legal-case record.
///
/// Wraps the raw JSON object from the source file. No schema is enforced;
/// unknown fields are preserved as-is. Records are cloned before any
/// field-level modification so the loaded sequence stays untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaseRecord {
    fields: Map<String, Value>,
}

impl CaseRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the underlying field map.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Consume the record, returning the underlying field map.
    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }

    /// Get a field's value as a string slice, if present and a string.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(|v| v.as_str())
    }

    /// Set a field, replacing any existing value.
    pub fn insert(&mut self, field: impl Into<String>, value: Value) {
        self.fields.insert(field.into(), value);
    }

    /// Number of fields in the record.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Map<String, Value>> for CaseRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_preserves_unknown_fields() {
        let record: CaseRecord = serde_json::from_value(json!({
            "case_identifier": "case-1",
            "full_case_text": "some text",
            "court": "appeals",
            "year": 2019
        }))
        .unwrap();

        assert_eq!(record.get_str(CASE_IDENTIFIER_FIELD), Some("case-1"));
        assert_eq!(record.get_str("court"), Some("appeals"));
        assert_eq!(record.fields().get("year"), Some(&json!(2019)));
        assert_eq!(record.len(), 4);
    }

    #[test]
    fn test_get_str_non_string_field() {
        let record: CaseRecord = serde_json::from_value(json!({"year": 2019})).unwrap();
        assert!(record.get_str("year").is_none());
        assert!(record.get_str("missing").is_none());
    }

    #[test]
    fn test_serialize_round_trips_transparently() {
        let value = json!({"case_identifier": "case-2", "المحكمة": "التمييز"});
        let record: CaseRecord = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(serde_json::to_value(&record).unwrap(), value);
    }
}

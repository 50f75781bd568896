//! Employee Record Type

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw value supplied for a single input field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Integer field (age, income, ordinal ratings)
    Int(i64),
    /// Text field (closed categorical vocabularies)
    Text(String),
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

/// Single employee's raw input fields, keyed by feature name.
///
/// The scoring path addresses fields by name, so insertion order carries
/// no meaning; iteration is by name for determinism.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeRecord {
    fields: BTreeMap<String, FieldValue>,
}

impl EmployeeRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value, replacing any previous value
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> &mut Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Remove a field, returning its value if present
    pub fn remove(&mut self, name: &str) -> Option<FieldValue> {
        self.fields.remove(name)
    }

    /// Look up a field by name
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Iterate fields in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of fields present
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for EmployeeRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut record = EmployeeRecord::new();
        record.set("Age", 30).set("OverTime", "No");

        assert_eq!(record.get("Age"), Some(&FieldValue::Int(30)));
        assert_eq!(record.get("OverTime"), Some(&FieldValue::Text("No".to_string())));
        assert_eq!(record.get("Missing"), None);
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn test_json_shape_is_a_flat_map() {
        let record: EmployeeRecord = [
            ("Age", FieldValue::Int(30)),
            ("Gender", FieldValue::Text("Male".to_string())),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, serde_json::json!({"Age": 30, "Gender": "Male"}));

        let parsed: EmployeeRecord = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, record);
    }
}

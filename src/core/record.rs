//! Record abstraction consumed by the table engine and the aggregator

use crate::core::field::FieldValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A flat record whose fields can be read by name.
///
/// Returning `None` means the field is missing. Every stage treats a missing
/// field exactly like `FieldValue::Null`: it stringifies to `""` for search and
/// sort, and is excluded from date-windowed computations.
pub trait Record {
    /// Get the value of a specific field by name
    fn field_value(&self, field: &str) -> Option<FieldValue>;
}

impl<R: Record + ?Sized> Record for &R {
    fn field_value(&self, field: &str) -> Option<FieldValue> {
        (**self).field_value(field)
    }
}

/// An open-ended record, keyed by field name in insertion order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DynamicRecord {
    fields: IndexMap<String, FieldValue>,
}

impl DynamicRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for DynamicRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = DynamicRecord::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}

impl Record for DynamicRecord {
    fn field_value(&self, field: &str) -> Option<FieldValue> {
        self.fields.get(field).cloned()
    }
}

impl Record for Map<String, Value> {
    fn field_value(&self, field: &str) -> Option<FieldValue> {
        self.get(field).map(FieldValue::from_json)
    }
}

/// Only JSON objects have fields; any other value has none.
impl Record for Value {
    fn field_value(&self, field: &str) -> Option<FieldValue> {
        self.as_object().and_then(|obj| obj.field_value(field))
    }
}

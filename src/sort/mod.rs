//! Helpers for ordering records and record keys

use serde_json::{Map, Value};

pub mod compare;

pub use compare::{compare_fields, compare_values};

/// Anything that exposes named fields for sorting.
pub trait Record {
    fn field(&self, name: &str) -> Option<&Value>;
}

impl Record for Map<String, Value> {
    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

/// Objects expose their members; every other JSON value has no fields.
impl Record for Value {
    fn field(&self, name: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(name))
    }
}

/// Sort `items` in place by ascending value of `property_name`.
///
/// The sort is unstable: records with equal values may end up in any relative
/// order. Records missing the property are moved after all records that have it.
pub fn sort_array_by_property<R: Record>(items: &mut [R], property_name: &str) {
    items.sort_unstable_by(|a, b| {
        compare_fields(a.field(property_name), b.field(property_name))
    });
}

/// Return a copy of `record` whose keys are in lexicographic order.
pub fn sort_object_keys(record: &Map<String, Value>) -> Map<String, Value> {
    let mut entries: Vec<(&String, &Value)> = record.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries.into_iter().map(|(key, value)| (key.clone(), value.clone())).collect()
}

/// Apply [`sort_object_keys`] to every object nested anywhere inside `value`.
pub fn sort_object_keys_recursive(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let sorted = sort_object_keys(map);
            Value::Object(
                sorted.into_iter().map(|(k, v)| (k, sort_object_keys_recursive(&v))).collect(),
            )
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_object_keys_recursive).collect()),
        other => other.clone(),
    }
}

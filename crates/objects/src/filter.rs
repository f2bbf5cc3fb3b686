//! Query filters for `find` and `find_one`

use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// An equality filter over object fields.
///
/// Serialized into the JSON `query` parameter, e.g.
/// `{"metadata.featured":true,"type":"projects"}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectFilter {
    object_type: Option<String>,
    conditions: BTreeMap<String, Value>,
}

impl ObjectFilter {
    /// Create an empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a filter matching one object type
    pub fn of_type(object_type: &str) -> Self {
        Self {
            object_type: Some(object_type.to_string()),
            conditions: BTreeMap::new(),
        }
    }

    /// Require `field` to equal `value`. Dotted paths such as
    /// `metadata.featured` address metadata fields.
    pub fn eq<V: Into<Value>>(mut self, field: &str, value: V) -> Self {
        self.conditions.insert(field.to_string(), value.into());
        self
    }

    /// Require the object slug to equal `slug`
    pub fn slug(self, slug: &str) -> Self {
        self.eq("slug", slug)
    }

    /// The object type this filter is restricted to, if any
    pub fn object_type(&self) -> Option<&str> {
        self.object_type.as_deref()
    }

    /// The value `field` is constrained to, if any
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.conditions.get(field)
    }

    /// Build the JSON object sent as the `query` parameter
    pub fn to_json(&self) -> Value {
        let mut query = Map::new();
        if let Some(object_type) = &self.object_type {
            query.insert("type".to_string(), Value::String(object_type.clone()));
        }
        for (field, value) in &self.conditions {
            query.insert(field.clone(), value.clone());
        }
        Value::Object(query)
    }

    /// Render the filter as the string form of the `query` parameter
    pub fn to_query_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.to_json())
    }
}

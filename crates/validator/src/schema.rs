//! Validation schemas
//!
//! A [`Schema`] maps field names to rule strings. Field order is preserved
//! and is the order in which fields are validated and reported.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered `field → rule string` map.
///
/// Serializes as a plain JSON object, so schemas can be kept in
/// configuration files:
///
/// ```rust
/// use dsl_validator::Schema;
///
/// let schema = Schema::from_json_str(r#"{ "email": "required|email", "age": "integer|gte:18" }"#)
///     .unwrap();
/// assert_eq!(schema.get("age"), Some("integer|gte:18"));
/// assert_eq!(schema.fields().collect::<Vec<_>>(), ["email", "age"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema(IndexMap<String, String>);

impl Schema {
    /// Creates an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a field, builder style.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, rules: impl Into<String>) -> Self {
        self.insert(name, rules);
        self
    }

    /// Sets the rule string of `name`, returning the previous one. A replaced
    /// field keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, rules: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), rules.into())
    }

    /// Rule string of `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Field names in schema order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// `(field, rule string)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the schema has no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parses a schema from a JSON object of strings.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Schema {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Schema {
    fn from(fields: [(K, V); N]) -> Self {
        fields.into_iter().collect()
    }
}

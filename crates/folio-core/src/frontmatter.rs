//! Frontmatter value types with ordered, pass-through key storage.
//!
//! A frontmatter block is a restricted key-value header: string scalars,
//! lists of string scalars, and (as a tolerated legacy shape) lists of
//! single-key mappings. Keys keep their on-disk order so that re-encoding a
//! decoded block reproduces it byte-for-byte, and keys unknown to any schema
//! pass through untouched.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single frontmatter value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    /// A plain string scalar.
    Scalar(String),
    /// A list of string scalars.
    List(Vec<String>),
    /// Legacy shape: a list of single-key mappings (`- url: https://…`).
    /// Tolerated by the codec, flagged by validators.
    MappingList(Vec<(String, String)>),
}

impl Value {
    /// The scalar content, if this value is a scalar.
    #[must_use]
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Self::Scalar(value) => Some(value),
            Self::List(_) | Self::MappingList(_) => None,
        }
    }

    /// View the value as a flat list of strings. Scalars become a one-element
    /// list; mapping lists flatten to their values.
    #[must_use]
    pub fn as_items(&self) -> Vec<&str> {
        match self {
            Self::Scalar(value) => vec![value.as_str()],
            Self::List(items) => items.iter().map(String::as_str).collect(),
            Self::MappingList(entries) => {
                entries.iter().map(|(_, value)| value.as_str()).collect()
            }
        }
    }

    /// Whether the value carries no content (empty string or empty list).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Scalar(value) => value.trim().is_empty(),
            Self::List(items) => items.is_empty(),
            Self::MappingList(entries) => entries.is_empty(),
        }
    }

    /// Whether this value uses the legacy mapping-list shape.
    #[must_use]
    pub const fn is_legacy_shape(&self) -> bool {
        matches!(self, Self::MappingList(_))
    }
}

/// Insertion-ordered frontmatter mapping.
///
/// Backed by a `Vec` rather than a hash map so that unknown keys round-trip
/// in their original position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Frontmatter {
    entries: Vec<(String, Value)>,
}

impl Frontmatter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Look up a value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(entry_key, _)| entry_key == key)
            .map(|(_, value)| value)
    }

    /// Shorthand for a scalar lookup.
    #[must_use]
    pub fn get_scalar(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_scalar)
    }

    /// Insert a key, replacing any existing value in place (the key keeps
    /// its original position). New keys append at the end.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        if let Some(slot) = self
            .entries
            .iter_mut()
            .find(|(entry_key, _)| *entry_key == key)
        {
            slot.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Remove a key, returning its value if present.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let position = self
            .entries
            .iter()
            .position(|(entry_key, _)| entry_key == key)?;
        Some(self.entries.remove(position).1)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Value)> for Frontmatter {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{Frontmatter, Value};

    #[test]
    fn insert_replaces_in_place() {
        let mut fm = Frontmatter::new();
        fm.insert("name", Value::Scalar("alpha".into()));
        fm.insert("status", Value::Scalar("draft".into()));
        fm.insert("name", Value::Scalar("beta".into()));

        let keys: Vec<_> = fm.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["name", "status"]);
        assert_eq!(fm.get_scalar("name"), Some("beta"));
    }

    #[test]
    fn mapping_list_flattens_to_values() {
        let value = Value::MappingList(vec![
            ("url".into(), "https://example.com".into()),
            ("url".into(), "https://example.org".into()),
        ]);
        assert_eq!(
            value.as_items(),
            vec!["https://example.com", "https://example.org"]
        );
        assert!(value.is_legacy_shape());
    }

    #[test]
    fn empty_values_detected() {
        assert!(Value::Scalar("   ".into()).is_empty());
        assert!(Value::List(vec![]).is_empty());
        assert!(!Value::Scalar("x".into()).is_empty());
    }
}

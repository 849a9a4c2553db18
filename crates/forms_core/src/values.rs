//! Submitted form values.
//!
//! A [`ValueMap`] holds the concrete values of one form submission. An
//! absent or null value is distinct from an empty string: a browser that
//! never sent the field produces `None`, an empty text input produces
//! `Some("")`. Rule evaluators observe that distinction.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Mapping from field name to optional submitted value.
///
/// Serializes as a plain JSON object whose values are strings or `null`,
/// which is the shape a web-request layer hands over after deserializing a
/// form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueMap {
    entries: HashMap<String, Option<String>>,
}

impl ValueMap {
    /// Creates an empty value map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field to a present value.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(field.into(), Some(value.into()));
    }

    /// Sets a field to an explicit null.
    ///
    /// Equivalent to the field being absent: rule evaluators treat both as
    /// "no value submitted".
    pub fn set_null(&mut self, field: impl Into<String>) {
        self.entries.insert(field.into(), None);
    }

    /// The value of a field, flattening absent and null to `None`.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries.get(field).and_then(|v| v.as_deref())
    }

    /// Returns true if the map carries an entry for the field, even a null one.
    pub fn contains(&self, field: &str) -> bool {
        self.entries.contains_key(field)
    }

    /// Number of entries, null entries included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no entries are present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterator over all entries.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }
}

impl From<HashMap<String, Option<String>>> for ValueMap {
    fn from(entries: HashMap<String, Option<String>>) -> Self {
        Self { entries }
    }
}

impl FromIterator<(String, Option<String>)> for ValueMap {
    fn from_iter<T: IntoIterator<Item = (String, Option<String>)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for ValueMap {
    fn from_iter<T: IntoIterator<Item = (&'a str, &'a str)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.to_string(), Some(v.to_string())))
                .collect(),
        }
    }
}

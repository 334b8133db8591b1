//! Directive metadata returned by `scan` and values consumed by `convert`

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Insertion-ordered map from directive name to metadata
///
/// Names keep the position of their first appearance in the template. How a
/// repeated name is handled is decided by the caller through
/// [`Directives::insert_first`] or [`Directives::insert_last`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directives<V> {
    entries: Vec<(String, V)>,
}

impl<V> Directives<V> {
    /// Create an empty map
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert `value` unless `name` is already present (first wins)
    ///
    /// Returns true if the entry was added.
    pub fn insert_first(&mut self, name: &str, value: V) -> bool {
        if self.contains(name) {
            return false;
        }
        self.entries.push((name.to_string(), value));
        true
    }

    /// Insert `value`, replacing any previous value for `name` (last wins)
    ///
    /// A replaced entry keeps its original position.
    pub fn insert_last(&mut self, name: &str, value: V) {
        match self.entries.iter_mut().find(|(key, _)| key == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name.to_string(), value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(key, _)| key == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names in order of first appearance
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Entries in order of first appearance
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl<V> Default for Directives<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Serialize> Serialize for Directives<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Directive names and their template defaults, as found by `scan`
///
/// Precedence for repeated names:
/// - conditions: the default of the first occurrence wins
/// - blocks: the body of the last occurrence wins
/// - variables: the alternative list of the first occurrence wins
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    /// Condition name → default value (`false` when no initializer is given)
    pub conditions: Directives<bool>,
    /// Block name → body text
    pub blocks: Directives<String>,
    /// Variable name → alternatives (empty for free text)
    pub variables: Directives<Vec<String>>,
}

impl TemplateInfo {
    /// True if the template contains no directives at all
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty() && self.blocks.is_empty() && self.variables.is_empty()
    }

    /// Resolved values that reproduce every template default
    ///
    /// Variables resolve to their first alternative, or to an empty string
    /// when they are free text.
    pub fn defaults(&self) -> ResolvedValues {
        let mut values = ResolvedValues::new();
        for (name, default) in self.conditions.iter() {
            values.set_condition(name, *default);
        }
        for (name, body) in self.blocks.iter() {
            values.set_block(name, body.as_str());
        }
        for (name, alternatives) in self.variables.iter() {
            let default = alternatives.first().map(String::as_str).unwrap_or("");
            values.set_variable(name, default);
        }
        values
    }
}

/// Caller-supplied values for one conversion
///
/// Deserializes from a TOML document with `[conditions]`, `[blocks]` and
/// `[variables]` tables, all optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedValues {
    #[serde(default)]
    pub conditions: HashMap<String, bool>,
    #[serde(default)]
    pub blocks: HashMap<String, String>,
    #[serde(default)]
    pub variables: HashMap<String, String>,
}

impl ResolvedValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_condition(mut self, name: &str, value: bool) -> Self {
        self.set_condition(name, value);
        self
    }

    pub fn with_block(mut self, name: &str, body: impl Into<String>) -> Self {
        self.set_block(name, body);
        self
    }

    pub fn with_variable(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_variable(name, value);
        self
    }

    pub fn set_condition(&mut self, name: &str, value: bool) {
        self.conditions.insert(name.to_string(), value);
    }

    pub fn set_block(&mut self, name: &str, body: impl Into<String>) {
        self.blocks.insert(name.to_string(), body.into());
    }

    pub fn set_variable(&mut self, name: &str, value: impl Into<String>) {
        self.variables.insert(name.to_string(), value.into());
    }

    pub fn condition(&self, name: &str) -> Option<bool> {
        self.conditions.get(name).copied()
    }

    pub fn block(&self, name: &str) -> Option<&str> {
        self.blocks.get(name).map(String::as_str)
    }

    pub fn variable(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    /// Fill every entry missing from `self` with the value from `fallback`
    pub fn or_defaults(mut self, fallback: ResolvedValues) -> Self {
        for (name, value) in fallback.conditions {
            self.conditions.entry(name).or_insert(value);
        }
        for (name, body) in fallback.blocks {
            self.blocks.entry(name).or_insert(body);
        }
        for (name, value) in fallback.variables {
            self.variables.entry(name).or_insert(value);
        }
        self
    }
}

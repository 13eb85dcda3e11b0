//! The style mapping produced by the engine.

use std::collections::btree_map;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::value::StyleValue;

/// Property name to value mapping, the sole output of a parse.
///
/// Keys are camelCase property names (see [`Property`](super::Property)) or
/// breakpoint names holding a nested mapping. Later writes to a scalar key
/// replace earlier ones; breakpoint sub-mappings are only ever merged into.
///
/// Iteration order is by key, so two mappings built from the same input
/// compare and serialize identically.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleMapping {
    entries: BTreeMap<String, StyleValue>,
}

impl StyleMapping {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a value, replacing any previous value under the same key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<StyleValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Builder-style variant of [`set`](Self::set).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: impl AsRef<str>) -> Option<&StyleValue> {
        self.entries.get(key.as_ref())
    }

    /// Returns the value under `key` if it is a string.
    pub fn get_str(&self, key: impl AsRef<str>) -> Option<&str> {
        self.get(key).and_then(StyleValue::as_str)
    }

    /// Returns the value under `key` if it is a number.
    pub fn get_number(&self, key: impl AsRef<str>) -> Option<f64> {
        self.get(key).and_then(StyleValue::as_number)
    }

    pub fn contains_key(&self, key: impl AsRef<str>) -> bool {
        self.entries.contains_key(key.as_ref())
    }

    /// Returns the nested mapping recorded for a breakpoint.
    pub fn breakpoint(&self, name: &str) -> Option<&StyleMapping> {
        self.get(name).and_then(StyleValue::as_map)
    }

    /// Returns the nested mapping for a breakpoint, creating it on first use.
    ///
    /// An existing nested mapping is kept and merged into. A scalar that
    /// happens to sit under the same key is replaced.
    pub(crate) fn breakpoint_mut(&mut self, name: &str) -> &mut StyleMapping {
        let slot = self
            .entries
            .entry(name.to_string())
            .or_insert_with(|| StyleValue::Map(StyleMapping::new()));
        if !slot.is_map() {
            *slot = StyleValue::Map(StyleMapping::new());
        }
        match slot {
            StyleValue::Map(map) => map,
            _ => unreachable!("breakpoint slot was just set to a mapping"),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, StyleValue> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a StyleMapping {
    type Item = (&'a String, &'a StyleValue);
    type IntoIter = btree_map::Iter<'a, String, StyleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for StyleMapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

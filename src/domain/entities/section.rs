//! Section entity - one `[name]` block of a configuration file
//!
//! Keys are unique within a section. Key order carries no meaning, so keys
//! are kept sorted; that also makes serialized output deterministic.

use std::collections::btree_map;
use std::collections::BTreeMap;

use crate::domain::value_objects::Value;

/// Mapping from key to value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    entries: BTreeMap<String, Value>,
}

impl Section {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Insert or replace a value, returning the previous one
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Append to the list under `key`.
    ///
    /// A missing key or a scalar is replaced by a fresh list.
    pub fn push(&mut self, key: impl Into<String>, item: impl Into<String>) {
        let item = item.into();
        match self.entries.entry(key.into()) {
            btree_map::Entry::Occupied(mut slot) => match slot.get_mut() {
                Value::List(items) => items.push(item),
                scalar @ Value::Scalar(_) => *scalar = Value::List(vec![item]),
            },
            btree_map::Entry::Vacant(slot) => {
                slot.insert(Value::List(vec![item]));
            }
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copy every entry of `other` into this section, `other` winning.
    pub fn extend_from(&mut self, other: &Section) {
        for (key, value) in other.iter() {
            self.entries.insert(key.to_string(), value.clone());
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Section {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for Section {
    type Item = (String, Value);
    type IntoIter = btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

//! Loosely-typed configuration values.
//!
//! A [`ValueSet`] is the declared desired state of one resource instance:
//! field names mapped to strings, booleans, lists of scalars, or lists of
//! nested blocks. Field names come from the resource contract; this module
//! never invents them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single configuration value.
///
/// Lists of nested blocks are represented as `List` whose elements are
/// `Block`s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Bool(bool),
    String(String),
    List(Vec<ConfigValue>),
    Block(ValueSet),
}

impl ConfigValue {
    /// Static label of the variant, used in type mismatch errors.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::String(_) => "string",
            Self::List(_) => "list",
            Self::Block(_) => "block",
        }
    }

    /// Returns the string value, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean value, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the list elements, if this is a list.
    pub fn as_list(&self) -> Option<&[ConfigValue]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the nested block, if this is a block.
    pub fn as_block(&self) -> Option<&ValueSet> {
        match self {
            Self::Block(block) => Some(block),
            _ => None,
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<ValueSet> for ConfigValue {
    fn from(block: ValueSet) -> Self {
        Self::Block(block)
    }
}

impl<T: Into<ConfigValue>> From<Vec<T>> for ConfigValue {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

/// Field-name-to-value mapping for one resource instance or nested block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueSet(BTreeMap<String, ConfigValue>);

impl ValueSet {
    /// Creates an empty value set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, field: &str, value: impl Into<ConfigValue>) -> Self {
        self.set(field, value);
        self
    }

    /// Returns the value for a field, if present.
    pub fn get(&self, field: &str) -> Option<&ConfigValue> {
        self.0.get(field)
    }

    /// Sets a field, replacing any previous value.
    pub fn set(&mut self, field: &str, value: impl Into<ConfigValue>) {
        self.0.insert(field.to_string(), value.into());
    }

    /// Removes a field, returning its previous value.
    pub fn remove(&mut self, field: &str) -> Option<ConfigValue> {
        self.0.remove(field)
    }

    /// Returns true if the field is present.
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Overwrites the fields present in `other`, leaving the rest untouched.
    pub fn merge(&mut self, other: ValueSet) {
        self.0.extend(other.0);
    }

    /// Iterates fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, ConfigValue)> for ValueSet {
    fn from_iter<I: IntoIterator<Item = (String, ConfigValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

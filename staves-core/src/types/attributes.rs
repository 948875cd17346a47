//! Persistent key/value attributes and the accessor trait shared by score leaves.

use super::value::Value;
use crate::error::{Result, ScoreError};
use std::collections::BTreeMap;

/// Immutable mapping from attribute name to [`Value`].
///
/// Every "write" returns a new store; the receiver is never modified.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeStore {
    entries: BTreeMap<String, Value>,
}

impl AttributeStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// New store equal to this one except `key` maps to `value`
    pub fn update(&self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut entries = self.entries.clone();
        entries.insert(key.into(), value.into());
        Self { entries }
    }

    /// Exact lookup
    pub fn read(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Lookup that resolves unset keys to `Value::Nil`
    pub fn get(&self, key: &str) -> Value {
        self.read(key).cloned().unwrap_or_default()
    }

    /// Replace the value under `key` with `f(value)`.
    ///
    /// Unset keys are left unset and `f` is not called.
    pub fn mutate_with<F>(&self, key: &str, f: F) -> Self
    where
        F: FnOnce(&Value) -> Value,
    {
        match self.read(key) {
            Some(current) => self.update(key, f(current)),
            None => self.clone(),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
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

    /// Fill in every key of `defaults` that this store does not define.
    /// Keys already present keep their own value.
    pub fn inherit_from(&self, defaults: &AttributeStore) -> Self {
        let mut entries = self.entries.clone();
        for (key, value) in &defaults.entries {
            entries.entry(key.clone()).or_insert_with(|| value.clone());
        }
        Self { entries }
    }

    /// Layer `overrides` on top of this store; `overrides` wins on collision.
    pub fn merged_with(&self, overrides: &AttributeStore) -> Self {
        let mut entries = self.entries.clone();
        entries.extend(
            overrides
                .entries
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );
        Self { entries }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for AttributeStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<Value>, const N: usize> From<[(K, V); N]> for AttributeStore {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Result of the dynamic accessor [`Attributed::attr`]
#[derive(Debug, Clone, PartialEq)]
pub enum Access<T> {
    /// A read; `Value::Nil` when the attribute is unset
    Value(Value),
    /// A write, carrying the updated owner
    Updated(T),
}

impl<T> Access<T> {
    /// The value of a read, if this was one
    pub fn value(self) -> Option<Value> {
        match self {
            Access::Value(v) => Some(v),
            Access::Updated(_) => None,
        }
    }

    /// The updated owner of a write, if this was one
    pub fn updated(self) -> Option<T> {
        match self {
            Access::Updated(owner) => Some(owner),
            Access::Value(_) => None,
        }
    }
}

/// Something that owns an [`AttributeStore`] and can be rebuilt around a new one.
///
/// Implemented by every score leaf, so `note.get("dynamic")` reads as if
/// `dynamic` were a native field.
pub trait Attributed: Sized {
    fn attributes(&self) -> &AttributeStore;

    /// Copy of `self` carrying `attributes` instead of its own
    fn replace_attributes(&self, attributes: AttributeStore) -> Self;

    fn read(&self, key: &str) -> Option<&Value> {
        self.attributes().read(key)
    }

    fn get(&self, key: &str) -> Value {
        self.attributes().get(key)
    }

    fn update(&self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.replace_attributes(self.attributes().update(key, value))
    }

    fn mutate_with<F>(&self, key: &str, f: F) -> Self
    where
        F: FnOnce(&Value) -> Value,
    {
        self.replace_attributes(self.attributes().mutate_with(key, f))
    }

    /// Dynamic accessor.
    ///
    /// | args | block | result |
    /// |------|-------|--------|
    /// | 0    | no    | read (`Nil` when unset) |
    /// | 1    | no    | `update(key, args[0])` |
    /// | 0    | yes   | `mutate_with(key, block)`; unchanged when unset |
    /// | any other combination | | [`ScoreError::UnsupportedAccess`] |
    fn attr(
        &self,
        key: &str,
        args: &[Value],
        block: Option<&dyn Fn(&Value) -> Value>,
    ) -> Result<Access<Self>> {
        match (args, block) {
            ([], None) => Ok(Access::Value(self.get(key))),
            ([value], None) => Ok(Access::Updated(self.update(key, value.clone()))),
            ([], Some(f)) => Ok(Access::Updated(self.mutate_with(key, f))),
            _ => Err(ScoreError::UnsupportedAccess {
                key: key.to_string(),
                args: args.len(),
                block: block.is_some(),
            }),
        }
    }
}

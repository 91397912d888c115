//! Key paths
//!
//! Two kinds of path describe how to descend through nested objects:
//!
//! - [`KeyPath`]: every key must be present.
//! - [`OptionalKeyPath`]: each segment carries its own requiredness. A missing
//!   optional segment makes the whole lookup yield "no value" instead of a
//!   failure.
//!
//! Paths are plain values. Composition (see [`compose`]) always builds new
//! paths and never mutates its operands.

pub mod compose;

pub use compose::Joinable;

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single lookup name
pub type Key = String;

/// A path whose every key is required
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct KeyPath {
    keys: Vec<Key>,
}

impl KeyPath {
    /// The empty path, which resolves to the root itself
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one key
    pub fn key(mut self, key: impl Into<Key>) -> Self {
        self.keys.push(key.into());
        self
    }

    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn into_keys(self) -> Vec<Key> {
        self.keys
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.keys.join("."))
    }
}

impl From<&str> for KeyPath {
    fn from(key: &str) -> Self {
        Self { keys: vec![key.to_string()] }
    }
}

impl From<String> for KeyPath {
    fn from(key: String) -> Self {
        Self { keys: vec![key] }
    }
}

impl<K: Into<Key>> From<Vec<K>> for KeyPath {
    fn from(keys: Vec<K>) -> Self {
        keys.into_iter().collect()
    }
}

impl<K: Into<Key>, const N: usize> From<[K; N]> for KeyPath {
    fn from(keys: [K; N]) -> Self {
        keys.into_iter().collect()
    }
}

impl<K: Into<Key>> FromIterator<K> for KeyPath {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// One segment of an [`OptionalKeyPath`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OptionalKey {
    pub key: Key,
    /// When `true`, a missing key fails the lookup. When `false`, it ends the
    /// lookup with no value.
    pub is_required: bool,
}

impl OptionalKey {
    pub fn required(key: impl Into<Key>) -> Self {
        Self { key: key.into(), is_required: true }
    }

    pub fn optional(key: impl Into<Key>) -> Self {
        Self { key: key.into(), is_required: false }
    }
}

impl fmt::Display for OptionalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_required {
            f.write_str(&self.key)
        } else {
            write!(f, "{}?", self.key)
        }
    }
}

/// A path whose segments are individually required or optional
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct OptionalKeyPath {
    keys: Vec<OptionalKey>,
}

impl OptionalKeyPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// A single-segment path whose key may be absent
    pub fn optional_key(key: impl Into<Key>) -> Self {
        Self { keys: vec![OptionalKey::optional(key)] }
    }

    /// Append a required segment
    pub fn required(mut self, key: impl Into<Key>) -> Self {
        self.keys.push(OptionalKey::required(key));
        self
    }

    /// Append an optional segment
    pub fn optional(mut self, key: impl Into<Key>) -> Self {
        self.keys.push(OptionalKey::optional(key));
        self
    }

    pub fn keys(&self) -> &[OptionalKey] {
        &self.keys
    }

    /// The plain key names, dropping requiredness
    pub fn key_names(&self) -> Vec<Key> {
        self.keys.iter().map(|k| k.key.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Copy of this path with the first segment's flag set to `required`.
    /// An empty path is returned unchanged.
    pub fn marking_first(&self, required: bool) -> Self {
        let mut keys = self.keys.clone();
        if let Some(first) = keys.first_mut() {
            first.is_required = required;
        }
        Self { keys }
    }

    pub fn into_keys(self) -> Vec<OptionalKey> {
        self.keys
    }
}

impl fmt::Display for OptionalKeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.keys.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", key)?;
        }
        Ok(())
    }
}

/// Every key of a plain path is required
impl From<KeyPath> for OptionalKeyPath {
    fn from(path: KeyPath) -> Self {
        path.keys.into_iter().map(OptionalKey::required).collect()
    }
}

impl From<&KeyPath> for OptionalKeyPath {
    fn from(path: &KeyPath) -> Self {
        path.keys.iter().cloned().map(OptionalKey::required).collect()
    }
}

impl From<OptionalKey> for OptionalKeyPath {
    fn from(key: OptionalKey) -> Self {
        Self { keys: vec![key] }
    }
}

impl From<Vec<OptionalKey>> for OptionalKeyPath {
    fn from(keys: Vec<OptionalKey>) -> Self {
        Self { keys }
    }
}

impl FromIterator<OptionalKey> for OptionalKeyPath {
    fn from_iter<I: IntoIterator<Item = OptionalKey>>(iter: I) -> Self {
        Self { keys: iter.into_iter().collect() }
    }
}

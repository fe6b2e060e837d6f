//! Insertion-ordered collections.
//!
//! Backs the named collections of the document whose entry order is observable on the wire
//! (paths, responses and callback expressions). Unlike [`Map`](super::map::Map), the order
//! never depends on the `preserve_order` feature.

use std::{borrow::Borrow, hash::Hash};

use indexmap::IndexMap;
use serde_json::Value;

use super::extensions::{Extensible, Extensions};
use crate::marshal::{Marshal, ObjectWriter, Omit};

/// An insertion-ordered map with vendor extensions.
///
/// The entry storage is allocated on the first write. Queries on a collection that was
/// never written to behave as on an empty one.
#[derive(Debug, Clone)]
pub struct OrderedMap<K, V> {
    entries: Option<IndexMap<K, V>>,
    extensions: Option<Extensions>,
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self {
            entries: None,
            extensions: None,
        }
    }
}

impl<K: Hash + Eq, V: PartialEq> PartialEq for OrderedMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().zip(other.iter()).all(|(a, b)| a == b)
            && self.extensions == other.extensions
    }
}

impl<K: Hash + Eq, V> OrderedMap<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a collection with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Some(IndexMap::with_capacity(capacity)),
            extensions: None,
        }
    }

    /// Returns the value stored under `key`.
    pub fn value<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.as_ref()?.get(key)
    }

    pub fn value_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.as_mut()?.get_mut(key)
    }

    /// Stores `value` under `key`.
    ///
    /// A new key is appended; an existing key keeps its position. Returns the previous value.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        self.entries
            .get_or_insert_with(IndexMap::new)
            .insert(key, value)
    }

    /// Returns the value under `key`, appending the one built by `default` when absent.
    pub fn get_or_insert_with(&mut self, key: K, default: impl FnOnce() -> V) -> &mut V {
        self.entries
            .get_or_insert_with(IndexMap::new)
            .entry(key)
            .or_insert_with(default)
    }

    /// Number of entries. Extensions are not counted.
    pub fn len(&self) -> usize {
        self.entries.as_ref().map_or(0, IndexMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.value(key).is_some()
    }

    /// Removes `key`, keeping the relative order of the remaining entries.
    pub fn delete<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.as_mut()?.shift_remove(key)
    }

    /// Iterates the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().flatten()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(key, _)| key)
    }

    /// Appends `value` under `key` and returns `self`.
    pub fn with_entry(mut self, key: K, value: V) -> Self {
        self.set(key, value);
        self
    }
}

impl<K: Hash + Eq + Clone, V: Clone> OrderedMap<K, V> {
    /// Returns an owned copy of the entries, detached from this collection.
    pub fn snapshot(&self) -> IndexMap<K, V> {
        self.entries.clone().unwrap_or_default()
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: Some(iter.into_iter().collect()),
            extensions: None,
        }
    }
}

impl<K, V> Extensible for OrderedMap<K, V> {
    fn extensions(&self) -> Option<&Extensions> {
        self.extensions.as_ref()
    }

    fn extensions_mut(&mut self) -> &mut Option<Extensions> {
        &mut self.extensions
    }
}

impl<K: Hash + Eq + AsRef<str>, V: Marshal> Marshal for OrderedMap<K, V> {
    fn marshal(&self) -> Value {
        let mut writer = ObjectWriter::new(self.export_merged(self.len()));
        for (key, value) in self.iter() {
            writer.field(key.as_ref(), value);
        }
        writer.finish()
    }
}

impl<K: Hash + Eq, V> Omit for OrderedMap<K, V> {
    fn omit(&self) -> bool {
        self.is_empty()
    }
}

impl<K: Hash + Eq + AsRef<str>, V: Marshal> serde::Serialize for OrderedMap<K, V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.marshal().serialize(serializer)
    }
}

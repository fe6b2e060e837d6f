//! Marshaling of document nodes into their tree-structured wire form.
//!
//! Every document object converts itself into a [`serde_json::Value`] through the [`Marshal`]
//! trait. Objects start from the merged copy of their vendor extensions
//! (see [`Extensible::export_merged`](crate::openapi::Extensible::export_merged)) and write
//! their typed fields afterwards, so a typed field always shadows an extension using the same
//! key. The `serde::Serialize` implementations of the document types delegate to this trait,
//! which keeps the output identical across encoders (JSON, YAML, ...).

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde_json::Value;

/// Conversion of a document node into its wire form.
pub trait Marshal {
    /// Returns the wire form of this node.
    fn marshal(&self) -> Value;
}

impl<T: Marshal + ?Sized> Marshal for &T {
    fn marshal(&self) -> Value {
        (**self).marshal()
    }
}

impl<T: Marshal + ?Sized> Marshal for Box<T> {
    fn marshal(&self) -> Value {
        (**self).marshal()
    }
}

impl Marshal for str {
    fn marshal(&self) -> Value {
        Value::String(self.to_owned())
    }
}

impl Marshal for String {
    fn marshal(&self) -> Value {
        Value::String(self.clone())
    }
}

impl Marshal for bool {
    fn marshal(&self) -> Value {
        Value::Bool(*self)
    }
}

impl Marshal for u64 {
    fn marshal(&self) -> Value {
        Value::from(*self)
    }
}

/// Non-finite numbers have no JSON representation and marshal to `null`.
impl Marshal for f64 {
    fn marshal(&self) -> Value {
        Value::from(*self)
    }
}

impl Marshal for Value {
    fn marshal(&self) -> Value {
        self.clone()
    }
}

impl<T: Marshal> Marshal for Option<T> {
    fn marshal(&self) -> Value {
        self.as_ref().map_or(Value::Null, Marshal::marshal)
    }
}

impl<T: Marshal> Marshal for [T] {
    fn marshal(&self) -> Value {
        Value::Array(self.iter().map(Marshal::marshal).collect())
    }
}

impl<T: Marshal> Marshal for Vec<T> {
    fn marshal(&self) -> Value {
        self.as_slice().marshal()
    }
}

impl<T: Marshal> Marshal for BTreeMap<String, T> {
    fn marshal(&self) -> Value {
        Value::Object(self.iter().map(|(k, v)| (k.clone(), v.marshal())).collect())
    }
}

impl<T: Marshal> Marshal for IndexMap<String, T> {
    fn marshal(&self) -> Value {
        Value::Object(self.iter().map(|(k, v)| (k.clone(), v.marshal())).collect())
    }
}

/// Whether a field holds its "zero" value and is left out of the wire form.
pub(crate) trait Omit {
    fn omit(&self) -> bool;
}

impl<T> Omit for Option<T> {
    fn omit(&self) -> bool {
        self.is_none()
    }
}

impl Omit for bool {
    fn omit(&self) -> bool {
        !*self
    }
}

impl Omit for u64 {
    fn omit(&self) -> bool {
        *self == 0
    }
}

impl<T> Omit for Vec<T> {
    fn omit(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> Omit for BTreeMap<K, V> {
    fn omit(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> Omit for IndexMap<K, V> {
    fn omit(&self) -> bool {
        self.is_empty()
    }
}

/// Writes typed fields on top of the merged extensions of an object.
pub(crate) struct ObjectWriter {
    object: serde_json::Map<String, Value>,
}

impl ObjectWriter {
    pub(crate) fn new(merged: serde_json::Map<String, Value>) -> Self {
        Self { object: merged }
    }

    /// Writes `value` under `key` unconditionally.
    pub(crate) fn field<T: Marshal + ?Sized>(&mut self, key: &str, value: &T) {
        if self.object.insert(key.to_owned(), value.marshal()).is_some() {
            tracing::debug!(key, "field shadows a vendor extension with the same key");
        }
    }

    /// Writes `value` under `key` unless it holds its zero value.
    pub(crate) fn omittable<T: Marshal + Omit + ?Sized>(&mut self, key: &str, value: &T) {
        if !value.omit() {
            self.field(key, value);
        }
    }

    pub(crate) fn finish(self) -> Value {
        Value::Object(self.object)
    }
}

//! Extension support for OpenAPI objects.
//!
//! Extensions allow vendor-specific properties (x-something) to be added to any object.

use serde_json::Value;

use super::map::Map;

/// A map of extension properties.
///
/// Keys are stored as given; they are not checked for the `x-` prefix nor against the
/// field names of the owning object. On serialization a typed field wins over an
/// extension using the same key.
pub type Extensions = Map<String, Value>;

/// Side-bag of vendor extensions carried by every document object.
///
/// The storage is allocated on the first write. Extensions are merged into the marshaled
/// form of the object before its typed fields are written.
pub trait Extensible {
    /// Returns the stored extensions, `None` when nothing was ever set.
    fn extensions(&self) -> Option<&Extensions>;

    /// Returns the extension storage slot.
    fn extensions_mut(&mut self) -> &mut Option<Extensions>;

    /// Inserts or overwrites the extension `key`.
    fn set_extension(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.extensions_mut()
            .get_or_insert_with(Extensions::new)
            .insert(key.into(), value.into());
    }

    /// Removes the extension `key`. Does nothing if it is absent.
    fn remove_extension(&mut self, key: &str) {
        if let Some(extensions) = self.extensions_mut() {
            extensions.retain(|k, _| k.as_str() != key);
        }
    }

    /// Returns the value of the extension `key`.
    fn extension(&self, key: &str) -> Option<&Value> {
        self.extensions()?.get(key)
    }

    /// Sets the extension `key` and returns `self`.
    fn with_extension(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self
    where
        Self: Sized,
    {
        self.set_extension(key, value);
        self
    }

    /// Returns a fresh object holding a copy of every extension, pre-sized for `hint`
    /// additional typed fields. The stored extensions are left untouched.
    fn export_merged(&self, hint: usize) -> serde_json::Map<String, Value> {
        let extensions = self.extensions();
        let mut merged =
            serde_json::Map::with_capacity(extensions.map_or(0, |ext| ext.len()) + hint);
        for (key, value) in extensions.into_iter().flatten() {
            merged.insert(key.clone(), value.clone());
        }
        merged
    }
}

//! Paths collection and path template normalization.

use std::{
    collections::BTreeSet,
    ops::{Deref, DerefMut},
};

use serde_json::Value;

use super::{ordered::OrderedMap, path_item::PathItem};
use crate::marshal::Marshal;

/// Relative endpoint paths to their [`PathItem`], in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paths(OrderedMap<String, PathItem>);

impl Paths {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(OrderedMap::with_capacity(capacity))
    }

    /// Appends the item for `path`. An empty path is ignored.
    pub fn with_path(mut self, path: impl Into<String>, item: PathItem) -> Self {
        let path = path.into();
        if !path.is_empty() {
            self.0.set(path, item);
        }
        self
    }

    /// Returns the item for `path`.
    ///
    /// Falls back to the first path whose template matches once placeholder names are
    /// ignored, so `/users/{userId}` finds the item declared as `/users/{id}`.
    pub fn find(&self, path: &str) -> Option<&PathItem> {
        if let Some(item) = self.0.value(path) {
            return Some(item);
        }

        let wanted = normalize_templated_path(path);
        self.0
            .iter()
            .find(|(candidate, _)| normalize_templated_path(candidate).template == wanted.template)
            .map(|(_, item)| item)
    }
}

impl Deref for Paths {
    type Target = OrderedMap<String, PathItem>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Paths {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl FromIterator<(String, PathItem)> for Paths {
    fn from_iter<I: IntoIterator<Item = (String, PathItem)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Marshal for Paths {
    fn marshal(&self) -> Value {
        self.0.marshal()
    }
}

crate::builder_macros::serialize_via_marshal!(Paths);

/// A path template with its placeholder names stripped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedPath {
    /// The template with every `{name}` rewritten to `{}` (or `{*}` for `{name*}`).
    ///
    /// Names never appear here, so `/users/{id}` and `/users/{userId}` share a template.
    pub template: String,
    /// Number of placeholders, repeated names included.
    pub count: usize,
    /// Distinct placeholder names.
    pub names: BTreeSet<String>,
}

/// Extracts the placeholders of a path template.
///
/// A path without `{` is returned unchanged. An unterminated placeholder never fails: the
/// rest of the path is swallowed and its partial name is dropped.
///
/// ```
/// # use oasmodel_core::openapi::normalize_templated_path;
/// let normalized = normalize_templated_path("/files/{path*}");
/// assert_eq!(normalized.template, "/files/{*}");
/// assert_eq!(normalized.count, 1);
/// assert!(normalized.names.contains("path"));
/// ```
pub fn normalize_templated_path(path: &str) -> NormalizedPath {
    if !path.contains('{') {
        return NormalizedPath {
            template: path.to_owned(),
            ..Default::default()
        };
    }

    let mut normalized = NormalizedPath {
        template: String::with_capacity(path.len()),
        ..Default::default()
    };
    let mut name: Option<String> = None;

    for c in path.chars() {
        match (&mut name, c) {
            (Some(pending), '}') => {
                let wildcard = pending.ends_with('*');
                if wildcard {
                    pending.pop();
                    normalized.template.push('*');
                }
                normalized.names.insert(std::mem::take(pending));
                normalized.template.push('}');
                name = None;
            }
            (Some(pending), c) => pending.push(c),
            (None, '{') => {
                normalized.count += 1;
                normalized.template.push('{');
                name = Some(String::new());
            }
            (None, c) => normalized.template.push(c),
        }
    }

    if let Some(pending) = name {
        tracing::debug!(
            path,
            partial_name = %pending,
            "unterminated path template placeholder"
        );
    }

    normalized
}

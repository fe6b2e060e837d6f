//! Callback entity.

use std::ops::{Deref, DerefMut};

use serde_json::Value;

use super::{ordered::OrderedMap, path_item::PathItem};
use crate::marshal::Marshal;

/// Runtime expressions to the [`PathItem`] describing the out-of-band request, in insertion
/// order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Callback(OrderedMap<String, PathItem>);

impl Callback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(OrderedMap::with_capacity(capacity))
    }

    /// Appends the item for `expression`. An empty expression is ignored.
    pub fn with_callback(mut self, expression: impl Into<String>, item: PathItem) -> Self {
        let expression = expression.into();
        if !expression.is_empty() {
            self.0.set(expression, item);
        }
        self
    }
}

impl Deref for Callback {
    type Target = OrderedMap<String, PathItem>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Callback {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Marshal for Callback {
    fn marshal(&self) -> Value {
        self.0.marshal()
    }
}

crate::builder_macros::serialize_via_marshal!(Callback);

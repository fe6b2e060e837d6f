//! Discriminator entity for polymorphic schemas.

use serde_json::Value;

use super::{
    extensions::{Extensible, Extensions},
    map::Map,
};
use crate::marshal::{Marshal, ObjectWriter};

/// Selects the schema of a composed value from one of its properties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Discriminator {
    /// Always emitted, even when empty.
    pub property_name: String,
    /// Property values to schema names or pointers.
    pub mapping: Map<String, String>,
    pub extensions: Option<Extensions>,
}

impl Discriminator {
    pub fn new(property_name: impl Into<String>) -> Self {
        Self {
            property_name: property_name.into(),
            ..Default::default()
        }
    }

    pub fn mapping(mut self, value: impl Into<String>, schema: impl Into<String>) -> Self {
        self.mapping.insert(value.into(), schema.into());
        self
    }
}

impl Marshal for Discriminator {
    fn marshal(&self) -> Value {
        let mut object = ObjectWriter::new(self.export_merged(2));
        object.field("propertyName", &self.property_name);
        object.omittable("mapping", &self.mapping);
        object.finish()
    }
}

crate::builder_macros::extensible!(Discriminator);
crate::builder_macros::serialize_via_marshal!(Discriminator);

//! XML representation metadata.

use serde_json::Value;

use super::extensions::{Extensible, Extensions};
use crate::marshal::{Marshal, ObjectWriter};

/// Fine-tunes the XML representation of a schema.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Xml {
    pub name: Option<String>,
    pub namespace: Option<String>,
    pub prefix: Option<String>,
    pub attribute: bool,
    pub wrapped: bool,
    pub extensions: Option<Extensions>,
}

impl Xml {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn attribute(mut self, attribute: bool) -> Self {
        self.attribute = attribute;
        self
    }

    pub fn wrapped(mut self, wrapped: bool) -> Self {
        self.wrapped = wrapped;
        self
    }
}

impl Marshal for Xml {
    fn marshal(&self) -> Value {
        let mut object = ObjectWriter::new(self.export_merged(5));
        object.omittable("name", &self.name);
        object.omittable("namespace", &self.namespace);
        object.omittable("prefix", &self.prefix);
        object.omittable("attribute", &self.attribute);
        object.omittable("wrapped", &self.wrapped);
        object.finish()
    }
}

crate::builder_macros::extensible!(Xml);
crate::builder_macros::serialize_via_marshal!(Xml);

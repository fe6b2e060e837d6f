//! Example entity.

use serde_json::Value;

use super::extensions::{Extensible, Extensions};
use crate::marshal::{Marshal, ObjectWriter};

/// A named example value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Example {
    pub summary: Option<String>,
    pub description: Option<String>,
    /// The literal example. Mutually exclusive with `external_value`.
    pub value: Option<Value>,
    /// A URL pointing to the literal example.
    pub external_value: Option<String>,
    pub extensions: Option<Extensions>,
}

impl Example {
    /// Creates an example holding `value`.
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: Some(value.into()),
            ..Default::default()
        }
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Marshal for Example {
    fn marshal(&self) -> Value {
        let mut object = ObjectWriter::new(self.export_merged(4));
        object.omittable("summary", &self.summary);
        object.omittable("description", &self.description);
        object.omittable("value", &self.value);
        object.omittable("externalValue", &self.external_value);
        object.finish()
    }
}

crate::builder_macros::extensible!(Example);
crate::builder_macros::serialize_via_marshal!(Example);

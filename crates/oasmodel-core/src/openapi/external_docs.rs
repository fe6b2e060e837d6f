//! External documentation entity.

use serde_json::Value;

use super::extensions::{Extensible, Extensions};
use crate::marshal::{Marshal, ObjectWriter};

/// Links to external documentation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExternalDocs {
    /// A description of the target documentation.
    pub description: Option<String>,

    /// The URL for the target documentation. Always emitted.
    pub url: String,

    pub extensions: Option<Extensions>,
}

impl ExternalDocs {
    /// Creates a new `ExternalDocs` with the given URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Sets the description for the external documentation.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Marshal for ExternalDocs {
    fn marshal(&self) -> Value {
        let mut object = ObjectWriter::new(self.export_merged(2));
        object.omittable("description", &self.description);
        object.field("url", &self.url);
        object.finish()
    }
}

crate::builder_macros::extensible!(ExternalDocs);
crate::builder_macros::serialize_via_marshal!(ExternalDocs);

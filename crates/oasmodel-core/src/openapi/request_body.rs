//! Request body entity.

use serde_json::Value;

use super::{
    Content, MediaType, Schema,
    extensions::{Extensible, Extensions},
    media_type::{content_with_form_data_schema, content_with_json_schema, content_with_schema},
    reference::RefOr,
};
use crate::marshal::{Marshal, ObjectWriter};

/// Describes a single request body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestBody {
    pub description: Option<String>,
    pub required: bool,

    /// Always emitted, even when empty.
    pub content: Content,

    pub extensions: Option<Extensions>,
}

impl RequestBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn content(mut self, content: Content) -> Self {
        self.content = content;
        self
    }

    /// Declares `schema` for every media type in `consumes`.
    pub fn schema(mut self, schema: impl Into<RefOr<Schema>>, consumes: &[&str]) -> Self {
        self.content = content_with_schema(schema, consumes);
        self
    }

    pub fn json_schema(mut self, schema: impl Into<RefOr<Schema>>) -> Self {
        self.content = content_with_json_schema(schema);
        self
    }

    pub fn form_data_schema(mut self, schema: impl Into<RefOr<Schema>>) -> Self {
        self.content = content_with_form_data_schema(schema);
        self
    }

    /// Returns the media type `name`.
    pub fn media_type(&self, name: &str) -> Option<&MediaType> {
        self.content.get(name)
    }
}

impl Marshal for RequestBody {
    fn marshal(&self) -> Value {
        let mut object = ObjectWriter::new(self.export_merged(3));
        object.omittable("description", &self.description);
        object.omittable("required", &self.required);
        object.field("content", &self.content);
        object.finish()
    }
}

crate::builder_macros::extensible!(RequestBody);
crate::builder_macros::serialize_via_marshal!(RequestBody);

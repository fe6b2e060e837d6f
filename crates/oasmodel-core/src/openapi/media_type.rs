//! Media type, encoding and content entities.

use serde_json::Value;

use super::{
    Example, Header, Schema,
    extensions::{Extensible, Extensions},
    map::Map,
    parameter::{SerializationMethod, SerializationStyle},
    reference::{RefOr, Refs, RefsExt},
};
use crate::marshal::{Marshal, ObjectWriter};

/// Media type name to [`MediaType`] map.
pub type Content = Map<String, MediaType>;

/// Builds a content map declaring `schema` for every media type in `consumes`.
///
/// An empty `consumes` list declares the schema for `*/*`.
pub fn content_with_schema(schema: impl Into<RefOr<Schema>>, consumes: &[&str]) -> Content {
    let media_type = MediaType::new().schema(schema);
    if consumes.is_empty() {
        return Content::from_iter([("*/*".to_owned(), media_type)]);
    }
    consumes
        .iter()
        .map(|name| ((*name).to_owned(), media_type.clone()))
        .collect()
}

/// Builds a content map for `application/json`.
pub fn content_with_json_schema(schema: impl Into<RefOr<Schema>>) -> Content {
    content_with_schema(schema, &["application/json"])
}

/// Builds a content map for `multipart/form-data`.
pub fn content_with_form_data_schema(schema: impl Into<RefOr<Schema>>) -> Content {
    content_with_schema(schema, &["multipart/form-data"])
}

/// A media type and its schema.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaType {
    /// The schema for this media type.
    pub schema: Option<RefOr<Schema>>,

    /// Example value for this media type.
    pub example: Option<Value>,

    pub examples: Refs<Example>,

    /// Encoding per property name, only for `multipart` and form media types.
    pub encoding: Map<String, Encoding>,

    pub extensions: Option<Extensions>,
}

impl MediaType {
    /// Creates a new empty media type.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the schema for the media type.
    pub fn schema(mut self, schema: impl Into<RefOr<Schema>>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    /// Sets the example value for the media type.
    pub fn example(mut self, example: impl Into<Value>) -> Self {
        self.example = Some(example.into());
        self
    }

    /// Adds the inline example `name`.
    pub fn named_example(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.examples.add_value(name, Example::new(value));
        self
    }

    pub fn encoding(mut self, name: impl Into<String>, encoding: Encoding) -> Self {
        self.encoding.insert(name.into(), encoding);
        self
    }
}

impl Marshal for MediaType {
    fn marshal(&self) -> Value {
        let mut object = ObjectWriter::new(self.export_merged(4));
        object.omittable("schema", &self.schema);
        object.omittable("example", &self.example);
        object.omittable("examples", &self.examples);
        object.omittable("encoding", &self.encoding);
        object.finish()
    }
}

/// Serialization of a single property of a multipart or form body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Encoding {
    pub content_type: Option<String>,
    pub headers: Refs<Header>,
    pub style: Option<SerializationStyle>,
    pub explode: Option<bool>,
    pub allow_reserved: bool,
    pub extensions: Option<Extensions>,
}

impl Encoding {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn header(mut self, name: impl Into<String>, header: impl Into<RefOr<Header>>) -> Self {
        self.headers.insert(name.into(), header.into());
        self
    }

    pub fn style(mut self, style: SerializationStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn explode(mut self, explode: bool) -> Self {
        self.explode = Some(explode);
        self
    }

    /// Returns the effective serialization method, `form` with explode when unset.
    pub fn serialization_method(&self) -> SerializationMethod {
        let default = SerializationMethod::default();
        SerializationMethod {
            style: self.style.unwrap_or(default.style),
            explode: self.explode.unwrap_or(default.explode),
        }
    }
}

impl Marshal for Encoding {
    fn marshal(&self) -> Value {
        let mut object = ObjectWriter::new(self.export_merged(5));
        object.omittable("contentType", &self.content_type);
        object.omittable("headers", &self.headers);
        object.omittable("style", &self.style);
        object.omittable("explode", &self.explode);
        object.omittable("allowReserved", &self.allow_reserved);
        object.finish()
    }
}

crate::builder_macros::extensible!(MediaType, Encoding);
crate::builder_macros::serialize_via_marshal!(MediaType, Encoding);

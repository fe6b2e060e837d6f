//! Parameter, header and serialization style entities.

use std::ops::{Deref, DerefMut};

use serde_json::Value;

use super::{
    Content, Example, Schema,
    extensions::{Extensible, Extensions},
    reference::{RefOr, Refs},
};
use crate::marshal::{Marshal, ObjectWriter};

/// The location of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterIn {
    /// Part of the path template, e.g. `/users/{id}`.
    Path,
    /// Appended to the URL, e.g. `/users?id=1`.
    Query,
    /// A custom request header.
    Header,
    /// A cookie value.
    Cookie,
}

impl ParameterIn {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterIn::Path => "path",
            ParameterIn::Query => "query",
            ParameterIn::Header => "header",
            ParameterIn::Cookie => "cookie",
        }
    }
}

impl Marshal for ParameterIn {
    fn marshal(&self) -> Value {
        Value::String(self.as_str().to_owned())
    }
}

/// How a parameter value is serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SerializationStyle {
    Simple,
    Form,
    Matrix,
    Label,
    SpaceDelimited,
    PipeDelimited,
    DeepObject,
}

impl SerializationStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            SerializationStyle::Simple => "simple",
            SerializationStyle::Form => "form",
            SerializationStyle::Matrix => "matrix",
            SerializationStyle::Label => "label",
            SerializationStyle::SpaceDelimited => "spaceDelimited",
            SerializationStyle::PipeDelimited => "pipeDelimited",
            SerializationStyle::DeepObject => "deepObject",
        }
    }
}

impl Marshal for SerializationStyle {
    fn marshal(&self) -> Value {
        Value::String(self.as_str().to_owned())
    }
}

/// A resolved serialization style and explode flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerializationMethod {
    pub style: SerializationStyle,
    pub explode: bool,
}

impl Default for SerializationMethod {
    fn default() -> Self {
        Self {
            style: SerializationStyle::Form,
            explode: true,
        }
    }
}

/// Describes a single operation parameter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parameter {
    /// The name of the parameter.
    pub name: Option<String>,

    /// The location of the parameter.
    pub in_: Option<ParameterIn>,

    /// A description of the parameter.
    pub description: Option<String>,

    pub style: Option<SerializationStyle>,
    pub explode: Option<bool>,
    pub allow_empty_value: bool,
    pub allow_reserved: bool,
    pub deprecated: bool,

    /// Whether the parameter is required.
    pub required: bool,

    /// The schema for the parameter value.
    pub schema: Option<RefOr<Schema>>,

    pub example: Option<Value>,
    pub examples: Refs<Example>,
    pub content: Content,

    /// Extension properties.
    pub extensions: Option<Extensions>,
}

impl Parameter {
    /// Creates a new parameter with the given name and location.
    pub fn new(name: impl Into<String>, in_: ParameterIn) -> Self {
        Self {
            name: Some(name.into()),
            in_: Some(in_),
            ..Default::default()
        }
    }

    /// Creates a new path parameter. Path parameters are always required.
    pub fn path(name: impl Into<String>) -> Self {
        Self::new(name, ParameterIn::Path).required(true)
    }

    /// Creates a new query parameter.
    pub fn query(name: impl Into<String>) -> Self {
        Self::new(name, ParameterIn::Query)
    }

    /// Creates a new header parameter.
    pub fn header(name: impl Into<String>) -> Self {
        Self::new(name, ParameterIn::Header)
    }

    /// Creates a new cookie parameter.
    pub fn cookie(name: impl Into<String>) -> Self {
        Self::new(name, ParameterIn::Cookie)
    }

    /// Sets the description for the parameter.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets whether the parameter is required.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
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

    pub fn deprecated(mut self, deprecated: bool) -> Self {
        self.deprecated = deprecated;
        self
    }

    /// Sets the schema for the parameter.
    pub fn schema(mut self, schema: impl Into<RefOr<Schema>>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn example(mut self, example: impl Into<Value>) -> Self {
        self.example = Some(example.into());
        self
    }

    /// Returns the effective serialization method.
    ///
    /// Defaults follow the location: `form` for query and cookie parameters, `simple`
    /// otherwise. Explode defaults to `true` only for the `form` style.
    pub fn serialization_method(&self) -> SerializationMethod {
        let style = self.style.unwrap_or(match self.in_ {
            Some(ParameterIn::Query | ParameterIn::Cookie) => SerializationStyle::Form,
            _ => SerializationStyle::Simple,
        });
        let explode = self.explode.unwrap_or(style == SerializationStyle::Form);
        SerializationMethod { style, explode }
    }
}

impl Marshal for Parameter {
    fn marshal(&self) -> Value {
        let mut object = ObjectWriter::new(self.export_merged(13));

        object.omittable("name", &self.name);
        object.omittable("in", &self.in_);
        object.omittable("description", &self.description);
        object.omittable("style", &self.style);
        object.omittable("explode", &self.explode);
        object.omittable("allowEmptyValue", &self.allow_empty_value);
        object.omittable("allowReserved", &self.allow_reserved);
        object.omittable("deprecated", &self.deprecated);
        object.omittable("required", &self.required);
        object.omittable("schema", &self.schema);
        object.omittable("example", &self.example);
        object.omittable("examples", &self.examples);
        object.omittable("content", &self.content);

        object.finish()
    }
}

crate::builder_macros::extensible!(Parameter);
crate::builder_macros::serialize_via_marshal!(Parameter, Header, Parameters);

/// A list of parameters, inline or referenced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parameters(pub Vec<RefOr<Parameter>>);

impl Parameters {
    pub fn new() -> Self {
        Self(Vec::with_capacity(4))
    }

    /// Returns the inline parameter matching both location and name.
    ///
    /// Referenced parameters are skipped.
    pub fn get_by_in_and_name(&self, in_: ParameterIn, name: &str) -> Option<&Parameter> {
        self.0
            .iter()
            .filter_map(RefOr::value)
            .find(|parameter| parameter.in_ == Some(in_) && parameter.name.as_deref() == Some(name))
    }

    pub fn push(&mut self, parameter: impl Into<RefOr<Parameter>>) {
        self.0.push(parameter.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<RefOr<Parameter>> for Parameters {
    fn from_iter<I: IntoIterator<Item = RefOr<Parameter>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Marshal for Parameters {
    fn marshal(&self) -> Value {
        self.0.marshal()
    }
}

impl crate::marshal::Omit for Parameters {
    fn omit(&self) -> bool {
        self.is_empty()
    }
}

/// A header, shaped as a [`Parameter`] without `name` and `in`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Header(pub Parameter);

impl Header {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn description(self, description: impl Into<String>) -> Self {
        Self(self.0.description(description))
    }

    /// Sets the schema for the header.
    pub fn schema(self, schema: impl Into<RefOr<Schema>>) -> Self {
        Self(self.0.schema(schema))
    }

    pub fn required(self, required: bool) -> Self {
        Self(self.0.required(required))
    }
}

impl Deref for Header {
    type Target = Parameter;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Header {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Extensible for Header {
    fn extensions(&self) -> Option<&Extensions> {
        self.0.extensions()
    }

    fn extensions_mut(&mut self) -> &mut Option<Extensions> {
        self.0.extensions_mut()
    }
}

impl Marshal for Header {
    fn marshal(&self) -> Value {
        self.0.marshal()
    }
}

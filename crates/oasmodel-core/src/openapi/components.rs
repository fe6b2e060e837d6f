//! Components container for reusable objects.

use serde_json::Value;

use super::{
    Callback, Example, Header, Link, Parameter, RequestBody, Response, Schema, SecurityScheme,
    extensions::{Extensible, Extensions},
    reference::{RefOr, Refs},
};
use crate::marshal::{Marshal, ObjectWriter};

/// Holds a set of reusable objects for different aspects of the document.
///
/// Entries are addressed by pointers such as `#/components/schemas/Pet`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Components {
    /// Reusable schemas.
    pub schemas: Refs<Schema>,

    /// Reusable parameters.
    pub parameters: Refs<Parameter>,

    pub headers: Refs<Header>,
    pub request_bodies: Refs<RequestBody>,

    /// Reusable responses.
    pub responses: Refs<Response>,

    pub security_schemes: Refs<SecurityScheme>,
    pub examples: Refs<Example>,
    pub links: Refs<Link>,
    pub callbacks: Refs<Callback>,
    pub extensions: Option<Extensions>,
}

impl Components {
    /// Creates a new empty `Components`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a schema component.
    pub fn schema(mut self, name: impl Into<String>, schema: impl Into<RefOr<Schema>>) -> Self {
        self.schemas.insert(name.into(), schema.into());
        self
    }

    /// Adds a parameter component.
    pub fn parameter(
        mut self,
        name: impl Into<String>,
        parameter: impl Into<RefOr<Parameter>>,
    ) -> Self {
        self.parameters.insert(name.into(), parameter.into());
        self
    }

    pub fn header(mut self, name: impl Into<String>, header: impl Into<RefOr<Header>>) -> Self {
        self.headers.insert(name.into(), header.into());
        self
    }

    pub fn request_body(
        mut self,
        name: impl Into<String>,
        request_body: impl Into<RefOr<RequestBody>>,
    ) -> Self {
        self.request_bodies.insert(name.into(), request_body.into());
        self
    }

    /// Adds a response component.
    pub fn response(
        mut self,
        name: impl Into<String>,
        response: impl Into<RefOr<Response>>,
    ) -> Self {
        self.responses.insert(name.into(), response.into());
        self
    }

    pub fn security_scheme(
        mut self,
        name: impl Into<String>,
        scheme: impl Into<RefOr<SecurityScheme>>,
    ) -> Self {
        self.security_schemes.insert(name.into(), scheme.into());
        self
    }

    pub fn example(mut self, name: impl Into<String>, example: impl Into<RefOr<Example>>) -> Self {
        self.examples.insert(name.into(), example.into());
        self
    }

    pub fn link(mut self, name: impl Into<String>, link: impl Into<RefOr<Link>>) -> Self {
        self.links.insert(name.into(), link.into());
        self
    }

    pub fn callback(
        mut self,
        name: impl Into<String>,
        callback: impl Into<RefOr<Callback>>,
    ) -> Self {
        self.callbacks.insert(name.into(), callback.into());
        self
    }
}

impl Marshal for Components {
    fn marshal(&self) -> Value {
        let mut object = ObjectWriter::new(self.export_merged(9));
        object.omittable("schemas", &self.schemas);
        object.omittable("parameters", &self.parameters);
        object.omittable("headers", &self.headers);
        object.omittable("requestBodies", &self.request_bodies);
        object.omittable("responses", &self.responses);
        object.omittable("securitySchemes", &self.security_schemes);
        object.omittable("examples", &self.examples);
        object.omittable("links", &self.links);
        object.omittable("callbacks", &self.callbacks);
        object.finish()
    }
}

crate::builder_macros::extensible!(Components);
crate::builder_macros::serialize_via_marshal!(Components);

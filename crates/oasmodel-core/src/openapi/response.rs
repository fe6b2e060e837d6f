//! Response entities and status code resolution.

use std::ops::{Deref, DerefMut};

use serde_json::Value;

use super::{
    Content, Header, Link, Schema,
    extensions::{Extensible, Extensions},
    media_type::content_with_json_schema,
    ordered::OrderedMap,
    reference::{RefOr, Refs},
};
use crate::marshal::{Marshal, ObjectWriter};

/// Key of the response used when no status-specific entry matches.
pub const DEFAULT_RESPONSE: &str = "default";

/// Describes a single response from an API operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Response {
    /// A description of the response.
    pub description: Option<String>,

    pub headers: Refs<Header>,

    /// A map of media types to their schemas.
    pub content: Content,

    pub links: Refs<Link>,

    pub extensions: Option<Extensions>,
}

impl Response {
    /// Creates a new empty response.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the description for the response.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn header(mut self, name: impl Into<String>, header: impl Into<RefOr<Header>>) -> Self {
        self.headers.insert(name.into(), header.into());
        self
    }

    /// Sets the content (media types) for the response.
    pub fn content(mut self, content: Content) -> Self {
        self.content = content;
        self
    }

    /// Declares `schema` as the `application/json` content.
    pub fn json_schema(mut self, schema: impl Into<RefOr<Schema>>) -> Self {
        self.content = content_with_json_schema(schema);
        self
    }

    pub fn link(mut self, name: impl Into<String>, link: impl Into<RefOr<Link>>) -> Self {
        self.links.insert(name.into(), link.into());
        self
    }
}

impl Marshal for Response {
    fn marshal(&self) -> Value {
        let mut object = ObjectWriter::new(self.export_merged(4));
        object.omittable("description", &self.description);
        object.omittable("headers", &self.headers);
        object.omittable("content", &self.content);
        object.omittable("links", &self.links);
        object.finish()
    }
}

crate::builder_macros::extensible!(Response);

/// The responses of an operation, keyed by status code, range wildcard or `default`.
///
/// Keys keep their insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Responses(OrderedMap<String, RefOr<Response>>);

impl Responses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(OrderedMap::with_capacity(capacity))
    }

    /// Creates a collection holding a single `default` response with an empty description.
    pub fn catch_all() -> Self {
        Self::with_capacity(1).with_name(DEFAULT_RESPONSE, Response::new().description(""))
    }

    /// Appends the response for the status code `status`.
    pub fn with_status(mut self, status: u16, response: impl Into<RefOr<Response>>) -> Self {
        self.0.set(status.to_string(), response.into());
        self
    }

    /// Appends the inline response `name`. An empty name is ignored.
    pub fn with_name(mut self, name: impl Into<String>, response: Response) -> Self {
        let name = name.into();
        if !name.is_empty() {
            self.0.set(name, RefOr::T(response));
        }
        self
    }

    /// Returns the `default` response.
    pub fn default_response(&self) -> Option<&RefOr<Response>> {
        self.0.value(DEFAULT_RESPONSE)
    }

    /// Returns the response declared for `status`.
    ///
    /// The exact code is looked up first, then its range wildcard (`404` falls back to `4XX`)
    /// for codes between 100 and 599. The `default` response is never returned.
    pub fn status(&self, status: u16) -> Option<&RefOr<Response>> {
        if let Some(response) = self.0.value(status.to_string().as_str()) {
            return Some(response);
        }
        match status / 100 {
            class @ 1..=5 => self.0.value(format!("{class}XX").as_str()),
            _ => None,
        }
    }
}

impl Deref for Responses {
    type Target = OrderedMap<String, RefOr<Response>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Responses {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl FromIterator<(String, RefOr<Response>)> for Responses {
    fn from_iter<I: IntoIterator<Item = (String, RefOr<Response>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Marshal for Responses {
    fn marshal(&self) -> Value {
        self.0.marshal()
    }
}

crate::builder_macros::serialize_via_marshal!(Response, Responses);

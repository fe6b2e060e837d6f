//! Server entities.

use serde_json::Value;

use super::{
    extensions::{Extensible, Extensions},
    map::Map,
};
use crate::marshal::{Marshal, ObjectWriter, Omit};

/// A server hosting the API.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Server {
    /// The server URL, possibly holding `{variable}` placeholders. Always emitted.
    pub url: String,
    pub description: Option<String>,
    pub variables: Map<String, ServerVariable>,
    pub extensions: Option<Extensions>,
}

impl Server {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn variable(mut self, name: impl Into<String>, variable: ServerVariable) -> Self {
        self.variables.insert(name.into(), variable);
        self
    }
}

impl Marshal for Server {
    fn marshal(&self) -> Value {
        let mut object = ObjectWriter::new(self.export_merged(3));
        object.field("url", &self.url);
        object.omittable("description", &self.description);
        object.omittable("variables", &self.variables);
        object.finish()
    }
}

/// A substitution value for a server URL placeholder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerVariable {
    pub enum_values: Vec<String>,
    pub default: Option<String>,
    pub description: Option<String>,
    pub extensions: Option<Extensions>,
}

impl ServerVariable {
    pub fn new(default: impl Into<String>) -> Self {
        Self {
            default: Some(default.into()),
            ..Default::default()
        }
    }

    pub fn enum_values(mut self, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.enum_values = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Marshal for ServerVariable {
    fn marshal(&self) -> Value {
        let mut object = ObjectWriter::new(self.export_merged(4));
        object.omittable("enum", &self.enum_values);
        object.omittable("default", &self.default);
        object.omittable("description", &self.description);
        object.finish()
    }
}

crate::builder_macros::extensible!(Server, ServerVariable);

/// An ordered list of servers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Servers(pub Vec<Server>);

impl Servers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, server: Server) {
        self.0.push(server);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Server> {
        self.0.iter()
    }
}

impl FromIterator<Server> for Servers {
    fn from_iter<I: IntoIterator<Item = Server>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Marshal for Servers {
    fn marshal(&self) -> Value {
        self.0.marshal()
    }
}

impl Omit for Servers {
    fn omit(&self) -> bool {
        self.is_empty()
    }
}

crate::builder_macros::serialize_via_marshal!(Server, ServerVariable, Servers);

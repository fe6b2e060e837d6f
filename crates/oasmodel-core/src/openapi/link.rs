//! Link entity.

use serde_json::Value;

use super::{
    Server,
    extensions::{Extensible, Extensions},
    map::Map,
};
use crate::marshal::{Marshal, ObjectWriter};

/// A design-time link from a response to another operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Link {
    pub operation_ref: Option<String>,
    pub operation_id: Option<String>,
    pub description: Option<String>,
    /// Parameter names to constants or runtime expressions.
    pub parameters: Map<String, Value>,
    pub server: Option<Server>,
    pub request_body: Option<Value>,
    pub extensions: Option<Extensions>,
}

impl Link {
    pub fn new() -> Self {
        Self::default()
    }

    /// Links to the operation with the given `operationId`.
    pub fn operation_id(mut self, operation_id: impl Into<String>) -> Self {
        self.operation_id = Some(operation_id.into());
        self
    }

    pub fn operation_ref(mut self, operation_ref: impl Into<String>) -> Self {
        self.operation_ref = Some(operation_ref.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn parameter(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }
}

impl Marshal for Link {
    fn marshal(&self) -> Value {
        let mut object = ObjectWriter::new(self.export_merged(6));
        object.omittable("operationRef", &self.operation_ref);
        object.omittable("operationId", &self.operation_id);
        object.omittable("description", &self.description);
        object.omittable("parameters", &self.parameters);
        object.omittable("server", &self.server);
        object.omittable("requestBody", &self.request_body);
        object.finish()
    }
}

crate::builder_macros::extensible!(Link);
crate::builder_macros::serialize_via_marshal!(Link);

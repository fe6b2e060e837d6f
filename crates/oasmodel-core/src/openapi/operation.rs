//! Operation entity.

use serde_json::Value;

use super::{
    Callback, ExternalDocs, Parameter, Parameters, RequestBody, Response, Responses,
    SecurityRequirements, Servers,
    extensions::{Extensible, Extensions},
    reference::{RefOr, Refs},
    response::DEFAULT_RESPONSE,
};
use crate::marshal::{Marshal, ObjectWriter};

/// Describes a single API operation on a path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Operation {
    pub tags: Vec<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub operation_id: Option<String>,
    pub parameters: Parameters,
    pub request_body: Option<RefOr<RequestBody>>,

    /// Required by the document format; an unset collection marshals to `{}`.
    pub responses: Option<Responses>,

    pub callbacks: Refs<Callback>,
    pub deprecated: bool,

    /// Overrides the document-level requirements. An empty list removes them.
    pub security: Option<SecurityRequirements>,

    /// Overrides the document-level servers.
    pub servers: Option<Servers>,

    pub external_docs: Option<ExternalDocs>,
    pub extensions: Option<Extensions>,
}

impl Operation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn operation_id(mut self, operation_id: impl Into<String>) -> Self {
        self.operation_id = Some(operation_id.into());
        self
    }

    pub fn parameter(mut self, parameter: impl Into<RefOr<Parameter>>) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn request_body(mut self, request_body: impl Into<RefOr<RequestBody>>) -> Self {
        self.request_body = Some(request_body.into());
        self
    }

    pub fn responses(mut self, responses: Responses) -> Self {
        self.responses = Some(responses);
        self
    }

    /// Adds a response, see [`Operation::add_response`].
    pub fn response(mut self, status: u16, response: Response) -> Self {
        self.add_response(status, response);
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

    pub fn deprecated(mut self, deprecated: bool) -> Self {
        self.deprecated = deprecated;
        self
    }

    pub fn security(mut self, security: SecurityRequirements) -> Self {
        self.security = Some(security);
        self
    }

    pub fn servers(mut self, servers: Servers) -> Self {
        self.servers = Some(servers);
        self
    }

    pub fn external_docs(mut self, external_docs: ExternalDocs) -> Self {
        self.external_docs = Some(external_docs);
        self
    }

    /// Appends an inline parameter.
    pub fn add_parameter(&mut self, parameter: Parameter) {
        self.parameters.push(parameter);
    }

    /// Stores `response` under the code `status`.
    ///
    /// Codes outside `1..=999` are stored as the `default` response. When the operation has no
    /// responses yet, the collection starts as [`Responses::catch_all`].
    pub fn add_response(&mut self, status: u16, response: Response) {
        let code = match status {
            1..=999 => status.to_string(),
            _ => DEFAULT_RESPONSE.to_owned(),
        };
        let responses = self.responses.get_or_insert_with(|| {
            tracing::trace!("creating catch-all responses");
            Responses::catch_all()
        });
        responses.set(code, RefOr::T(response));
    }
}

impl Marshal for Operation {
    fn marshal(&self) -> Value {
        let mut object = ObjectWriter::new(self.export_merged(12));
        object.omittable("tags", &self.tags);
        object.omittable("summary", &self.summary);
        object.omittable("description", &self.description);
        object.omittable("operationId", &self.operation_id);
        object.omittable("parameters", &self.parameters);
        object.omittable("requestBody", &self.request_body);
        match &self.responses {
            Some(responses) => object.field("responses", responses),
            None => object.field("responses", &Value::Object(serde_json::Map::new())),
        }
        object.omittable("callbacks", &self.callbacks);
        object.omittable("deprecated", &self.deprecated);
        object.omittable("security", &self.security);
        object.omittable("servers", &self.servers);
        object.omittable("externalDocs", &self.external_docs);
        object.finish()
    }
}

crate::builder_macros::extensible!(Operation);
crate::builder_macros::serialize_via_marshal!(Operation);

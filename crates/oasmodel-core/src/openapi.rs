//! OpenAPI 3.x document types and structures.
//!
//! This module provides the in-memory object model of an OpenAPI document. Every object carries
//! vendor extensions (see [`Extensible`]) and marshals itself through
//! [`Marshal`](crate::marshal::Marshal), which also backs its `serde::Serialize` implementation.

pub mod callback;
pub mod components;
pub mod discriminator;
pub mod example;
pub mod extensions;
pub mod external_docs;
pub mod info;
pub mod link;
pub mod map;
pub mod media_type;
pub mod operation;
pub mod ordered;
pub mod parameter;
pub mod path_item;
pub mod paths;
pub mod reference;
pub mod request_body;
pub mod response;
pub mod schema;
pub mod security;
pub mod server;
pub mod tag;
pub mod xml;

use serde_json::Value;

pub use self::{
    callback::Callback,
    components::Components,
    discriminator::Discriminator,
    example::Example,
    extensions::{Extensible, Extensions},
    external_docs::ExternalDocs,
    info::{Contact, Info, License},
    link::Link,
    media_type::{
        Content, Encoding, MediaType, content_with_form_data_schema, content_with_json_schema,
        content_with_schema,
    },
    operation::Operation,
    ordered::OrderedMap,
    parameter::{
        Header, Parameter, ParameterIn, Parameters, SerializationMethod, SerializationStyle,
    },
    path_item::{Method, PathItem},
    paths::{NormalizedPath, Paths, normalize_templated_path},
    reference::{Component, Ref, RefOr, Refs, RefsExt, ref_section},
    request_body::RequestBody,
    response::{DEFAULT_RESPONSE, Response, Responses},
    schema::{AdditionalProperties, Schema, SchemaFormat, SchemaType, TypeConstraint, Types},
    security::{
        OAuthFlow, OAuthFlows, SecurityRequirement, SecurityRequirements, SecurityScheme,
        SecuritySchemeType,
    },
    server::{Server, ServerVariable, Servers},
    tag::{Tag, Tags},
    xml::Xml,
};
use crate::{
    Result,
    builder_macros::{builder, set_value},
    marshal::{Marshal, ObjectWriter},
};

/// The document format version written by [`OpenApiBuilder::new`].
pub const DEFAULT_OPENAPI_VERSION: &str = "3.0.0";

builder! {
    /// Builder for [`OpenApi`] documents.
    #[derive(Debug, Clone, Default)]
    OpenApiBuilder;

    /// The root object of an OpenAPI document.
    ///
    /// `openapi`, `info` and `paths` are required and always emitted.
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct OpenApi {
        /// The version of the document format.
        pub openapi: String,

        /// Metadata about the API.
        pub info: Info,

        /// The available paths and operations.
        pub paths: Paths,

        /// Reusable component definitions.
        pub components: Option<Components>,

        /// Document-wide security requirements.
        pub security: SecurityRequirements,

        pub servers: Servers,

        pub tags: Tags,

        /// External documentation reference.
        pub external_docs: Option<ExternalDocs>,

        pub extensions: Option<Extensions>,
    }
}

impl OpenApiBuilder {
    /// Creates a builder for a document in the default format version.
    pub fn new() -> Self {
        Self {
            openapi: DEFAULT_OPENAPI_VERSION.to_owned(),
            ..Default::default()
        }
    }

    /// Returns the document metadata for in-place edits.
    pub fn info_mut(&mut self) -> &mut Info {
        &mut self.info
    }

    pub fn openapi(mut self, openapi: impl Into<String>) -> Self {
        set_value!(self openapi openapi.into())
    }

    pub fn info(mut self, info: Info) -> Self {
        set_value!(self info info)
    }

    pub fn paths(mut self, paths: Paths) -> Self {
        set_value!(self paths paths)
    }

    pub fn components(mut self, components: Components) -> Self {
        set_value!(self components Some(components))
    }

    pub fn security(mut self, security: SecurityRequirements) -> Self {
        set_value!(self security security)
    }

    pub fn servers(mut self, servers: Servers) -> Self {
        set_value!(self servers servers)
    }

    pub fn tags(mut self, tags: Tags) -> Self {
        set_value!(self tags tags)
    }

    pub fn external_docs(mut self, external_docs: ExternalDocs) -> Self {
        set_value!(self external_docs Some(external_docs))
    }
}

impl OpenApi {
    /// Creates a new document in the default format version with the given info.
    pub fn new(info: Info) -> Self {
        OpenApiBuilder::new().info(info).build()
    }

    /// Stores `operation` under `path` for the method named `method` (e.g. `"GET"`).
    ///
    /// The path item is created when missing. Fails, leaving the document untouched, when the
    /// method is not supported.
    pub fn add_operation(&mut self, path: &str, method: &str, operation: Operation) -> Result<()> {
        let method: Method = method.parse()?;
        self.paths
            .get_or_insert_with(path.to_owned(), PathItem::new)
            .set_operation_for(method, operation);
        Ok(())
    }

    pub fn add_server(&mut self, server: Server) {
        self.servers.push(server);
    }

    pub fn add_servers(&mut self, servers: impl IntoIterator<Item = Server>) {
        self.servers.0.extend(servers);
    }

    /// Encodes the document as compact JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Encodes the document as indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Marshal for OpenApi {
    fn marshal(&self) -> Value {
        let mut object = ObjectWriter::new(self.export_merged(4));
        object.field("openapi", &self.openapi);
        object.omittable("components", &self.components);
        object.field("info", &self.info);
        object.field("paths", &self.paths);
        object.omittable("security", &self.security);
        object.omittable("servers", &self.servers);
        object.omittable("tags", &self.tags);
        object.omittable("externalDocs", &self.external_docs);
        object.finish()
    }
}

crate::builder_macros::extensible!(OpenApi);
crate::builder_macros::serialize_via_marshal!(OpenApi);

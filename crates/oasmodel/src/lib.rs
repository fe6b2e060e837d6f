//! # oasmodel
//!
//! Build, mutate and deterministically serialize OpenAPI 3.x documents.
//!
//! This crate provides the main API for working with OpenAPI documents, re-exporting all types
//! from the `oasmodel-core` crate.
//!
//! ```
//! use oasmodel::{Info, OpenApi, Operation, Response, Schema};
//!
//! let mut doc = OpenApi::new(Info::new("Pets", "1.0.0"));
//! doc.add_operation(
//!     "/pets/{id}",
//!     "GET",
//!     Operation::new()
//!         .operation_id("getPet")
//!         .response(200, Response::new().description("A pet").json_schema(Schema::object())),
//! )?;
//! assert!(doc.paths.find("/pets/{petId}").is_some());
//! # Ok::<(), oasmodel::Error>(())
//! ```

#[doc(hidden)]
pub use oasmodel_core;
// Re-export the modules for access to builders and helpers
pub use oasmodel_core::{marshal, openapi, validation};
// Re-export all main types at the crate root for convenience
pub use oasmodel_core::{
    AdditionalProperties, Callback, Component, Components, Contact, Content, Discriminator,
    Encoding, Error, Example, Extensible, Extensions, ExternalDocs, Header, Info, License, Link,
    Map, Marshal, MediaType, Method, OpenApi, OpenApiBuilder, Operation, OrderedMap, Parameter,
    ParameterIn, Parameters, PathItem, Paths, PatternCache, Ref, RefOr, Refs, RefsExt,
    RequestBody, Response, Responses, Result, Schema, SchemaError, SchemaFormat, SchemaType,
    SecurityRequirement, SecurityRequirements, SecurityScheme, Server, ServerVariable, Servers,
    Tag, Tags, TypeConstraint, Types, ValidationOptions, Xml,
};

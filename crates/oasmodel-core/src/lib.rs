//! # oasmodel-core
//!
//! Core types and traits for oasmodel - an in-memory OpenAPI 3.x document model.
//!
//! This crate provides the object graph of an OpenAPI document: reference-or-inline values
//! pointing into `#/components`, vendor extensions merged into every object, insertion-ordered
//! collections for paths, responses and callbacks, and the JSON-Schema style type composition
//! of schemas. Documents marshal deterministically, so the same unmutated document always
//! encodes to the same bytes.

mod builder_macros;
pub mod error;
pub mod marshal;
pub mod openapi;
pub mod validation;

pub use error::{Error, Result};
pub use marshal::Marshal;
// Re-export main types at the crate root for convenience
pub use openapi::{
    AdditionalProperties, Callback, Component, Components, Contact, Content, Discriminator,
    Encoding, Example, Extensible, Extensions, ExternalDocs, Header, Info, License, Link,
    MediaType, Method, OpenApi, OpenApiBuilder, Operation, OrderedMap, Parameter, ParameterIn,
    Parameters, PathItem, Paths, Ref, RefOr, Refs, RefsExt, RequestBody, Response, Responses,
    Schema, SchemaFormat, SchemaType, SecurityRequirement, SecurityRequirements, SecurityScheme,
    Server, ServerVariable, Servers, Tag, Tags, TypeConstraint, Types, Xml, map::Map,
};
pub use validation::{PatternCache, SchemaError, ValidationOptions};

//! Integration tests for reference-or-inline values and component pointers.

use oasmodel::{
    Callback, Component, Example, Header, Link, Marshal, Parameter, RefOr, Refs, RefsExt,
    RequestBody, Response, Schema, SecurityScheme, openapi::ref_section,
};
use serde_json::json;

#[test]
fn component_pointer_uses_pluralized_lowercase_section() {
    //* Given
    let name = "Foo";

    //* When
    let pointers = [
        Schema::component_path(name),
        Parameter::component_path(name),
        Header::component_path(name),
        RequestBody::component_path(name),
        Response::component_path(name),
        SecurityScheme::component_path(name),
        Example::component_path(name),
        Link::component_path(name),
        Callback::component_path(name),
    ];

    //* Then
    assert_eq!(
        pointers,
        [
            "#/components/schemas/Foo",
            "#/components/parameters/Foo",
            "#/components/headers/Foo",
            "#/components/requestBodies/Foo",
            "#/components/responses/Foo",
            "#/components/securitySchemes/Foo",
            "#/components/examples/Foo",
            "#/components/links/Foo",
            "#/components/callbacks/Foo",
        ],
        "every component type should map to its components section"
    );
}

#[test]
fn ref_section_applies_irregular_plurals() {
    //* When
    let request_bodies = ref_section("RequestBody");
    let security_schemes = ref_section("SecurityScheme");
    let schemas = ref_section("Schema");

    //* Then
    assert_eq!(request_bodies, "requestBodies");
    assert_eq!(security_schemes, "securitySchemes");
    assert_eq!(schemas, "schemas");
}

#[test]
fn point_to_request_body_and_security_scheme_builds_canonical_pointers() {
    //* Given
    let mut body = RefOr::new_inline(RequestBody::new());
    let mut scheme = RefOr::new_inline(SecurityScheme::jwt());
    let mut schema = RefOr::new_inline(Schema::string());

    //* When
    body.point_to("Foo");
    scheme.point_to("Bar");
    schema.point_to("Baz");

    //* Then
    assert_eq!(body.ref_path(), Some("#/components/requestBodies/Foo"));
    assert_eq!(scheme.ref_path(), Some("#/components/securitySchemes/Bar"));
    assert_eq!(schema.ref_path(), Some("#/components/schemas/Baz"));
}

#[test]
fn marshal_pointer_emits_only_the_ref_key() {
    //* Given
    let mut schema = RefOr::new_inline(
        Schema::string()
            .description("staged default")
            .min_length(3),
    );

    //* When
    let displaced = schema.point_to("Pet");
    let json = serde_json::to_string(&schema).expect("should serialize reference");

    //* Then
    assert!(schema.is_ref(), "pointer should replace the inline value");
    assert!(displaced.is_some(), "the staged inline value should be handed back");
    insta::assert_snapshot!(json, @r##"{"$ref":"#/components/schemas/Pet"}"##);
}

#[test]
fn set_value_after_pointer_restores_the_inline_form() {
    //* Given
    let mut schema = RefOr::new_inline(Schema::string().min_length(3));
    let displaced = schema.point_to("Pet");

    //* When
    schema.set_value(displaced.expect("inline value should be displaced"));

    //* Then
    assert!(!schema.is_ref());
    assert_eq!(schema.ref_path(), None);
    assert_eq!(
        schema.marshal(),
        json!({ "type": "string", "minLength": 3 }),
        "the inline value should marshal with its own form"
    );
}

#[test]
fn point_to_on_a_pointer_displaces_nothing() {
    //* Given
    let mut response = RefOr::<Response>::component("NotFound");

    //* When
    let displaced = response.point_to("Gone");

    //* Then
    assert!(displaced.is_none());
    assert_eq!(response.ref_path(), Some("#/components/responses/Gone"));
    assert!(response.value().is_none());
}

#[test]
fn refs_store_values_and_pointers_by_name() {
    //* Given
    let mut schemas: Refs<Schema> = Refs::new();

    //* When
    schemas.add_value("Name", Schema::string());
    schemas.add_ref("Alias", "Name");

    //* Then
    assert_eq!(schemas.len(), 2);
    assert_eq!(
        schemas.get("Alias").and_then(RefOr::ref_path),
        Some("#/components/schemas/Name")
    );
    assert_eq!(
        schemas.get("Name").and_then(RefOr::value),
        Some(&Schema::string())
    );
}

//! Integration tests for whole documents: building, mutation and deterministic encoding.

use oasmodel::{
    Callback, Components, Error, Extensible, ExternalDocs, Info, License, Marshal, Method,
    OpenApi, Operation, Parameter, PathItem, RefOr, RequestBody, Response, Schema,
    SecurityRequirement, SecurityRequirements, SecurityScheme, Server, ServerVariable, Servers,
    Tag, Tags, openapi::SerializationStyle,
};
use serde_json::{Value, json};

/// Builds a document touching every top-level field.
fn build_document() -> OpenApi {
    let mut builder = OpenApi::builder()
        .components(
            Components::new()
                .schema(
                    "Pet",
                    Schema::object()
                        .property("id", Schema::int64())
                        .property("name", Schema::string())
                        .required(["id", "name"]),
                )
                .security_scheme("bearer", SecurityScheme::jwt()),
        )
        .security(
            SecurityRequirements::new()
                .with(SecurityRequirement::new().authenticate("bearer", Vec::<String>::new())),
        )
        .servers(Servers::from_iter([Server::new("https://{env}.example.com")
            .variable("env", ServerVariable::new("api").enum_values(["api", "staging"]))]))
        .tags(Tags::from_iter([Tag::new("pets").description("Pet operations")]))
        .external_docs(ExternalDocs::new("https://example.com/docs"));
    *builder.info_mut() = Info::new("Petstore", "1.0.0").license(License::new("MIT"));

    let mut doc = builder.build();
    doc.set_extension("x-generator", "oasmodel");
    doc.add_operation(
        "/pets",
        "POST",
        Operation::new()
            .operation_id("createPet")
            .tag("pets")
            .request_body(
                RequestBody::new()
                    .required(true)
                    .json_schema(RefOr::<Schema>::component("Pet")),
            )
            .response(201, Response::new().description("Created")),
    )
    .expect("should add POST /pets");
    doc.add_operation(
        "/pets/{id}",
        "GET",
        Operation::new()
            .operation_id("getPet")
            .parameter(Parameter::path("id").schema(Schema::int64()))
            .response(
                200,
                Response::new()
                    .description("A pet")
                    .json_schema(RefOr::<Schema>::component("Pet")),
            ),
    )
    .expect("should add GET /pets/{id}");
    doc
}

#[test]
fn marshal_minimal_document_always_emits_required_fields() {
    //* Given
    let doc = OpenApi::new(Info::new("Empty", "0.1.0"));

    //* When
    let json = doc.to_json().expect("should encode document");

    //* Then
    insta::assert_snapshot!(
        json,
        @r#"{"openapi":"3.0.0","info":{"title":"Empty","version":"0.1.0"},"paths":{}}"#
    );
}

#[test]
fn marshal_document_writes_top_level_fields_in_stable_order() {
    //* Given
    let doc = build_document();

    //* When
    let value = doc.marshal();

    //* Then
    let keys: Vec<&str> = value
        .as_object()
        .expect("document should marshal to an object")
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(
        keys,
        [
            "x-generator",
            "openapi",
            "components",
            "info",
            "paths",
            "security",
            "servers",
            "tags",
            "externalDocs",
        ]
    );
}

#[test]
fn marshal_document_renders_operations_and_references() {
    //* Given
    let doc = build_document();

    //* When
    let value = doc.marshal();

    //* Then
    assert_eq!(
        value.pointer("/paths/~1pets~1{id}/get/parameters/0"),
        Some(&json!({
            "name": "id",
            "in": "path",
            "required": true,
            "schema": { "type": "integer", "format": "int64" }
        }))
    );
    assert_eq!(
        value.pointer("/paths/~1pets/post/requestBody"),
        Some(&json!({
            "required": true,
            "content": {
                "application/json": { "schema": { "$ref": "#/components/schemas/Pet" } }
            }
        }))
    );
    assert_eq!(
        value.pointer("/paths/~1pets/post/responses"),
        Some(&json!({
            "default": { "description": "" },
            "201": { "description": "Created" }
        }))
    );
    assert_eq!(value.pointer("/security"), Some(&json!([{ "bearer": [] }])));
    assert_eq!(
        value.pointer("/components/securitySchemes/bearer"),
        Some(&json!({ "type": "http", "scheme": "bearer", "bearerFormat": "JWT" }))
    );
}

#[test]
fn encode_unmutated_document_twice_yields_identical_bytes() {
    //* Given
    let doc = build_document();

    //* When
    let first = doc.to_json().expect("should encode document");
    let second = doc.to_json().expect("should encode document again");

    //* Then
    assert_eq!(first, second);
}

#[test]
fn encode_pretty_json_holds_same_tree_as_compact_json() {
    //* Given
    let doc = build_document();

    //* When
    let pretty = doc.to_json_pretty().expect("should encode pretty document");

    //* Then
    let parsed: Value = serde_json::from_str(&pretty).expect("should parse pretty document");
    assert_eq!(parsed, doc.marshal());
    assert!(pretty.contains('\n'));
}

#[test]
fn encode_yaml_holds_same_tree_as_json() {
    //* Given
    let doc = build_document();

    //* When
    let yaml = serde_norway::to_string(&doc).expect("should encode document as YAML");

    //* Then
    let parsed: Value = serde_norway::from_str(&yaml).expect("should parse YAML document");
    assert_eq!(parsed, doc.marshal());
}

#[test]
fn add_operation_to_existing_path_reuses_path_item() {
    //* Given
    let mut doc = build_document();

    //* When
    doc.add_operation("/pets", "GET", Operation::new().operation_id("listPets"))
        .expect("should add GET /pets");

    //* Then
    assert_eq!(doc.paths.len(), 2);
    let item = doc.paths.value("/pets").expect("path should exist");
    assert_eq!(item.operations().len(), 2);
}

#[test]
fn add_operation_with_unsupported_method_leaves_document_untouched() {
    //* Given
    let mut doc = OpenApi::new(Info::new("Pets", "1.0.0"));

    //* When
    let result = doc.add_operation("/pets", "FETCH", Operation::new());

    //* Then
    assert!(matches!(result, Err(Error::UnsupportedMethod(method)) if method == "FETCH"));
    assert!(doc.paths.is_empty(), "no path item should be created");
}

#[test]
fn add_servers_appends_in_order() {
    //* Given
    let mut doc = OpenApi::new(Info::new("Pets", "1.0.0"));

    //* When
    doc.add_server(Server::new("https://a.example.com"));
    doc.add_servers([
        Server::new("https://b.example.com"),
        Server::new("https://c.example.com").description("third"),
    ]);

    //* Then
    let urls: Vec<&str> = doc.servers.iter().map(|server| server.url.as_str()).collect();
    assert_eq!(
        urls,
        [
            "https://a.example.com",
            "https://b.example.com",
            "https://c.example.com"
        ]
    );
}

#[test]
fn tags_get_finds_tag_by_name() {
    //* Given
    let doc = build_document();

    //* When
    let tag = doc.tags.get("pets");

    //* Then
    assert_eq!(
        tag.and_then(|tag| tag.description.as_deref()),
        Some("Pet operations")
    );
    assert!(doc.tags.get("users").is_none());
}

#[test]
fn operation_callback_marshals_under_its_name() {
    //* Given
    let callback = Callback::new().with_callback(
        "{$request.body#/url}",
        PathItem::new().with_operation(Method::Post, Operation::new().operation_id("notify")),
    );

    //* When
    let value = Operation::new().callback("onEvent", callback).marshal();

    //* Then
    assert_eq!(
        value["callbacks"]["onEvent"]["{$request.body#/url}"]["post"]["operationId"],
        json!("notify")
    );
}

#[test]
fn parameter_serialization_method_defaults_by_location() {
    //* When
    let query = Parameter::query("q").serialization_method();
    let path = Parameter::path("id").serialization_method();
    let explicit = Parameter::query("ids")
        .style(SerializationStyle::PipeDelimited)
        .serialization_method();

    //* Then
    assert_eq!((query.style, query.explode), (SerializationStyle::Form, true));
    assert_eq!((path.style, path.explode), (SerializationStyle::Simple, false));
    assert_eq!(
        (explicit.style, explicit.explode),
        (SerializationStyle::PipeDelimited, false)
    );
}

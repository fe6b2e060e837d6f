//! Integration tests for status code resolution over an operation's responses.

use oasmodel::{Marshal, Operation, RefOr, Response, Responses};
use serde_json::json;

/// Returns the description of an inline response.
fn description(response: Option<&RefOr<Response>>) -> Option<&str> {
    response?.value()?.description.as_deref()
}

/// Builds responses declaring `404` exactly and the `4XX` range.
fn build_responses() -> Responses {
    Responses::new()
        .with_status(404, Response::new().description("R1"))
        .with_name("4XX", Response::new().description("R2"))
}

#[test]
fn status_with_exact_key_returns_exact_response() {
    //* Given
    let responses = build_responses();

    //* When
    let response = responses.status(404);

    //* Then
    assert_eq!(description(response), Some("R1"));
}

#[test]
fn status_without_exact_key_falls_back_to_range_wildcard() {
    //* Given
    let responses = build_responses();

    //* When
    let response = responses.status(403);

    //* Then
    assert_eq!(description(response), Some("R2"));
}

#[test]
fn status_outside_declared_ranges_returns_none() {
    //* Given
    let responses = build_responses();

    //* Then
    assert!(responses.status(399).is_none());
    assert!(responses.status(500).is_none());
}

#[test]
fn status_without_status_class_is_never_resolved_by_wildcard() {
    //* Given
    let responses = Responses::new()
        .with_name("9XX", Response::new().description("nine"))
        .with_name("0XX", Response::new().description("zero"));

    //* Then
    assert!(responses.status(999).is_none());
    assert!(responses.status(99).is_none());
}

#[test]
fn status_never_returns_the_default_response() {
    //* Given
    let responses = Responses::catch_all();

    //* When
    let response = responses.status(500);

    //* Then
    assert!(response.is_none());
    assert_eq!(description(responses.default_response()), Some(""));
}

#[test]
fn status_resolves_pointer_responses() {
    //* Given
    let responses =
        Responses::new().with_status(401, RefOr::<Response>::component("Unauthorized"));

    //* When
    let response = responses.status(401);

    //* Then
    assert_eq!(
        response.and_then(RefOr::ref_path),
        Some("#/components/responses/Unauthorized")
    );
}

#[test]
fn add_response_on_fresh_operation_starts_from_catch_all() {
    //* Given
    let mut operation = Operation::new();

    //* When
    operation.add_response(200, Response::new().description("ok"));

    //* Then
    let responses = operation.responses.as_ref().expect("responses should exist");
    assert_eq!(responses.keys().collect::<Vec<_>>(), ["default", "200"]);
    assert_eq!(description(responses.status(200)), Some("ok"));
}

#[test]
fn add_response_with_out_of_range_status_replaces_default() {
    //* Given
    let mut operation = Operation::new();

    //* When
    operation.add_response(0, Response::new().description("zero"));
    operation.add_response(1000, Response::new().description("fallback"));

    //* Then
    let responses = operation.responses.as_ref().expect("responses should exist");
    assert_eq!(responses.len(), 1);
    assert_eq!(description(responses.default_response()), Some("fallback"));
}

#[test]
fn marshal_operation_without_responses_emits_empty_object() {
    //* Given
    let operation = Operation::new();

    //* When
    let value = operation.marshal();

    //* Then
    assert_eq!(value, json!({ "responses": {} }));
}

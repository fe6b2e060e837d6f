//! Integration tests for path templates, path lookup and path item operations.

use oasmodel::{
    Error, Marshal, Method, Operation, PathItem, Paths, openapi::normalize_templated_path,
};
use serde_json::json;

#[test]
fn normalize_strips_placeholder_names() {
    //* When
    let normalized = normalize_templated_path("/users/{id}/posts/{postId}");

    //* Then
    assert_eq!(normalized.template, "/users/{}/posts/{}");
    assert_eq!(normalized.count, 2);
    assert_eq!(normalized.names.iter().collect::<Vec<_>>(), ["id", "postId"]);
}

#[test]
fn normalize_path_without_placeholders_is_unchanged() {
    //* When
    let normalized = normalize_templated_path("/static/file");

    //* Then
    assert_eq!(normalized.template, "/static/file");
    assert_eq!(normalized.count, 0);
    assert!(normalized.names.is_empty());
}

#[test]
fn normalize_counts_repeated_names_but_stores_them_once() {
    //* When
    let normalized = normalize_templated_path("/a/{id}/b/{id}");

    //* Then
    assert_eq!(normalized.template, "/a/{}/b/{}");
    assert_eq!(normalized.count, 2);
    assert_eq!(normalized.names.len(), 1);
}

#[test]
fn normalize_keeps_wildcard_marker() {
    //* When
    let normalized = normalize_templated_path("/files/{path*}");

    //* Then
    assert_eq!(normalized.template, "/files/{*}");
    assert!(normalized.names.contains("path"));
}

#[test]
fn normalize_unterminated_placeholder_does_not_fail() {
    //* When
    let normalized = normalize_templated_path("/a/{id");

    //* Then
    assert_eq!(normalized.template, "/a/{");
    assert_eq!(normalized.count, 1);
    assert!(normalized.names.is_empty(), "the partial name should be dropped");
}

#[test]
fn find_matches_exact_path_first() {
    //* Given
    let paths = Paths::new()
        .with_path("/users/{id}", PathItem::new().summary("templated"))
        .with_path("/users/{userId}", PathItem::new().summary("exact"));

    //* When
    let item = paths.find("/users/{userId}");

    //* Then
    assert_eq!(item.and_then(|item| item.summary.as_deref()), Some("exact"));
}

#[test]
fn find_falls_back_to_template_with_other_placeholder_names() {
    //* Given
    let paths = Paths::new()
        .with_path("/pets", PathItem::new().summary("list"))
        .with_path("/pets/{id}", PathItem::new().summary("single"));

    //* When
    let item = paths.find("/pets/{petId}");
    let missing = paths.find("/pets/{petId}/toys");

    //* Then
    assert_eq!(item.and_then(|item| item.summary.as_deref()), Some("single"));
    assert!(missing.is_none());
}

#[test]
fn parse_method_is_case_sensitive() {
    //* When
    let get = "GET".parse::<Method>();
    let lower = "get".parse::<Method>();

    //* Then
    assert_eq!(get.expect("should parse upper-case method"), Method::Get);
    assert!(matches!(lower, Err(Error::UnsupportedMethod(method)) if method == "get"));
}

#[test]
fn set_operation_with_unknown_method_fails_without_changes() {
    //* Given
    let mut item = PathItem::new();

    //* When
    let result = item.set_operation("FETCH", Operation::new());

    //* Then
    let err = result.expect_err("unknown method should be rejected");
    assert_eq!(err.to_string(), r#"unsupported HTTP method "FETCH""#);
    assert!(item.operations().is_empty());
}

#[test]
fn operations_are_ordered_by_method() {
    //* Given
    let mut item = PathItem::new();
    item.set_operation("POST", Operation::new().operation_id("create"))
        .expect("should set POST");
    item.set_operation("DELETE", Operation::new().operation_id("remove"))
        .expect("should set DELETE");
    item.set_operation("GET", Operation::new().operation_id("read"))
        .expect("should set GET");

    //* When
    let methods = item.operations().into_keys().collect::<Vec<_>>();

    //* Then
    assert_eq!(methods, [Method::Delete, Method::Get, Method::Post]);
    assert_eq!(
        item.get_operation("GET")
            .expect("GET should be supported")
            .and_then(|operation| operation.operation_id.as_deref()),
        Some("read")
    );
}

#[test]
fn marshal_path_item_writes_operations_under_lower_case_keys() {
    //* Given
    let item = PathItem::new()
        .summary("Pets")
        .with_operation(Method::Get, Operation::new().operation_id("listPets"));

    //* When
    let value = item.marshal();

    //* Then
    assert_eq!(
        value,
        json!({
            "summary": "Pets",
            "get": { "operationId": "listPets", "responses": {} }
        })
    );
}

#[test]
fn marshal_path_item_with_reference_emits_only_the_reference() {
    //* Given
    let mut item = PathItem::new()
        .summary("ignored")
        .with_operation(Method::Get, Operation::new());
    item.ref_path = Some("#/paths/~1pets".to_owned());

    //* When
    let json = serde_json::to_string(&item).expect("should serialize path item");

    //* Then
    insta::assert_snapshot!(json, @r##"{"$ref":"#/paths/~1pets"}"##);
}

//! Integration tests for vendor extensions carried by document objects.

use oasmodel::{Extensible, Info, Marshal, Operation, Paths, Schema};
use serde_json::json;

#[test]
fn set_extension_on_fresh_object_allocates_storage() {
    //* Given
    let mut info = Info::new("Pets", "1.0.0");
    assert!(info.extensions().is_none(), "fresh object should carry no extensions");

    //* When
    info.set_extension("x-logo", "logo.png");

    //* Then
    assert_eq!(info.extension("x-logo"), Some(&json!("logo.png")));
    assert_eq!(info.extensions().map(|ext| ext.len()), Some(1));
}

#[test]
fn set_extension_overwrites_existing_key() {
    //* Given
    let mut operation = Operation::new().with_extension("x-rate-limit", 10);

    //* When
    operation.set_extension("x-rate-limit", 100);

    //* Then
    assert_eq!(operation.extension("x-rate-limit"), Some(&json!(100)));
    assert_eq!(operation.extensions().map(|ext| ext.len()), Some(1));
}

#[test]
fn remove_extension_drops_only_the_given_key() {
    //* Given
    let mut schema = Schema::string()
        .with_extension("x-a", 1)
        .with_extension("x-b", 2);

    //* When
    schema.remove_extension("x-a");
    schema.remove_extension("x-missing");

    //* Then
    assert_eq!(schema.extension("x-a"), None);
    assert_eq!(schema.extension("x-b"), Some(&json!(2)));
}

#[test]
fn remove_extension_on_object_without_extensions_is_noop() {
    //* Given
    let mut schema = Schema::string();

    //* When
    schema.remove_extension("x-a");

    //* Then
    assert!(schema.extensions().is_none());
    assert_eq!(schema.marshal(), json!({ "type": "string" }));
}

#[test]
fn export_merged_copies_without_mutating_stored_extensions() {
    //* Given
    let info = Info::new("Pets", "1.0.0").with_extension("x-a", true);

    //* When
    let mut merged = info.export_merged(4);
    merged.insert("x-added".to_owned(), json!(1));

    //* Then
    assert_eq!(merged.len(), 2);
    assert_eq!(info.extensions().map(|ext| ext.len()), Some(1));
    assert_eq!(info.extension("x-added"), None);
}

#[test]
fn marshal_merges_extensions_before_typed_fields() {
    //* Given
    let info = Info::new("Pets", "1.0.0").with_extension("x-audience", "internal");

    //* When
    let value = info.marshal();

    //* Then
    let keys: Vec<&str> = value
        .as_object()
        .expect("info should marshal to an object")
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, ["x-audience", "title", "version"]);
}

#[test]
fn marshal_with_colliding_extension_key_keeps_typed_field() {
    //* Given
    let info = Info::new("Pets", "1.0.0").with_extension("title", "shadowed");

    //* When
    let value = info.marshal();

    //* Then
    assert_eq!(value, json!({ "title": "Pets", "version": "1.0.0" }));
    assert_eq!(
        info.extension("title"),
        Some(&json!("shadowed")),
        "the stored extension should survive marshaling"
    );
}

#[test]
fn marshal_collection_extensions_are_not_counted_as_entries() {
    //* Given
    let mut paths = Paths::new();
    paths.set_extension("x-internal", true);

    //* When
    let json = serde_json::to_string(&paths).expect("should serialize paths");

    //* Then
    assert_eq!(paths.len(), 0);
    insta::assert_snapshot!(json, @r#"{"x-internal":true}"#);
}

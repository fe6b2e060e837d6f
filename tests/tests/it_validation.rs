//! Integration tests for the validation error shape, options and the shared pattern cache.

use std::{error::Error as _, sync::Arc, thread};

use oasmodel::{PatternCache, Schema, SchemaError, ValidationOptions, validation};
use serde_json::json;

#[test]
fn display_with_path_prefixes_root_to_leaf_pointer() {
    //* Given
    let mut err = SchemaError::new("abc", &Schema::string(), "pattern")
        .reason("bad value")
        .details(false);

    //* When
    err.prepend_path("name");
    err.prepend_path("0");
    err.prepend_path("users");

    //* Then
    assert_eq!(err.reverse_path(), ["name", "0", "users"]);
    assert_eq!(err.json_pointer(), ["users", "0", "name"]);
    assert_eq!(err.to_string(), r#"Error at "/users/0/name": bad value"#);
}

#[test]
fn display_without_reason_names_failing_keyword() {
    //* Given
    let err = SchemaError::new(3, &Schema::string(), "minLength").details(false);

    //* When
    let message = err.to_string();

    //* Then
    assert_eq!(message, r#"Doesn't match schema "minLength""#);
}

#[test]
fn display_with_details_dumps_schema_and_value() {
    //* Given
    let err = SchemaError::new("abc", &Schema::string(), "pattern");

    //* When
    let message = err.to_string();

    //* Then
    assert_eq!(
        message,
        "Doesn't match schema \"pattern\"\n\
         Schema:\n  {\n    \"type\": \"string\"\n  }\n\n\
         Value:\n  \"abc\"\n"
    );
}

#[test]
fn display_with_origin_renders_origin_only() {
    //* Given
    let origin = std::io::Error::other("disk on fire");
    let mut err = SchemaError::new("abc", &Schema::string(), "pattern")
        .reason("ignored")
        .origin(origin);

    //* When
    err.prepend_path("file");

    //* Then
    assert_eq!(err.to_string(), r#"Error at "/file": disk on fire"#);
    assert!(err.source().is_some(), "origin should be exposed as source");
}

#[test]
fn display_with_custom_message_replaces_default_unless_empty() {
    //* Given
    let custom = SchemaError::new("abc", &Schema::string(), "pattern")
        .customize_message(Arc::new(|err: &SchemaError| {
            format!("custom {}", err.schema_field)
        }));
    let empty = SchemaError::new("abc", &Schema::string(), "pattern")
        .details(false)
        .customize_message(Arc::new(|_: &SchemaError| String::new()));

    //* Then
    assert_eq!(custom.to_string(), "custom pattern");
    assert_eq!(empty.to_string(), r#"Doesn't match schema "pattern""#);
}

#[test]
fn check_pattern_accepts_matching_and_rejects_other_strings() {
    //* Given
    let options = ValidationOptions::new().without_error_details();
    let schema = Schema::string().pattern("^[a-z]+$");

    //* When
    let matching = options.check_pattern(&schema, "abc");
    let mismatching = options.check_pattern(&schema, "ABC");

    //* Then
    assert!(matching.is_ok());
    let err = mismatching.expect_err("upper-case value should not match");
    assert_eq!(err.schema_field, "pattern");
    assert_eq!(err.value, json!("ABC"));
    assert_eq!(
        err.to_string(),
        r#"string doesn't match the regular expression "^[a-z]+$""#
    );
}

#[test]
fn check_pattern_without_pattern_accepts_anything() {
    //* Given
    let options = ValidationOptions::new();

    //* When
    let result = options.check_pattern(&Schema::string(), "anything");

    //* Then
    assert!(result.is_ok());
    assert!(options.patterns().is_empty(), "nothing should be compiled");
}

#[test]
fn check_pattern_with_invalid_pattern_reports_compile_error_as_origin() {
    //* Given
    let options = ValidationOptions::new();
    let schema = Schema::string().pattern("(");

    //* When
    let result = options.check_pattern(&schema, "abc");

    //* Then
    let err = result.expect_err("invalid pattern should fail");
    assert!(err.origin.is_some());
    assert_eq!(err.to_string(), r#"invalid regular expression "(""#);
    assert!(options.patterns().is_empty(), "failed patterns are not cached");
}

#[test]
fn cloned_options_share_pattern_cache() {
    //* Given
    let options = ValidationOptions::new();
    let cloned = options.clone();
    let schema = Schema::string().pattern("^x");

    //* When
    cloned
        .check_pattern(&schema, "xyz")
        .expect("value should match");

    //* Then
    assert_eq!(options.patterns().len(), 1);
}

#[test]
fn pattern_cache_concurrent_compiles_share_one_entry() {
    //* Given
    let cache = PatternCache::new();

    //* When
    let compiled = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| cache.get_or_compile(r"^\d{3}-\d{4}$")))
            .collect();
        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .expect("thread should not panic")
                    .expect("pattern should compile")
            })
            .collect::<Vec<_>>()
    });

    //* Then
    assert_eq!(cache.len(), 1);
    assert!(compiled.iter().all(|regex| regex.is_match("555-1234")));
    assert!(
        compiled.windows(2).all(|pair| Arc::ptr_eq(&pair[0], &pair[1])),
        "every caller should receive the cached instance"
    );
}

#[test]
fn pattern_cache_clear_drops_entries() {
    //* Given
    let cache = PatternCache::new();
    cache.get_or_compile("^a").expect("pattern should compile");

    //* When
    cache.clear();

    //* Then
    assert!(cache.is_empty());
}

#[test]
fn check_unique_items_rejects_duplicates_only_when_required() {
    //* Given
    let options = ValidationOptions::new().without_error_details();
    let unique = Schema::array().unique_items(true);
    let items = [json!({ "a": 1 }), json!(2), json!({ "a": 1 })];

    //* When
    let result = options.check_unique_items(&unique, &items);
    let unconstrained = options.check_unique_items(&Schema::array(), &items);

    //* Then
    let err = result.expect_err("duplicate items should be rejected");
    assert_eq!(err.schema_field, "uniqueItems");
    assert_eq!(err.value, json!([{ "a": 1 }, 2, { "a": 1 }]));
    assert_eq!(err.to_string(), "duplicate items found");
    assert!(unconstrained.is_ok());
}

#[test]
fn check_unique_items_uses_configured_checker() {
    //* Given
    let options = ValidationOptions::new().unique_items_checker(|_| true);
    let schema = Schema::array().unique_items(true);

    //* When
    let result = options.check_unique_items(&schema, &[json!(1), json!(1)]);

    //* Then
    assert!(result.is_ok());
}

#[test]
fn unique_items_default_checker_compares_values_structurally() {
    //* Then
    assert!(validation::is_slice_of_unique_items(&[json!(1), json!("1")]));
    assert!(!validation::is_slice_of_unique_items(&[json!([1, 2]), json!([1, 2])]));
    assert!(validation::is_slice_of_unique_items(&[json!([1, 2]), json!([2, 1])]));
    assert!(!validation::is_slice_of_unique_items(&[json!(1), json!(1.0)]));
    assert!(validation::is_slice_of_unique_items(&[]));
}

#[test]
fn unique_items_default_checker_ignores_object_key_order() {
    //* Given
    let items = [
        json!({ "a": 1, "b": { "x": true, "y": null } }),
        json!({ "b": { "y": null, "x": true }, "a": 1 }),
    ];

    //* When
    let unique = validation::is_slice_of_unique_items(&items);
    let result = ValidationOptions::new()
        .without_error_details()
        .check_unique_items(&Schema::array().unique_items(true), &items);

    //* Then
    assert!(!unique, "objects with swapped keys should be duplicates");
    let err = result.expect_err("swapped-key duplicates should be rejected");
    assert_eq!(err.schema_field, "uniqueItems");
}

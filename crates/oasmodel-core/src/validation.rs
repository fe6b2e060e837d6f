//! Validation support: the error shape, per-validator options and the shared pattern cache.
//!
//! This crate does not validate instances against schemas. It defines what a validation
//! failure looks like ([`SchemaError`]) and the pieces a validator needs to produce one for
//! the `pattern` and `uniqueItems` keywords.

mod pattern_cache;
mod schema_error;

use std::{collections::HashSet, fmt, sync::Arc};

use serde_json::Value;

pub use self::{
    pattern_cache::PatternCache,
    schema_error::{CustomizeMessage, SchemaError},
};
use crate::openapi::Schema;

/// Returns whether `items` holds no two equal JSON values.
///
/// Object key order is ignored and numbers compare by their `f64` value, so `1` and `1.0`
/// are duplicates.
pub fn is_slice_of_unique_items(items: &[Value]) -> bool {
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().all(|item| {
        let mut key = String::new();
        write_canonical(item, &mut key);
        seen.insert(key)
    })
}

/// Writes an encoding of `value` with sorted object keys and normalized numbers.
fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => match n.as_f64() {
            Some(f) => out.push_str(&f.to_string()),
            None => out.push_str(&n.to_string()),
        },
        Value::String(s) => out.push_str(&format!("{s:?}")),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        Value::Object(object) => {
            let mut entries: Vec<_> = object.iter().collect();
            entries.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
            out.push('{');
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&format!("{key:?}:"));
                write_canonical(item, out);
            }
            out.push('}');
        }
    }
}

/// Configuration passed to validation entry points.
///
/// Cloning the options shares the pattern cache.
#[derive(Clone)]
pub struct ValidationOptions {
    /// Whether errors render the schema and value dumps.
    pub error_details: bool,

    /// Predicate deciding whether an array satisfies `uniqueItems`.
    pub unique_items_checker: fn(&[Value]) -> bool,

    patterns: Arc<PatternCache>,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            error_details: true,
            unique_items_checker: is_slice_of_unique_items,
            patterns: Arc::new(PatternCache::new()),
        }
    }
}

impl fmt::Debug for ValidationOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationOptions")
            .field("error_details", &self.error_details)
            .field("patterns", &self.patterns.len())
            .finish_non_exhaustive()
    }
}

impl ValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hides the schema and value dumps from error messages.
    pub fn without_error_details(mut self) -> Self {
        self.error_details = false;
        self
    }

    pub fn unique_items_checker(mut self, checker: fn(&[Value]) -> bool) -> Self {
        self.unique_items_checker = checker;
        self
    }

    /// Uses `patterns` instead of a private cache.
    pub fn pattern_cache(mut self, patterns: Arc<PatternCache>) -> Self {
        self.patterns = patterns;
        self
    }

    pub fn patterns(&self) -> &Arc<PatternCache> {
        &self.patterns
    }

    /// Creates an error for `value` failing the keyword `schema_field` of `schema`.
    pub fn schema_error(
        &self,
        value: impl Into<Value>,
        schema: &Schema,
        schema_field: impl Into<String>,
    ) -> SchemaError {
        SchemaError::new(value, schema, schema_field).details(self.error_details)
    }

    /// Checks `value` against the `pattern` keyword of `schema`.
    ///
    /// A pattern that does not compile fails with the compilation error as origin.
    pub fn check_pattern(&self, schema: &Schema, value: &str) -> Result<(), SchemaError> {
        let Some(pattern) = schema.pattern.as_deref() else {
            return Ok(());
        };

        let regex = self
            .patterns
            .get_or_compile(pattern)
            .map_err(|err| self.schema_error(value, schema, "pattern").origin(err))?;

        if regex.is_match(value) {
            return Ok(());
        }
        Err(self
            .schema_error(value, schema, "pattern")
            .reason(format!("string doesn't match the regular expression {pattern:?}")))
    }

    /// Checks `items` against the `uniqueItems` keyword of `schema`.
    pub fn check_unique_items(&self, schema: &Schema, items: &[Value]) -> Result<(), SchemaError> {
        if !schema.unique_items || (self.unique_items_checker)(items) {
            return Ok(());
        }
        Err(self
            .schema_error(items.to_vec(), schema, "uniqueItems")
            .reason("duplicate items found"))
    }
}

//! Structured validation failure.

use std::{error::Error as StdError, fmt, sync::Arc};

use serde_json::Value;

use crate::openapi::Schema;

/// Replaces the rendered message of a [`SchemaError`]. An empty string keeps the default.
pub type CustomizeMessage = Arc<dyn Fn(&SchemaError) -> String + Send + Sync>;

/// A value failing one keyword of a schema.
///
/// The path to the value is accumulated leaf first: every nesting level calls
/// [`SchemaError::prepend_path`] with its own segment while the error travels up.
pub struct SchemaError {
    /// The value that failed validation.
    pub value: Value,

    reverse_path: Vec<String>,

    /// The schema that failed validation.
    pub schema: Box<Schema>,

    /// The keyword of the schema that failed, e.g. `pattern`.
    pub schema_field: String,

    /// Human-readable message. Never includes the value itself.
    pub reason: Option<String>,

    /// The underlying error, if any.
    pub origin: Option<Box<dyn StdError + Send + Sync>>,

    customize_message: Option<CustomizeMessage>,
    details: bool,
}

impl SchemaError {
    pub fn new(value: impl Into<Value>, schema: &Schema, schema_field: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            reverse_path: Vec::new(),
            schema: Box::new(schema.clone()),
            schema_field: schema_field.into(),
            reason: None,
            origin: None,
            customize_message: None,
            details: true,
        }
    }

    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub fn origin(mut self, origin: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn customize_message(mut self, customize: CustomizeMessage) -> Self {
        self.customize_message = Some(customize);
        self
    }

    /// Whether the message renders the schema and value dumps.
    pub fn details(mut self, details: bool) -> Self {
        self.details = details;
        self
    }

    /// Adds the segment of the enclosing level, e.g. an object key or an array index.
    pub fn prepend_path(&mut self, segment: impl Into<String>) {
        self.reverse_path.push(segment.into());
    }

    /// The path segments from the leaf to the root.
    pub fn reverse_path(&self) -> &[String] {
        &self.reverse_path
    }

    /// The path segments from the root to the leaf.
    pub fn json_pointer(&self) -> Vec<String> {
        self.reverse_path.iter().rev().cloned().collect()
    }
}

fn write_dump(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    dump: &impl serde::Serialize,
) -> fmt::Result {
    let json = serde_json::to_string_pretty(dump).map_err(|_| fmt::Error)?;
    write!(f, "\n{title}:\n  {}\n", json.replace('\n', "\n  "))
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(customize) = &self.customize_message {
            let message = customize(self);
            if !message.is_empty() {
                return f.write_str(&message);
            }
        }

        if !self.reverse_path.is_empty() {
            f.write_str("Error at \"")?;
            for segment in self.reverse_path.iter().rev() {
                write!(f, "/{segment}")?;
            }
            f.write_str("\": ")?;
        }

        if let Some(origin) = &self.origin {
            return write!(f, "{origin}");
        }

        match self.reason.as_deref() {
            Some(reason) if !reason.is_empty() => f.write_str(reason)?,
            _ => write!(f, "Doesn't match schema \"{}\"", self.schema_field)?,
        }

        if self.details {
            write_dump(f, "Schema", &*self.schema)?;
            write_dump(f, "Value", &self.value)?;
        }
        Ok(())
    }
}

impl fmt::Debug for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaError")
            .field("value", &self.value)
            .field("reverse_path", &self.reverse_path)
            .field("schema_field", &self.schema_field)
            .field("reason", &self.reason)
            .field("origin", &self.origin)
            .finish_non_exhaustive()
    }
}

impl StdError for SchemaError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.origin
            .as_deref()
            .map(|origin| origin as &(dyn StdError + 'static))
    }
}

//! Schema types and composition.

use std::fmt;

use serde_json::Value;

use super::{
    Discriminator, ExternalDocs, Xml, extensions::Extensions, map::Map, reference::RefOr,
};
use crate::{
    marshal::{Marshal, ObjectWriter},
    openapi::Extensible,
};

/// Schema type enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SchemaType {
    /// Array type.
    Array,
    /// Boolean type.
    Boolean,
    /// Integer type.
    Integer,
    /// Number type (floating point).
    Number,
    /// Object type.
    Object,
    /// String type.
    String,
    /// Null type.
    Null,
}

impl SchemaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaType::Array => "array",
            SchemaType::Boolean => "boolean",
            SchemaType::Integer => "integer",
            SchemaType::Number => "number",
            SchemaType::Object => "object",
            SchemaType::String => "string",
            SchemaType::Null => "null",
        }
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Marshal for SchemaType {
    fn marshal(&self) -> Value {
        Value::String(self.as_str().to_owned())
    }
}

/// An ordered set of schema types.
///
/// Inserting a type already in the set keeps the original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Types(Vec<SchemaType>);

impl Types {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the set `{schema_type}`.
    pub fn single(schema_type: SchemaType) -> Self {
        Self(vec![schema_type])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SchemaType> {
        self.0.iter()
    }

    /// Appends `schema_type` unless already present.
    ///
    /// Returns whether the set changed.
    pub fn insert(&mut self, schema_type: SchemaType) -> bool {
        if self.0.contains(&schema_type) {
            return false;
        }
        self.0.push(schema_type);
        true
    }
}

impl From<SchemaType> for Types {
    fn from(schema_type: SchemaType) -> Self {
        Self::single(schema_type)
    }
}

impl<const N: usize> From<[SchemaType; N]> for Types {
    fn from(types: [SchemaType; N]) -> Self {
        types.into_iter().collect()
    }
}

impl FromIterator<SchemaType> for Types {
    fn from_iter<I: IntoIterator<Item = SchemaType>>(iter: I) -> Self {
        let mut types = Self::new();
        for schema_type in iter {
            types.insert(schema_type);
        }
        types
    }
}

/// A singleton set marshals to a bare string, any other set to a sequence.
impl Marshal for Types {
    fn marshal(&self) -> Value {
        match self.0.as_slice() {
            [] => Value::Null,
            [single] => single.marshal(),
            many => many.marshal(),
        }
    }
}

/// Queries over an optional type set.
///
/// An absent set means "no type constraint", not "no types allowed".
pub trait TypeConstraint {
    /// The constrained types, `None` when unconstrained.
    fn type_set(&self) -> Option<&[SchemaType]>;

    /// Whether the set is exactly `{schema_type}`.
    fn is(&self, schema_type: SchemaType) -> bool {
        self.type_set() == Some(&[schema_type][..])
    }

    /// Whether `schema_type` is a member of the set.
    fn includes(&self, schema_type: SchemaType) -> bool {
        self.type_set()
            .is_some_and(|types| types.contains(&schema_type))
    }

    /// Whether a value of `schema_type` passes the type constraint.
    fn permits(&self, schema_type: SchemaType) -> bool {
        self.type_set()
            .is_none_or(|types| types.contains(&schema_type))
    }

    fn slice(&self) -> &[SchemaType] {
        self.type_set().unwrap_or_default()
    }
}

impl TypeConstraint for Types {
    fn type_set(&self) -> Option<&[SchemaType]> {
        Some(&self.0)
    }
}

impl TypeConstraint for Option<Types> {
    fn type_set(&self) -> Option<&[SchemaType]> {
        self.as_ref().map(|types| types.0.as_slice())
    }
}

/// Policy for object keys not listed in `properties`.
///
/// Unset is represented by the absence of this value on the [`Schema`].
#[derive(Debug, Clone, PartialEq)]
pub enum AdditionalProperties {
    /// Allow (`true`) or forbid (`false`) any extra key.
    Allowed(bool),
    /// Extra keys must match the nested schema.
    Schema(Box<RefOr<Schema>>),
}

impl Marshal for AdditionalProperties {
    fn marshal(&self) -> Value {
        match self {
            AdditionalProperties::Allowed(allowed) => Value::Bool(*allowed),
            AdditionalProperties::Schema(schema) => schema.marshal(),
        }
    }
}

/// Schema format for additional type information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaFormat {
    // String formats
    /// Base64 encoded characters.
    Byte,
    /// Any sequence of octets.
    Binary,
    /// Date (YYYY-MM-DD).
    Date,
    /// Date and time (RFC 3339).
    DateTime,
    /// A hint to UIs to obscure input.
    Password,
    Email,
    Uri,
    Uuid,
    Hostname,
    Ipv4,
    Ipv6,

    // Integer formats
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int64,

    // Number formats
    /// Single-precision floating point.
    Float,
    /// Double-precision floating point.
    Double,

    /// Any other format name.
    Other(String),
}

impl SchemaFormat {
    pub fn as_str(&self) -> &str {
        match self {
            SchemaFormat::Byte => "byte",
            SchemaFormat::Binary => "binary",
            SchemaFormat::Date => "date",
            SchemaFormat::DateTime => "date-time",
            SchemaFormat::Password => "password",
            SchemaFormat::Email => "email",
            SchemaFormat::Uri => "uri",
            SchemaFormat::Uuid => "uuid",
            SchemaFormat::Hostname => "hostname",
            SchemaFormat::Ipv4 => "ipv4",
            SchemaFormat::Ipv6 => "ipv6",
            SchemaFormat::Int32 => "int32",
            SchemaFormat::Int64 => "int64",
            SchemaFormat::Float => "float",
            SchemaFormat::Double => "double",
            SchemaFormat::Other(format) => format,
        }
    }
}

impl From<&str> for SchemaFormat {
    fn from(format: &str) -> Self {
        match format {
            "byte" => SchemaFormat::Byte,
            "binary" => SchemaFormat::Binary,
            "date" => SchemaFormat::Date,
            "date-time" => SchemaFormat::DateTime,
            "password" => SchemaFormat::Password,
            "email" => SchemaFormat::Email,
            "uri" => SchemaFormat::Uri,
            "uuid" => SchemaFormat::Uuid,
            "hostname" => SchemaFormat::Hostname,
            "ipv4" => SchemaFormat::Ipv4,
            "ipv6" => SchemaFormat::Ipv6,
            "int32" => SchemaFormat::Int32,
            "int64" => SchemaFormat::Int64,
            "float" => SchemaFormat::Float,
            "double" => SchemaFormat::Double,
            other => SchemaFormat::Other(other.to_owned()),
        }
    }
}

impl Marshal for SchemaFormat {
    fn marshal(&self) -> Value {
        Value::String(self.as_str().to_owned())
    }
}

/// A schema definition.
///
/// Length, item and property-count lower bounds use `0` as "unset"; upper bounds are optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    pub one_of: Vec<RefOr<Schema>>,
    pub any_of: Vec<RefOr<Schema>>,
    pub all_of: Vec<RefOr<Schema>>,
    pub not: Option<Box<RefOr<Schema>>>,

    /// The schema type set. `None` means any type.
    pub schema_type: Option<Types>,
    pub title: Option<String>,
    pub format: Option<SchemaFormat>,
    pub description: Option<String>,
    pub enum_values: Vec<Value>,
    pub default: Option<Value>,
    pub example: Option<Value>,
    pub external_docs: Option<ExternalDocs>,

    // Flags
    pub unique_items: bool,
    pub exclusive_minimum: bool,
    pub exclusive_maximum: bool,
    pub nullable: bool,
    pub read_only: bool,
    pub write_only: bool,
    pub allow_empty_value: bool,
    pub deprecated: bool,
    pub xml: Option<Xml>,

    // Number
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub multiple_of: Option<f64>,

    // String
    pub min_length: u64,
    pub max_length: Option<u64>,
    pub pattern: Option<String>,

    // Array
    pub min_items: u64,
    pub max_items: Option<u64>,
    pub items: Option<Box<RefOr<Schema>>>,

    // Object
    pub required: Vec<String>,
    pub properties: Map<String, RefOr<Schema>>,
    pub min_properties: u64,
    pub max_properties: Option<u64>,
    pub additional_properties: Option<AdditionalProperties>,
    pub discriminator: Option<Discriminator>,

    pub extensions: Option<Extensions>,
}

fn inline_all(schemas: impl IntoIterator<Item = Schema>) -> Vec<RefOr<Schema>> {
    schemas.into_iter().map(RefOr::T).collect()
}

/// Encoded length of `n` decoded bytes, `ceil(4n / 3)`, saturating at `u64::MAX`.
fn decoded_base64_len(n: u64) -> u64 {
    (n / 3).saturating_mul(4).saturating_add((n % 3 * 4).div_ceil(3))
}

impl Schema {
    /// Creates a new empty schema, equivalent to `{}`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a schema of the given type set.
    pub fn of_type(schema_type: impl Into<Types>) -> Self {
        Self {
            schema_type: Some(schema_type.into()),
            ..Default::default()
        }
    }

    /// A value must match exactly one of `schemas`.
    pub fn one_of(schemas: impl IntoIterator<Item = Schema>) -> Self {
        Self {
            one_of: inline_all(schemas),
            ..Default::default()
        }
    }

    /// A value must match at least one of `schemas`.
    pub fn any_of(schemas: impl IntoIterator<Item = Schema>) -> Self {
        Self {
            any_of: inline_all(schemas),
            ..Default::default()
        }
    }

    /// A value must match every one of `schemas`.
    pub fn all_of(schemas: impl IntoIterator<Item = Schema>) -> Self {
        Self {
            all_of: inline_all(schemas),
            ..Default::default()
        }
    }

    pub fn boolean() -> Self {
        Self::of_type(SchemaType::Boolean)
    }

    pub fn number() -> Self {
        Self::of_type(SchemaType::Number)
    }

    pub fn integer() -> Self {
        Self::of_type(SchemaType::Integer)
    }

    pub fn int32() -> Self {
        Self::integer().format(SchemaFormat::Int32)
    }

    pub fn int64() -> Self {
        Self::integer().format(SchemaFormat::Int64)
    }

    pub fn string() -> Self {
        Self::of_type(SchemaType::String)
    }

    pub fn date_time() -> Self {
        Self::string().format(SchemaFormat::DateTime)
    }

    pub fn uuid() -> Self {
        Self::string().format(SchemaFormat::Uuid)
    }

    /// A base64 encoded string.
    pub fn bytes() -> Self {
        Self::string().format(SchemaFormat::Byte)
    }

    pub fn array() -> Self {
        Self::of_type(SchemaType::Array)
    }

    pub fn object() -> Self {
        Self::of_type(SchemaType::Object)
    }

    /// Sets the schema type set.
    pub fn schema_type(mut self, schema_type: impl Into<Types>) -> Self {
        self.schema_type = Some(schema_type.into());
        self
    }

    /// Sets the negated schema.
    pub fn not(mut self, schema: impl Into<RefOr<Schema>>) -> Self {
        self.not = Some(Box::new(schema.into()));
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the schema format.
    pub fn format(mut self, format: impl Into<SchemaFormat>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the enum values.
    pub fn enum_values(mut self, values: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        self.enum_values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the default value.
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Sets the example value.
    pub fn example(mut self, value: impl Into<Value>) -> Self {
        self.example = Some(value.into());
        self
    }

    pub fn external_docs(mut self, external_docs: ExternalDocs) -> Self {
        self.external_docs = Some(external_docs);
        self
    }

    /// Sets the nullable flag.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Sets the read-only flag.
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Sets the write-only flag.
    pub fn write_only(mut self, write_only: bool) -> Self {
        self.write_only = write_only;
        self
    }

    pub fn allow_empty_value(mut self, allow_empty_value: bool) -> Self {
        self.allow_empty_value = allow_empty_value;
        self
    }

    /// Sets the deprecated flag.
    pub fn deprecated(mut self, deprecated: bool) -> Self {
        self.deprecated = deprecated;
        self
    }

    pub fn xml(mut self, xml: Xml) -> Self {
        self.xml = Some(xml);
        self
    }

    /// Sets the minimum value.
    pub fn minimum(mut self, minimum: f64) -> Self {
        self.minimum = Some(minimum);
        self
    }

    /// Sets the maximum value.
    pub fn maximum(mut self, maximum: f64) -> Self {
        self.maximum = Some(maximum);
        self
    }

    /// Sets the exclusive minimum flag.
    pub fn exclusive_minimum(mut self, exclusive_minimum: bool) -> Self {
        self.exclusive_minimum = exclusive_minimum;
        self
    }

    /// Sets the exclusive maximum flag.
    pub fn exclusive_maximum(mut self, exclusive_maximum: bool) -> Self {
        self.exclusive_maximum = exclusive_maximum;
        self
    }

    /// Sets the multiple of value.
    pub fn multiple_of(mut self, multiple_of: f64) -> Self {
        self.multiple_of = Some(multiple_of);
        self
    }

    /// Sets both length bounds to `length`.
    pub fn length(mut self, length: u64) -> Self {
        self.min_length = length;
        self.max_length = Some(length);
        self
    }

    /// Sets the minimum length.
    pub fn min_length(mut self, min_length: u64) -> Self {
        self.min_length = min_length;
        self
    }

    /// Sets the maximum length.
    pub fn max_length(mut self, max_length: u64) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Sets both length bounds to the base64 encoded length of `decoded` bytes.
    pub fn length_decoded_base64(self, decoded: u64) -> Self {
        self.length(decoded_base64_len(decoded))
    }

    /// Sets the minimum length to the base64 encoded length of `decoded` bytes.
    pub fn min_length_decoded_base64(self, decoded: u64) -> Self {
        self.min_length(decoded_base64_len(decoded))
    }

    /// Sets the maximum length to the base64 encoded length of `decoded` bytes.
    pub fn max_length_decoded_base64(self, decoded: u64) -> Self {
        self.max_length(decoded_base64_len(decoded))
    }

    /// Sets the pattern.
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Sets the items schema.
    pub fn items(self, items: Schema) -> Self {
        self.items_ref(RefOr::T(items))
    }

    pub fn items_ref(mut self, items: RefOr<Schema>) -> Self {
        self.items = Some(Box::new(items));
        self
    }

    /// Sets the minimum number of items.
    pub fn min_items(mut self, min_items: u64) -> Self {
        self.min_items = min_items;
        self
    }

    /// Sets the maximum number of items.
    pub fn max_items(mut self, max_items: u64) -> Self {
        self.max_items = Some(max_items);
        self
    }

    pub fn unique_items(mut self, unique_items: bool) -> Self {
        self.unique_items = unique_items;
        self
    }

    /// Adds the inline property `name`.
    pub fn property(self, name: impl Into<String>, schema: Schema) -> Self {
        self.property_ref(name, RefOr::T(schema))
    }

    pub fn property_ref(mut self, name: impl Into<String>, schema: RefOr<Schema>) -> Self {
        self.properties.insert(name.into(), schema);
        self
    }

    /// Replaces the properties with the given inline schemas.
    pub fn properties(mut self, properties: impl IntoIterator<Item = (String, Schema)>) -> Self {
        self.properties = properties
            .into_iter()
            .map(|(name, schema)| (name, RefOr::T(schema)))
            .collect();
        self
    }

    /// Sets the required properties.
    pub fn required(mut self, required: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.required = required.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the minimum number of properties.
    pub fn min_properties(mut self, min_properties: u64) -> Self {
        self.min_properties = min_properties;
        self
    }

    /// Sets the maximum number of properties.
    pub fn max_properties(mut self, max_properties: u64) -> Self {
        self.max_properties = Some(max_properties);
        self
    }

    /// Allows any additional property.
    pub fn any_additional_properties(mut self) -> Self {
        self.additional_properties = Some(AdditionalProperties::Allowed(true));
        self
    }

    /// Forbids additional properties.
    pub fn no_additional_properties(mut self) -> Self {
        self.additional_properties = Some(AdditionalProperties::Allowed(false));
        self
    }

    /// Constrains additional properties to `schema`, or unsets the policy on `None`.
    pub fn additional_properties(mut self, schema: Option<Schema>) -> Self {
        self.additional_properties =
            schema.map(|schema| AdditionalProperties::Schema(Box::new(RefOr::T(schema))));
        self
    }

    pub fn additional_properties_ref(mut self, schema: RefOr<Schema>) -> Self {
        self.additional_properties = Some(AdditionalProperties::Schema(Box::new(schema)));
        self
    }

    pub fn discriminator(mut self, discriminator: Discriminator) -> Self {
        self.discriminator = Some(discriminator);
        self
    }

    /// Whether `null` passes this schema.
    pub fn permits_null(&self) -> bool {
        self.nullable || self.schema_type.includes(SchemaType::Null)
    }

    /// Whether this schema is equivalent to the empty schema `{}`.
    ///
    /// Only inline sub-schemas are inspected; a pointer is assumed unconstrained. Forbidding
    /// additional properties is a constraint, allowing them is not.
    pub fn is_empty(&self) -> bool {
        if self.schema_type.is_some()
            || self.format.is_some()
            || !self.enum_values.is_empty()
            || self.unique_items
            || self.exclusive_minimum
            || self.exclusive_maximum
            || self.nullable
            || self.read_only
            || self.write_only
            || self.allow_empty_value
            || self.minimum.is_some()
            || self.maximum.is_some()
            || self.multiple_of.is_some()
            || self.min_length != 0
            || self.max_length.is_some()
            || self.pattern.is_some()
            || self.min_items != 0
            || self.max_items.is_some()
            || !self.required.is_empty()
            || self.min_properties != 0
            || self.max_properties.is_some()
        {
            return false;
        }

        match &self.additional_properties {
            Some(AdditionalProperties::Allowed(false)) => return false,
            Some(AdditionalProperties::Schema(schema)) if !is_inline_empty(schema) => {
                return false;
            }
            _ => {}
        }

        self.not.as_deref().is_none_or(is_inline_empty)
            && self.items.as_deref().is_none_or(is_inline_empty)
            && self.properties.values().all(is_inline_empty)
            && self.one_of.iter().all(is_inline_empty)
            && self.any_of.iter().all(is_inline_empty)
            && self.all_of.iter().all(is_inline_empty)
    }
}

fn is_inline_empty(schema: &RefOr<Schema>) -> bool {
    schema.value().is_none_or(Schema::is_empty)
}

impl Marshal for Schema {
    fn marshal(&self) -> Value {
        let mut object = ObjectWriter::new(self.export_merged(36));

        object.omittable("oneOf", &self.one_of);
        object.omittable("anyOf", &self.any_of);
        object.omittable("allOf", &self.all_of);
        object.omittable("not", &self.not);
        if let Some(types) = self.schema_type.as_ref().filter(|types| !types.is_empty()) {
            object.field("type", types);
        }
        object.omittable("title", &self.title);
        object.omittable("format", &self.format);
        object.omittable("description", &self.description);
        object.omittable("enum", &self.enum_values);
        object.omittable("default", &self.default);
        object.omittable("example", &self.example);
        object.omittable("externalDocs", &self.external_docs);

        object.omittable("uniqueItems", &self.unique_items);
        object.omittable("exclusiveMinimum", &self.exclusive_minimum);
        object.omittable("exclusiveMaximum", &self.exclusive_maximum);
        object.omittable("nullable", &self.nullable);
        object.omittable("readOnly", &self.read_only);
        object.omittable("writeOnly", &self.write_only);
        object.omittable("allowEmptyValue", &self.allow_empty_value);
        object.omittable("deprecated", &self.deprecated);
        object.omittable("xml", &self.xml);

        object.omittable("minimum", &self.minimum);
        object.omittable("maximum", &self.maximum);
        object.omittable("multipleOf", &self.multiple_of);

        object.omittable("minLength", &self.min_length);
        object.omittable("maxLength", &self.max_length);
        object.omittable("pattern", &self.pattern);

        object.omittable("minItems", &self.min_items);
        object.omittable("maxItems", &self.max_items);
        object.omittable("items", &self.items);

        object.omittable("required", &self.required);
        object.omittable("properties", &self.properties);
        object.omittable("minProperties", &self.min_properties);
        object.omittable("maxProperties", &self.max_properties);
        object.omittable("additionalProperties", &self.additional_properties);
        object.omittable("discriminator", &self.discriminator);

        object.finish()
    }
}

crate::builder_macros::extensible!(Schema);
crate::builder_macros::serialize_via_marshal!(Schema);

//! Reference-or-inline values and component pointers.

use std::{borrow::Cow, mem};

use serde_json::Value;

use super::{
    Callback, Example, Header, Link, Parameter, RequestBody, Response, Schema, SecurityScheme,
    map::Map,
};
use crate::marshal::Marshal;

/// Either a pointer to a component or an inline definition.
///
/// A pointer always marshals to the reference object `{"$ref": "<pointer>"}`, without sibling
/// keys. Holding both at once is impossible; [`RefOr::point_to`] hands back the inline value
/// it replaces so a caller can stage a default and override it later.
#[derive(Debug, Clone, PartialEq)]
pub enum RefOr<T> {
    /// A reference to a component.
    Ref(Ref),
    /// An inline definition.
    T(T),
}

impl<T> RefOr<T> {
    /// Creates a new reference to a component.
    pub fn new_ref(ref_path: impl Into<String>) -> Self {
        RefOr::Ref(Ref::new(ref_path))
    }

    /// Creates a new inline definition.
    pub fn new_inline(value: T) -> Self {
        RefOr::T(value)
    }

    /// Stores `value` inline, dropping any pointer.
    pub fn set_value(&mut self, value: T) {
        *self = RefOr::T(value);
    }

    /// Replaces the content with the pointer `ref_path`.
    ///
    /// Returns the inline value that was displaced, if any.
    pub fn replace_with_ref(&mut self, ref_path: impl Into<String>) -> Option<T> {
        match mem::replace(self, RefOr::new_ref(ref_path)) {
            RefOr::T(value) => Some(value),
            RefOr::Ref(_) => None,
        }
    }

    /// Returns the pointer, if this is a reference.
    pub fn ref_path(&self) -> Option<&str> {
        match self {
            RefOr::Ref(reference) => Some(&reference.ref_path),
            RefOr::T(_) => None,
        }
    }

    /// Returns the inline value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            RefOr::T(value) => Some(value),
            RefOr::Ref(_) => None,
        }
    }

    pub fn value_mut(&mut self) -> Option<&mut T> {
        match self {
            RefOr::T(value) => Some(value),
            RefOr::Ref(_) => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            RefOr::T(value) => Some(value),
            RefOr::Ref(_) => None,
        }
    }

    pub fn is_ref(&self) -> bool {
        matches!(self, RefOr::Ref(_))
    }
}

impl<T: Component> RefOr<T> {
    /// Creates a pointer to the component `name` of `T`'s section.
    ///
    /// ```
    /// # use oasmodel_core::openapi::{RefOr, RequestBody};
    /// let body = RefOr::<RequestBody>::component("Foo");
    /// assert_eq!(body.ref_path(), Some("#/components/requestBodies/Foo"));
    /// ```
    pub fn component(name: &str) -> Self {
        RefOr::new_ref(T::component_path(name))
    }

    /// Points this reference to the component `name` of `T`'s section.
    ///
    /// Returns the inline value that was displaced, if any.
    pub fn point_to(&mut self, name: &str) -> Option<T> {
        self.replace_with_ref(T::component_path(name))
    }
}

impl<T> From<T> for RefOr<T> {
    fn from(value: T) -> Self {
        RefOr::T(value)
    }
}

impl<T: Marshal> Marshal for RefOr<T> {
    fn marshal(&self) -> Value {
        match self {
            RefOr::Ref(reference) => reference.marshal(),
            RefOr::T(value) => value.marshal(),
        }
    }
}

impl<T: Marshal> serde::Serialize for RefOr<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.marshal().serialize(serializer)
    }
}

/// A reference to a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ref {
    /// The reference path to the component (e.g., "#/components/schemas/Pet").
    pub ref_path: String,
}

impl Ref {
    pub fn new(ref_path: impl Into<String>) -> Self {
        Self {
            ref_path: ref_path.into(),
        }
    }
}

impl Marshal for Ref {
    fn marshal(&self) -> Value {
        let mut object = serde_json::Map::with_capacity(1);
        object.insert("$ref".to_owned(), Value::String(self.ref_path.clone()));
        Value::Object(object)
    }
}

crate::builder_macros::serialize_via_marshal!(Ref);

/// A document object that can be stored under `#/components`.
pub trait Component {
    /// The declared type name the section is derived from.
    const TYPE_NAME: &'static str;

    /// Name of the `#/components` section holding this type.
    fn section() -> Cow<'static, str> {
        ref_section(Self::TYPE_NAME)
    }

    /// Returns the canonical pointer `#/components/<section>/<name>`.
    fn component_path(name: &str) -> String {
        format!("#/components/{}/{name}", Self::section())
    }
}

/// Derives the components section name from a type name.
pub fn ref_section(type_name: &str) -> Cow<'static, str> {
    match type_name {
        "RequestBody" => Cow::Borrowed("requestBodies"),
        "SecurityScheme" => Cow::Borrowed("securitySchemes"),
        _ => Cow::Owned(format!("{}s", type_name.to_lowercase())),
    }
}

macro_rules! component {
    ( $( $ty:ident ),+ ) => {
        $(
            impl Component for $ty {
                const TYPE_NAME: &'static str = stringify!($ty);
            }
        )+
    };
}

component!(
    Schema,
    Parameter,
    Header,
    RequestBody,
    Response,
    SecurityScheme,
    Example,
    Link,
    Callback
);

/// Named references or inline values, as found in the components sections.
pub type Refs<T> = Map<String, RefOr<T>>;

/// Insertion helpers for [`Refs`].
pub trait RefsExt<T> {
    /// Stores `value` inline under `name`.
    fn add_value(&mut self, name: impl Into<String>, value: T);

    /// Stores under `name` a pointer to the component `component_name`.
    fn add_ref(&mut self, name: impl Into<String>, component_name: &str);
}

impl<T: Component> RefsExt<T> for Refs<T> {
    fn add_value(&mut self, name: impl Into<String>, value: T) {
        self.insert(name.into(), RefOr::T(value));
    }

    fn add_ref(&mut self, name: impl Into<String>, component_name: &str) {
        self.insert(name.into(), RefOr::component(component_name));
    }
}

//! Path item entity and HTTP methods.

use std::{collections::BTreeMap, fmt, str::FromStr};

use serde_json::Value;

use super::{
    Operation, Parameters, Servers,
    extensions::{Extensible, Extensions},
    reference::Ref,
};
use crate::{
    Error, Result,
    marshal::{Marshal, ObjectWriter},
};

/// The HTTP methods a [`PathItem`] holds an operation for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Method {
    Connect,
    Delete,
    Get,
    Head,
    Options,
    Patch,
    Post,
    Put,
    Trace,
}

impl Method {
    pub const ALL: [Method; 9] = [
        Method::Connect,
        Method::Delete,
        Method::Get,
        Method::Head,
        Method::Options,
        Method::Patch,
        Method::Post,
        Method::Put,
        Method::Trace,
    ];

    /// The upper-case method name, e.g. `GET`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Connect => "CONNECT",
            Method::Delete => "DELETE",
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
            Method::Patch => "PATCH",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Trace => "TRACE",
        }
    }

    /// The path item field name, e.g. `get`.
    fn field_name(&self) -> &'static str {
        match self {
            Method::Connect => "connect",
            Method::Delete => "delete",
            Method::Get => "get",
            Method::Head => "head",
            Method::Options => "options",
            Method::Patch => "patch",
            Method::Post => "post",
            Method::Put => "put",
            Method::Trace => "trace",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses an upper-case method name. Matching is case-sensitive.
impl FromStr for Method {
    type Err = Error;

    fn from_str(method: &str) -> Result<Self> {
        Method::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == method)
            .ok_or_else(|| Error::UnsupportedMethod(method.to_owned()))
    }
}

/// Describes the operations available on a single path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathItem {
    /// When set, the item marshals to this reference only.
    pub ref_path: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub connect: Option<Operation>,
    pub delete: Option<Operation>,
    pub get: Option<Operation>,
    pub head: Option<Operation>,
    pub options: Option<Operation>,
    pub patch: Option<Operation>,
    pub post: Option<Operation>,
    pub put: Option<Operation>,
    pub trace: Option<Operation>,
    pub servers: Servers,
    pub parameters: Parameters,
    pub extensions: Option<Extensions>,
}

impl PathItem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the operation for `method`.
    pub fn with_operation(mut self, method: Method, operation: Operation) -> Self {
        self.set_operation_for(method, operation);
        self
    }

    fn slot(&self, method: Method) -> &Option<Operation> {
        match method {
            Method::Connect => &self.connect,
            Method::Delete => &self.delete,
            Method::Get => &self.get,
            Method::Head => &self.head,
            Method::Options => &self.options,
            Method::Patch => &self.patch,
            Method::Post => &self.post,
            Method::Put => &self.put,
            Method::Trace => &self.trace,
        }
    }

    fn slot_mut(&mut self, method: Method) -> &mut Option<Operation> {
        match method {
            Method::Connect => &mut self.connect,
            Method::Delete => &mut self.delete,
            Method::Get => &mut self.get,
            Method::Head => &mut self.head,
            Method::Options => &mut self.options,
            Method::Patch => &mut self.patch,
            Method::Post => &mut self.post,
            Method::Put => &mut self.put,
            Method::Trace => &mut self.trace,
        }
    }

    /// Returns the operation for `method`.
    pub fn operation(&self, method: Method) -> Option<&Operation> {
        self.slot(method).as_ref()
    }

    pub fn operation_mut(&mut self, method: Method) -> Option<&mut Operation> {
        self.slot_mut(method).as_mut()
    }

    /// Stores `operation` for `method`, returning the one it replaces.
    pub fn set_operation_for(&mut self, method: Method, operation: Operation) -> Option<Operation> {
        self.slot_mut(method).replace(operation)
    }

    /// Returns the operation for the method named `method` (e.g. `"GET"`).
    pub fn get_operation(&self, method: &str) -> Result<Option<&Operation>> {
        Ok(self.operation(method.parse()?))
    }

    /// Stores `operation` for the method named `method` (e.g. `"GET"`).
    pub fn set_operation(&mut self, method: &str, operation: Operation) -> Result<()> {
        self.set_operation_for(method.parse()?, operation);
        Ok(())
    }

    /// Returns every declared operation, ordered by method.
    pub fn operations(&self) -> BTreeMap<Method, &Operation> {
        Method::ALL
            .into_iter()
            .filter_map(|method| Some((method, self.operation(method)?)))
            .collect()
    }
}

impl Marshal for PathItem {
    fn marshal(&self) -> Value {
        if let Some(ref_path) = &self.ref_path {
            return Ref::new(ref_path.as_str()).marshal();
        }

        let mut object = ObjectWriter::new(self.export_merged(13));
        object.omittable("summary", &self.summary);
        object.omittable("description", &self.description);
        for method in Method::ALL {
            object.omittable(method.field_name(), self.slot(method));
        }
        object.omittable("servers", &self.servers);
        object.omittable("parameters", &self.parameters);
        object.finish()
    }
}

crate::builder_macros::extensible!(PathItem);
crate::builder_macros::serialize_via_marshal!(PathItem);

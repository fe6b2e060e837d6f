//! Tag entity for grouping operations.

use serde_json::Value;

use super::{
    ExternalDocs,
    extensions::{Extensible, Extensions},
};
use crate::marshal::{Marshal, ObjectWriter, Omit};

/// Metadata for a tag used by operations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tag {
    /// The name of the tag.
    pub name: String,

    /// A description for the tag.
    pub description: Option<String>,

    pub external_docs: Option<ExternalDocs>,

    pub extensions: Option<Extensions>,
}

impl Tag {
    /// Creates a new `Tag` with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Sets the description for the tag.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn external_docs(mut self, external_docs: ExternalDocs) -> Self {
        self.external_docs = Some(external_docs);
        self
    }
}

impl Marshal for Tag {
    fn marshal(&self) -> Value {
        let mut object = ObjectWriter::new(self.export_merged(3));
        if !self.name.is_empty() {
            object.field("name", &self.name);
        }
        object.omittable("description", &self.description);
        object.omittable("externalDocs", &self.external_docs);
        object.finish()
    }
}

crate::builder_macros::extensible!(Tag);

/// An ordered list of tags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tags(pub Vec<Tag>);

impl Tags {
    /// Returns the first tag named `name`.
    pub fn get(&self, name: &str) -> Option<&Tag> {
        self.0.iter().find(|tag| tag.name == name)
    }

    pub fn push(&mut self, tag: Tag) {
        self.0.push(tag);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Tag> for Tags {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Marshal for Tags {
    fn marshal(&self) -> Value {
        self.0.marshal()
    }
}

impl Omit for Tags {
    fn omit(&self) -> bool {
        self.is_empty()
    }
}

crate::builder_macros::serialize_via_marshal!(Tag, Tags);

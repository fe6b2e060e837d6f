//! Info entity and related metadata types.

use serde_json::Value;

use super::extensions::{Extensible, Extensions};
use crate::marshal::{Marshal, ObjectWriter};

/// Metadata about the API.
///
/// `title` and `version` are required and always emitted, even when empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Info {
    /// The title of the API.
    pub title: String,

    /// A description of the API.
    pub description: Option<String>,

    /// A URL to the terms of service for the API.
    pub terms_of_service: Option<String>,

    /// Contact information for the exposed API.
    pub contact: Option<Contact>,

    /// License information for the exposed API.
    pub license: Option<License>,

    /// The version of the API document (not of the format).
    pub version: String,

    pub extensions: Option<Extensions>,
}

impl Info {
    /// Creates a new `Info` with the given title and version.
    pub fn new(title: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            version: version.into(),
            ..Default::default()
        }
    }

    /// Sets the description for the API.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn terms_of_service(mut self, terms_of_service: impl Into<String>) -> Self {
        self.terms_of_service = Some(terms_of_service.into());
        self
    }

    /// Sets the contact information.
    pub fn contact(mut self, contact: Contact) -> Self {
        self.contact = Some(contact);
        self
    }

    /// Sets the license information.
    pub fn license(mut self, license: License) -> Self {
        self.license = Some(license);
        self
    }
}

impl Marshal for Info {
    fn marshal(&self) -> Value {
        let mut object = ObjectWriter::new(self.export_merged(6));
        object.field("title", &self.title);
        object.omittable("description", &self.description);
        object.omittable("termsOfService", &self.terms_of_service);
        object.omittable("contact", &self.contact);
        object.omittable("license", &self.license);
        object.field("version", &self.version);
        object.finish()
    }
}

/// Contact information for the exposed API.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Contact {
    /// The identifying name of the contact person/organization.
    pub name: Option<String>,

    /// The URL pointing to the contact information.
    pub url: Option<String>,

    /// The email address of the contact person/organization.
    pub email: Option<String>,

    pub extensions: Option<Extensions>,
}

impl Contact {
    /// Creates a new empty `Contact`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name of the contact.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the URL of the contact.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the email of the contact.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

impl Marshal for Contact {
    fn marshal(&self) -> Value {
        let mut object = ObjectWriter::new(self.export_merged(3));
        object.omittable("name", &self.name);
        object.omittable("url", &self.url);
        object.omittable("email", &self.email);
        object.finish()
    }
}

/// License information for the exposed API.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct License {
    /// The license name. Always emitted.
    pub name: String,

    /// A URL to the license.
    pub url: Option<String>,

    pub extensions: Option<Extensions>,
}

impl License {
    /// Creates a new `License` with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Sets the URL of the license.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

impl Marshal for License {
    fn marshal(&self) -> Value {
        let mut object = ObjectWriter::new(self.export_merged(2));
        object.field("name", &self.name);
        object.omittable("url", &self.url);
        object.finish()
    }
}

crate::builder_macros::extensible!(Info, Contact, License);
crate::builder_macros::serialize_via_marshal!(Info, Contact, License);

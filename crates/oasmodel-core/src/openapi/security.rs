//! Security schemes and requirements.

use serde_json::Value;

use super::{
    ParameterIn,
    extensions::{Extensible, Extensions},
    map::Map,
};
use crate::marshal::{Marshal, ObjectWriter, Omit};

/// The kind of a [`SecurityScheme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecuritySchemeType {
    ApiKey,
    Http,
    OAuth2,
    OpenIdConnect,
}

impl SecuritySchemeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SecuritySchemeType::ApiKey => "apiKey",
            SecuritySchemeType::Http => "http",
            SecuritySchemeType::OAuth2 => "oauth2",
            SecuritySchemeType::OpenIdConnect => "openIdConnect",
        }
    }
}

impl Marshal for SecuritySchemeType {
    fn marshal(&self) -> Value {
        Value::String(self.as_str().to_owned())
    }
}

/// A security scheme usable by operations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SecurityScheme {
    pub scheme_type: Option<SecuritySchemeType>,
    pub description: Option<String>,
    /// Header, query or cookie parameter name, for `apiKey` schemes.
    pub name: Option<String>,
    pub in_: Option<ParameterIn>,
    /// HTTP authorization scheme, for `http` schemes.
    pub scheme: Option<String>,
    pub bearer_format: Option<String>,
    pub flows: Option<OAuthFlows>,
    pub open_id_connect_url: Option<String>,
    pub extensions: Option<Extensions>,
}

impl SecurityScheme {
    pub fn new(scheme_type: SecuritySchemeType) -> Self {
        Self {
            scheme_type: Some(scheme_type),
            ..Default::default()
        }
    }

    /// An API key sent in the `X-XSRF-TOKEN` header.
    pub fn csrf() -> Self {
        Self::new(SecuritySchemeType::ApiKey)
            .in_(ParameterIn::Header)
            .name("X-XSRF-TOKEN")
    }

    /// OpenID Connect discovery at `url`.
    pub fn oidc(url: impl Into<String>) -> Self {
        Self {
            open_id_connect_url: Some(url.into()),
            ..Self::new(SecuritySchemeType::OpenIdConnect)
        }
    }

    /// HTTP bearer authentication with a JWT.
    pub fn jwt() -> Self {
        Self::new(SecuritySchemeType::Http)
            .scheme("bearer")
            .bearer_format("JWT")
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn in_(mut self, in_: ParameterIn) -> Self {
        self.in_ = Some(in_);
        self
    }

    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into());
        self
    }

    pub fn bearer_format(mut self, bearer_format: impl Into<String>) -> Self {
        self.bearer_format = Some(bearer_format.into());
        self
    }

    pub fn flows(mut self, flows: OAuthFlows) -> Self {
        self.flows = Some(flows);
        self
    }
}

impl Marshal for SecurityScheme {
    fn marshal(&self) -> Value {
        let mut object = ObjectWriter::new(self.export_merged(8));
        object.omittable("type", &self.scheme_type);
        object.omittable("description", &self.description);
        object.omittable("name", &self.name);
        object.omittable("in", &self.in_);
        object.omittable("scheme", &self.scheme);
        object.omittable("bearerFormat", &self.bearer_format);
        object.omittable("flows", &self.flows);
        object.omittable("openIdConnectUrl", &self.open_id_connect_url);
        object.finish()
    }
}

/// The OAuth flows supported by an `oauth2` scheme.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OAuthFlows {
    pub implicit: Option<OAuthFlow>,
    pub password: Option<OAuthFlow>,
    pub client_credentials: Option<OAuthFlow>,
    pub authorization_code: Option<OAuthFlow>,
    pub extensions: Option<Extensions>,
}

impl Marshal for OAuthFlows {
    fn marshal(&self) -> Value {
        let mut object = ObjectWriter::new(self.export_merged(4));
        object.omittable("implicit", &self.implicit);
        object.omittable("password", &self.password);
        object.omittable("clientCredentials", &self.client_credentials);
        object.omittable("authorizationCode", &self.authorization_code);
        object.finish()
    }
}

/// A single OAuth flow.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OAuthFlow {
    pub authorization_url: Option<String>,
    pub token_url: Option<String>,
    pub refresh_url: Option<String>,
    /// Scope names to their description. Always emitted, even when empty.
    pub scopes: Map<String, String>,
    pub extensions: Option<Extensions>,
}

impl OAuthFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn authorization_url(mut self, url: impl Into<String>) -> Self {
        self.authorization_url = Some(url.into());
        self
    }

    pub fn token_url(mut self, url: impl Into<String>) -> Self {
        self.token_url = Some(url.into());
        self
    }

    pub fn scope(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.scopes.insert(name.into(), description.into());
        self
    }
}

impl Marshal for OAuthFlow {
    fn marshal(&self) -> Value {
        let mut object = ObjectWriter::new(self.export_merged(4));
        object.omittable("authorizationUrl", &self.authorization_url);
        object.omittable("tokenUrl", &self.token_url);
        object.omittable("refreshUrl", &self.refresh_url);
        object.field("scopes", &self.scopes);
        object.finish()
    }
}

crate::builder_macros::extensible!(SecurityScheme, OAuthFlows, OAuthFlow);

/// Security scheme names to the scopes required for each.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SecurityRequirement(pub Map<String, Vec<String>>);

impl SecurityRequirement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires the scheme `provider` with `scopes`.
    ///
    /// The scopes are emitted as a sequence even when empty.
    pub fn authenticate(
        mut self,
        provider: impl Into<String>,
        scopes: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.0
            .insert(provider.into(), scopes.into_iter().map(Into::into).collect());
        self
    }
}

impl Marshal for SecurityRequirement {
    fn marshal(&self) -> Value {
        self.0.marshal()
    }
}

/// Alternative security requirements; satisfying any one of them is enough.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SecurityRequirements(pub Vec<SecurityRequirement>);

impl SecurityRequirements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, requirement: SecurityRequirement) -> Self {
        self.0.push(requirement);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Marshal for SecurityRequirements {
    fn marshal(&self) -> Value {
        self.0.marshal()
    }
}

impl Omit for SecurityRequirements {
    fn omit(&self) -> bool {
        self.is_empty()
    }
}

crate::builder_macros::serialize_via_marshal!(
    SecurityScheme,
    OAuthFlows,
    OAuthFlow,
    SecurityRequirement,
    SecurityRequirements
);

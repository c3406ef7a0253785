//! Credential triples and the token-or-credentials auth source.

use std::fmt;

use assura_core::{Error, Result};
use serde_json::{Map, Value};

/// Tool parameter carrying a pre-obtained bearer token.
pub const BEARER_TOKEN_PARAM: &str = "bearerToken";
/// Tool parameter carrying the client id.
pub const CLIENT_ID_PARAM: &str = "clientId";
/// Tool parameter carrying the client secret.
pub const CLIENT_SECRET_PARAM: &str = "clientSecret";

/// A client-credential triple.
///
/// The organization member is named per service family (`organizationId` or
/// `tenantId`) on the wire; here it is always `organization_id`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Client id.
    pub client_id: String,
    /// Client secret.
    pub client_secret: String,
    /// Organization (or tenant) id.
    pub organization_id: String,
}

impl Credentials {
    /// Build a triple, rejecting empty members.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        organization_id: impl Into<String>,
    ) -> Result<Self> {
        let creds = Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            organization_id: organization_id.into(),
        };
        let mut missing = Vec::new();
        if creds.client_id.trim().is_empty() {
            missing.push(CLIENT_ID_PARAM);
        }
        if creds.client_secret.trim().is_empty() {
            missing.push(CLIENT_SECRET_PARAM);
        }
        if creds.organization_id.trim().is_empty() {
            missing.push("organizationId");
        }
        if !missing.is_empty() {
            return Err(Error::config(format!(
                "missing credentials: {}",
                missing.join(", ")
            )));
        }
        Ok(creds)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("organization_id", &self.organization_id)
            .finish()
    }
}

/// Where the bearer token for a call comes from.
#[derive(Clone, PartialEq, Eq)]
pub enum AuthSource {
    /// A token the caller already holds. Its lifetime is the caller's business.
    Token(String),
    /// A triple to exchange at the family's token endpoint.
    Credentials(Credentials),
}

impl AuthSource {
    /// Pick the auth source out of a tool's argument map.
    ///
    /// A non-empty `bearerToken` always wins, even when a full triple is also
    /// present. Otherwise `clientId`, `clientSecret` and `org_field` must all
    /// be present.
    pub fn from_params(params: &Map<String, Value>, org_field: &str) -> Result<Self> {
        if let Some(token) = string_param(params, BEARER_TOKEN_PARAM)? {
            return Ok(AuthSource::Token(token));
        }

        let client_id = string_param(params, CLIENT_ID_PARAM)?;
        let client_secret = string_param(params, CLIENT_SECRET_PARAM)?;
        let organization_id = string_param(params, org_field)?;

        match (client_id, client_secret, organization_id) {
            (Some(client_id), Some(client_secret), Some(organization_id)) => {
                Credentials::new(client_id, client_secret, organization_id)
                    .map(AuthSource::Credentials)
            }
            (None, None, None) => Err(Error::config(format!(
                "missing credentials: provide {BEARER_TOKEN_PARAM}, or \
                 {CLIENT_ID_PARAM}, {CLIENT_SECRET_PARAM} and {org_field}"
            ))),
            (client_id, client_secret, organization_id) => {
                let missing: Vec<&str> = [
                    (CLIENT_ID_PARAM, client_id.is_none()),
                    (CLIENT_SECRET_PARAM, client_secret.is_none()),
                    (org_field, organization_id.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, absent)| absent.then_some(name))
                .collect();
                Err(Error::config(format!(
                    "missing credentials: {}",
                    missing.join(", ")
                )))
            }
        }
    }

    /// Whether this source is a caller-supplied token.
    pub fn is_token(&self) -> bool {
        matches!(self, AuthSource::Token(_))
    }
}

impl fmt::Debug for AuthSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthSource::Token(_) => f.write_str("Token(<redacted>)"),
            AuthSource::Credentials(creds) => f.debug_tuple("Credentials").field(creds).finish(),
        }
    }
}

impl From<Credentials> for AuthSource {
    fn from(creds: Credentials) -> Self {
        AuthSource::Credentials(creds)
    }
}

/// A trimmed, non-empty string parameter. Blank strings count as absent.
fn string_param(params: &Map<String, Value>, name: &str) -> Result<Option<String>> {
    match params.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => {
            let s = s.trim();
            Ok((!s.is_empty()).then(|| s.to_string()))
        }
        Some(_) => Err(Error::config(format!(
            "malformed credentials: '{name}' must be a string"
        ))),
    }
}

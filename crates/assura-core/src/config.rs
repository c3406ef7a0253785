//! Upstream service configuration.
//!
//! Each upstream microservice belongs to a [`ServiceFamily`]. A family knows
//! where its API lives, which path exchanges client credentials for a bearer
//! token, whether calls are scoped with an `X-Tenant-ID` header, and what the
//! organization member of its credential triple is called.
//!
//! ```rust
//! use assura_core::{GatewayConfig, ServiceEndpoint, ServiceFamily};
//!
//! let claims = ServiceEndpoint::new(ServiceFamily::Claims, "https://claims.example.com");
//! let config = GatewayConfig::new("assura").with_endpoint(ServiceFamily::Claims, claims);
//! assert!(config.endpoint(ServiceFamily::Claims).is_ok());
//! assert!(config.endpoint(ServiceFamily::Ledger).is_err());
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Placeholder substituted with the tenant id in templated base URLs.
pub const TENANT_PLACEHOLDER: &str = "{tenantId}";

/// Check a caller-supplied tenant id.
///
/// Tenant ids end up in hostnames and headers, so only ASCII letters,
/// digits, `-` and `_` are accepted. Surrounding whitespace is trimmed.
pub fn validate_tenant_id(tenant_id: &str) -> Result<&str> {
    let trimmed = tenant_id.trim();
    if trimmed.is_empty() {
        return Err(Error::config("tenantId must not be empty"));
    }
    if !trimmed
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
    {
        return Err(Error::config(format!(
            "tenantId '{trimmed}' may only contain letters, digits, '-' and '_'"
        )));
    }
    Ok(trimmed)
}

// ============================================================================
// ServiceFamily
// ============================================================================

/// An upstream service family. One client flavour exists per family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceFamily {
    /// Claims lifecycle service.
    Claims,
    /// Policy administration service.
    Policy,
    /// Forms and document-AI processing.
    Documents,
    /// Business ledger (transactions, bordereaux).
    Ledger,
    /// Tenant configuration service.
    Tenant,
    /// Identity and user directory.
    Identity,
}

impl ServiceFamily {
    /// Every family, in registration order.
    pub const ALL: [ServiceFamily; 6] = [
        ServiceFamily::Claims,
        ServiceFamily::Policy,
        ServiceFamily::Documents,
        ServiceFamily::Ledger,
        ServiceFamily::Tenant,
        ServiceFamily::Identity,
    ];

    /// Lowercase family name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Claims => "claims",
            Self::Policy => "policy",
            Self::Documents => "documents",
            Self::Ledger => "ledger",
            Self::Tenant => "tenant",
            Self::Identity => "identity",
        }
    }

    /// Path of the token-exchange endpoint, relative to the base URL.
    pub fn default_token_path(&self) -> &'static str {
        match self {
            Self::Documents => "/oauth/token",
            Self::Tenant => "/auth/login",
            _ => "/api/token",
        }
    }

    /// Whether the family's services are multi-tenant and expect `X-Tenant-ID`.
    pub fn default_tenant_header(&self) -> bool {
        matches!(
            self,
            Self::Claims | Self::Policy | Self::Ledger | Self::Tenant
        )
    }

    /// Name of the organization member of the credential triple.
    pub fn default_org_field(&self) -> &'static str {
        match self {
            Self::Tenant => "tenantId",
            _ => "organizationId",
        }
    }
}

impl fmt::Display for ServiceFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceFamily {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|family| family.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::config(format!("unknown service family '{s}'")))
    }
}

// ============================================================================
// ServiceEndpoint
// ============================================================================

/// Where and how to reach one service family.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceEndpoint {
    /// Base URL, optionally containing `{tenantId}`.
    pub base_url: String,
    /// Token-exchange path appended to the resolved base URL.
    pub token_path: String,
    /// Send `X-Tenant-ID` on every request when a tenant is known.
    pub tenant_header: bool,
    /// Name of the organization member of the credential triple.
    pub org_field: String,
}

impl ServiceEndpoint {
    /// Endpoint with the family's defaults.
    pub fn new(family: ServiceFamily, base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token_path: family.default_token_path().to_string(),
            tenant_header: family.default_tenant_header(),
            org_field: family.default_org_field().to_string(),
        }
    }

    /// Override the token-exchange path.
    pub fn with_token_path(mut self, path: impl Into<String>) -> Self {
        self.token_path = path.into();
        self
    }

    /// Whether the base URL must be templated with a tenant id.
    pub fn is_tenant_templated(&self) -> bool {
        self.base_url.contains(TENANT_PLACEHOLDER)
    }

    /// Resolve the base URL for a tenant.
    ///
    /// Fails when the URL is templated and no tenant was supplied.
    pub fn resolve_base_url(&self, tenant_id: Option<&str>) -> Result<String> {
        if !self.is_tenant_templated() {
            return Ok(self.base_url.clone());
        }
        match tenant_id.map(str::trim).filter(|t| !t.is_empty()) {
            Some(tenant) => Ok(self
                .base_url
                .replace(TENANT_PLACEHOLDER, validate_tenant_id(tenant)?)),
            None => Err(Error::config(format!(
                "base URL '{}' requires a tenantId",
                self.base_url
            ))),
        }
    }

    /// Full URL of the token-exchange endpoint for a tenant.
    pub fn token_url(&self, tenant_id: Option<&str>) -> Result<String> {
        let base = self.resolve_base_url(tenant_id)?;
        Ok(format!("{base}/{}", self.token_path.trim_start_matches('/')))
    }
}

// ============================================================================
// GatewayConfig
// ============================================================================

/// Gateway-wide configuration.
#[derive(Clone, Debug, Default)]
pub struct GatewayConfig {
    /// Server name reported to MCP clients.
    pub server_name: String,
    /// Configured upstream families.
    pub endpoints: BTreeMap<ServiceFamily, ServiceEndpoint>,
    /// Per-request timeout. `None` means no client-side limit.
    pub request_timeout: Option<Duration>,
}

impl GatewayConfig {
    /// Empty configuration with a server name.
    pub fn new(server_name: impl Into<String>) -> Self {
        Self {
            server_name: server_name.into(),
            ..Self::default()
        }
    }

    /// Add or replace a family's endpoint.
    pub fn with_endpoint(mut self, family: ServiceFamily, endpoint: ServiceEndpoint) -> Self {
        self.endpoints.insert(family, endpoint);
        self
    }

    /// Set the per-request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Endpoint of a family, or a configuration error if it isn't configured.
    pub fn endpoint(&self, family: ServiceFamily) -> Result<&ServiceEndpoint> {
        self.endpoints.get(&family).ok_or_else(|| {
            Error::config(format!("no base URL configured for the {family} service"))
        })
    }

    /// Families with a configured endpoint.
    pub fn families(&self) -> Vec<ServiceFamily> {
        self.endpoints.keys().copied().collect()
    }

    /// Check that every configured base URL is an http(s) URL.
    pub fn validate(&self) -> Result<()> {
        for (family, endpoint) in &self.endpoints {
            let url = endpoint.base_url.as_str();
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(Error::config(format!(
                    "{family} base URL must use http or https, got '{url}'"
                )));
            }
        }
        if self.endpoints.is_empty() {
            log::warn!("No upstream services configured; only built-in tools will be available");
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

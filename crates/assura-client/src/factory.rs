//! The one way to build a [`ServiceClient`].
//!
//! Tool handlers never assemble clients themselves. They hand the factory a
//! family and an auth source (or their raw arguments) and get back a client
//! with a fresh [`TokenHolder`], so no token is shared between invocations.

use std::sync::Arc;

use assura_auth::{AuthSource, Clock, SystemClock, TokenHolder};
use assura_core::{Error, GatewayConfig, Result, ServiceFamily, validate_tenant_id};
use serde_json::{Map, Value};

use crate::client::ServiceClient;

/// Tool parameter scoping a call to a tenant.
pub const TENANT_PARAM: &str = "tenantId";

/// Builds per-call [`ServiceClient`]s from the gateway configuration.
///
/// Cheap to clone; the underlying `reqwest::Client` (and its connection pool)
/// is shared.
#[derive(Clone)]
pub struct ClientFactory {
    config: Arc<GatewayConfig>,
    http: reqwest::Client,
    clock: Arc<dyn Clock>,
}

impl ClientFactory {
    /// Validate the configuration and build the shared HTTP client.
    pub fn new(config: GatewayConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = reqwest::Client::builder().user_agent(concat!(
            "assura-gateway/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| Error::config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            config: Arc::new(config),
            http,
            clock: Arc::new(SystemClock),
        })
    }

    /// Use a different time source for token expiry.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// The configuration this factory was built from.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Whether a family has a configured endpoint.
    pub fn has_family(&self, family: ServiceFamily) -> bool {
        self.config.endpoints.contains_key(&family)
    }

    /// Build a client for `family` authenticated by `auth`.
    ///
    /// A non-blank tenant id must pass [`validate_tenant_id`]; it is used
    /// for URL templating and the tenant header.
    pub fn client(
        &self,
        family: ServiceFamily,
        auth: AuthSource,
        tenant_id: Option<&str>,
    ) -> Result<ServiceClient> {
        let endpoint = self.config.endpoint(family)?;
        let tenant_id = tenant_id
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(validate_tenant_id)
            .transpose()?
            .map(str::to_string);

        let base_url = endpoint.resolve_base_url(tenant_id.as_deref())?;
        let token_url = endpoint.token_url(tenant_id.as_deref())?;
        let tokens = TokenHolder::new(auth, token_url, self.http.clone())
            .with_org_field(endpoint.org_field.clone())
            .with_clock(Arc::clone(&self.clock));

        Ok(ServiceClient::new(
            self.http.clone(),
            family,
            base_url,
            tenant_id,
            endpoint.tenant_header,
            tokens,
        ))
    }

    /// Build a client straight from a tool's argument map.
    ///
    /// The tenant is the `tenantId` argument when given; otherwise, for
    /// credential auth, the triple's organization id.
    pub fn client_from_params(
        &self,
        family: ServiceFamily,
        params: &Map<String, Value>,
    ) -> Result<ServiceClient> {
        let endpoint = self.config.endpoint(family)?;
        let auth = AuthSource::from_params(params, &endpoint.org_field)?;

        let explicit = params
            .get(TENANT_PARAM)
            .and_then(Value::as_str)
            .filter(|t| !t.trim().is_empty());
        let tenant = match (&auth, explicit) {
            (_, Some(tenant)) => Some(tenant.to_string()),
            (AuthSource::Credentials(creds), None) => Some(creds.organization_id.clone()),
            (AuthSource::Token(_), None) => None,
        };

        self.client(family, auth, tenant.as_deref())
    }
}

// ============================================================================
// Tests
// ============================================================================

//! Bearer token resolution with expiry-aware caching.
//!
//! A [`TokenHolder`] belongs to exactly one service client. Given a
//! caller-supplied token it hands that token back untouched. Given
//! credentials it exchanges them on first use and again whenever the cached
//! token is within [`SAFETY_MARGIN`] of expiring.

use std::sync::Arc;
use std::time::Duration;

use assura_core::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::sync::Mutex;

use crate::clock::{Clock, SystemClock};
use crate::credentials::{AuthSource, CLIENT_ID_PARAM, CLIENT_SECRET_PARAM, Credentials};

/// Refresh this long before the upstream expiry so a token never lapses mid-flight.
pub const SAFETY_MARGIN: Duration = Duration::from_secs(5 * 60);

/// Lifetime assumed when the exchange response omits `expires_in`.
pub const DEFAULT_EXPIRES_IN_SECS: u64 = 3600;

/// A cached bearer token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BearerToken {
    /// Token value sent as `Authorization: Bearer <value>`.
    pub value: String,
    /// Absolute expiry in epoch milliseconds.
    pub expires_at_ms: i64,
}

impl BearerToken {
    /// Whether the token must be replaced at `now_ms`.
    pub fn needs_refresh(&self, now_ms: i64) -> bool {
        now_ms >= self.expires_at_ms.saturating_sub(SAFETY_MARGIN.as_millis() as i64)
    }
}

/// Body returned by a token-exchange endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    /// The bearer token. Some services call it `access_token`.
    #[serde(alias = "access_token")]
    pub token: String,
    /// Lifetime in seconds.
    #[serde(default)]
    pub expires_in: Option<u64>,
    /// Usually `Bearer`.
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Resolves an [`AuthSource`] to a bearer token.
pub struct TokenHolder {
    source: AuthSource,
    token_url: String,
    org_field: String,
    http: reqwest::Client,
    clock: Arc<dyn Clock>,
    cached: Mutex<Option<BearerToken>>,
}

impl TokenHolder {
    /// Create a holder that exchanges credentials at `token_url`.
    ///
    /// `token_url` is unused for [`AuthSource::Token`].
    pub fn new(source: AuthSource, token_url: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            source,
            token_url: token_url.into(),
            org_field: "organizationId".to_string(),
            http,
            clock: Arc::new(SystemClock),
            cached: Mutex::new(None),
        }
    }

    /// Name the organization member of the exchange body (`organizationId`, `tenantId`).
    pub fn with_org_field(mut self, org_field: impl Into<String>) -> Self {
        self.org_field = org_field.into();
        self
    }

    /// Use a different time source.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// The currently cached token, if an exchange has happened.
    pub async fn cached(&self) -> Option<BearerToken> {
        self.cached.lock().await.clone()
    }

    /// Produce a bearer token for the next outbound call.
    pub async fn resolve(&self) -> Result<String> {
        let creds = match &self.source {
            AuthSource::Token(token) => return Ok(token.clone()),
            AuthSource::Credentials(creds) => creds,
        };

        // Held across the exchange so concurrent resolutions share one call.
        let mut cached = self.cached.lock().await;
        let now = self.clock.now_ms();
        if let Some(token) = cached.as_ref().filter(|t| !t.needs_refresh(now)) {
            return Ok(token.value.clone());
        }

        log::debug!(
            "Exchanging credentials for client '{}' at {}",
            creds.client_id,
            self.token_url
        );
        let response = self.exchange(creds).await?;
        let expires_in = response.expires_in.unwrap_or(DEFAULT_EXPIRES_IN_SECS);
        let lifetime_ms = i64::try_from(expires_in)
            .unwrap_or(i64::MAX)
            .saturating_mul(1000);
        let token = BearerToken {
            value: response.token,
            expires_at_ms: self.clock.now_ms().saturating_add(lifetime_ms),
        };
        let value = token.value.clone();
        *cached = Some(token);
        Ok(value)
    }

    async fn exchange(&self, creds: &Credentials) -> Result<TokenResponse> {
        let mut body = serde_json::Map::new();
        body.insert(CLIENT_ID_PARAM.to_string(), json!(creds.client_id));
        body.insert(CLIENT_SECRET_PARAM.to_string(), json!(creds.client_secret));
        body.insert(self.org_field.clone(), json!(creds.organization_id));

        let response = self
            .http
            .post(&self.token_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::auth(None, format!("token endpoint unreachable: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("Token exchange rejected with {status}");
            return Err(Error::auth(
                Some(status.as_u16()),
                format!("token endpoint returned {status}"),
            ));
        }

        let parsed: TokenResponse = response.json().await.map_err(|e| {
            Error::auth(
                Some(status.as_u16()),
                format!("malformed token response: {e}"),
            )
        })?;
        if parsed.token.is_empty() {
            return Err(Error::auth(
                Some(status.as_u16()),
                "token endpoint returned an empty token",
            ));
        }
        Ok(parsed)
    }
}

// ============================================================================
// Tests
// ============================================================================

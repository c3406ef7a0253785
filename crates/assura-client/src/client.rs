//! Authenticated client for one upstream service family.

use assura_auth::TokenHolder;
use assura_core::{Error, Result, ServiceFamily};
use reqwest::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;

use crate::query::QueryParams;
use crate::response::parse_response;

/// Header carrying the tenant scope on multi-tenant services.
pub const TENANT_HEADER: &str = "X-Tenant-ID";

/// Performs authenticated calls against one family's base URL.
///
/// Built by [`ClientFactory`](crate::ClientFactory); owns its
/// [`TokenHolder`] and therefore its cached token.
pub struct ServiceClient {
    http: reqwest::Client,
    family: ServiceFamily,
    base_url: String,
    tenant_id: Option<String>,
    tenant_header: bool,
    tokens: TokenHolder,
    extra_headers: HeaderMap,
}

impl ServiceClient {
    pub(crate) fn new(
        http: reqwest::Client,
        family: ServiceFamily,
        base_url: String,
        tenant_id: Option<String>,
        tenant_header: bool,
        tokens: TokenHolder,
    ) -> Self {
        Self {
            http,
            family,
            base_url,
            tenant_id,
            tenant_header,
            tokens,
            extra_headers: HeaderMap::new(),
        }
    }

    /// Add a header sent on every request (e.g. `Accept-Language`).
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| Error::config(format!("invalid header name '{name}': {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| Error::config(format!("invalid value for header '{name}': {e}")))?;
        self.extra_headers.insert(name, value);
        Ok(self)
    }

    /// The family this client talks to.
    pub fn family(&self) -> ServiceFamily {
        self.family
    }

    /// Resolved base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Tenant scope, if any.
    pub fn tenant_id(&self) -> Option<&str> {
        self.tenant_id.as_deref()
    }

    /// Issue one authenticated request and parse the response.
    ///
    /// `body` is ignored for methods that carry none (`GET`, `HEAD`).
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        query: Option<&QueryParams>,
        body: Option<&Value>,
    ) -> Result<Value> {
        let token = self.tokens.resolve().await?;
        let url = self.url(path, query);
        log::debug!("{} {} {}", self.family, method, path);

        let mut builder = self
            .http
            .request(method.clone(), &url)
            .bearer_auth(token)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json");

        if self.tenant_header
            && let Some(tenant) = &self.tenant_id
        {
            builder = builder.header(TENANT_HEADER, tenant);
        }
        builder = builder.headers(self.extra_headers.clone());

        if let Some(body) = body.filter(|_| method_allows_body(&method)) {
            builder = builder.body(serde_json::to_vec(body)?);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Error::network(format!("{} request failed: {e}", self.family)))?;
        parse_response(response).await
    }

    /// `GET` with query parameters.
    pub async fn get(&self, path: &str, query: &QueryParams) -> Result<Value> {
        self.request(Method::GET, path, Some(query), None).await
    }

    /// `POST` a JSON body.
    pub async fn post(&self, path: &str, body: &Value) -> Result<Value> {
        self.request(Method::POST, path, None, Some(body)).await
    }

    /// `PUT` a JSON body.
    pub async fn put(&self, path: &str, body: &Value) -> Result<Value> {
        self.request(Method::PUT, path, None, Some(body)).await
    }

    /// `PATCH` a JSON body.
    pub async fn patch(&self, path: &str, body: &Value) -> Result<Value> {
        self.request(Method::PATCH, path, None, Some(body)).await
    }

    /// `DELETE` a resource.
    pub async fn delete(&self, path: &str) -> Result<Value> {
        self.request(Method::DELETE, path, None, None).await
    }

    fn url(&self, path: &str, query: Option<&QueryParams>) -> String {
        let mut url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        if let Some(qs) = query.map(QueryParams::to_query_string).filter(|qs| !qs.is_empty()) {
            url.push(if url.contains('?') { '&' } else { '?' });
            url.push_str(&qs);
        }
        url
    }
}

fn method_allows_body(method: &Method) -> bool {
    !matches!(*method, Method::GET | Method::HEAD)
}

// ============================================================================
// Tests
// ============================================================================

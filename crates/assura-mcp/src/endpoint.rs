//! REST endpoints expressed as tools.
//!
//! An [`EndpointTool`] is pure data: a name, a description, the service
//! family, a verb, a path template and the parameter list. [`EndpointTool::invoke`]
//! interprets any descriptor, so adding a tool never means writing a handler.
//!
//! ```rust,ignore
//! let tool = EndpointTool::get(ServiceFamily::Claims, "get_claim", "/api/v1/claims/{claimId}")
//!     .describe("Fetch one claim by id")
//!     .param(ParamSpec::path("claimId", "Claim identifier"));
//!
//! let entry = tool.into_entry(factory.clone());
//! ```

use std::sync::Arc;

use assura_auth::{BEARER_TOKEN_PARAM, CLIENT_ID_PARAM, CLIENT_SECRET_PARAM};
use assura_client::{ClientFactory, Method, QueryParams, TENANT_PARAM};
use assura_core::{Error, Result, ServiceFamily};
use rmcp::model::{CallToolResult, Tool, ToolAnnotations};
use serde_json::{Map, Value};

use crate::envelope::{self, Metadata};
use crate::params::{self, ParamLocation, ParamSpec};
use crate::table::ToolEntry;

/// Tool parameter forwarded as the `Accept-Language` header.
pub const ACCEPT_LANGUAGE_PARAM: &str = "acceptLanguage";

/// Descriptor of one tool wrapping one REST endpoint.
#[derive(Clone, Debug)]
pub struct EndpointTool {
    /// Unique tool name.
    pub name: String,
    /// Shown to the model.
    pub description: String,
    /// Which service answers.
    pub family: ServiceFamily,
    /// HTTP verb.
    pub method: Method,
    /// Path with `{param}` placeholders.
    pub path: String,
    /// Declared parameters, excluding the auth parameters added by [`Self::params`].
    pub declared: Vec<ParamSpec>,
}

impl EndpointTool {
    /// Describe an endpoint.
    pub fn new(
        family: ServiceFamily,
        method: Method,
        name: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            family,
            method,
            path: path.into(),
            declared: Vec::new(),
        }
    }

    /// A `GET` endpoint.
    pub fn get(family: ServiceFamily, name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(family, Method::GET, name, path)
    }

    /// A `POST` endpoint.
    pub fn post(family: ServiceFamily, name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(family, Method::POST, name, path)
    }

    /// A `PUT` endpoint.
    pub fn put(family: ServiceFamily, name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(family, Method::PUT, name, path)
    }

    /// A `PATCH` endpoint.
    pub fn patch(family: ServiceFamily, name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(family, Method::PATCH, name, path)
    }

    /// A `DELETE` endpoint.
    pub fn delete(family: ServiceFamily, name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(family, Method::DELETE, name, path)
    }

    /// Set the description.
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Declare a parameter.
    pub fn param(mut self, spec: ParamSpec) -> Self {
        self.declared.push(spec);
        self
    }

    /// Declared parameters followed by the family's auth parameters and
    /// `acceptLanguage`.
    ///
    /// Parameters whose names are already declared are not repeated.
    /// `tenantId` is always offered: it fills templated base URLs as well
    /// as the tenant header.
    pub fn params(&self) -> Vec<ParamSpec> {
        let org_field = self.family.default_org_field();
        let mut auth = vec![
            ParamSpec::auth(
                BEARER_TOKEN_PARAM,
                "Pre-issued bearer token; takes precedence over client credentials",
            ),
            ParamSpec::auth(CLIENT_ID_PARAM, "OAuth client id"),
            ParamSpec::auth(CLIENT_SECRET_PARAM, "OAuth client secret"),
            ParamSpec::auth(org_field, "Organization the client credentials belong to"),
        ];
        if org_field != TENANT_PARAM {
            auth.push(ParamSpec::auth(
                TENANT_PARAM,
                "Tenant scope; defaults to the credentials' organization",
            ));
        }
        auth.push(ParamSpec::header(
            ACCEPT_LANGUAGE_PARAM,
            "Accept-Language",
            "Preferred response language, e.g. de-CH",
        ));

        let mut all = self.declared.clone();
        for spec in auth {
            if !all.iter().any(|p| p.name == spec.name) {
                all.push(spec);
            }
        }
        all
    }

    /// The MCP tool definition.
    pub fn tool(&self) -> Tool {
        let read_only = matches!(self.method, Method::GET | Method::HEAD);
        Tool::new(
            self.name.clone(),
            self.description.clone(),
            Arc::new(params::input_schema(&self.params())),
        )
        .annotate(
            ToolAnnotations::new()
                .read_only(read_only)
                .destructive(self.method == Method::DELETE)
                .idempotent(self.method != Method::POST)
                .open_world(true),
        )
    }

    /// Substitute `{name}` placeholders with URL-encoded argument values.
    pub fn render_path(&self, args: &Map<String, Value>) -> Result<String> {
        let mut out = String::with_capacity(self.path.len());
        let mut rest = self.path.as_str();

        while let Some(start) = rest.find('{') {
            let Some(len) = rest[start..].find('}') else {
                break;
            };
            let name = &rest[start + 1..start + len];
            let value = args
                .get(name)
                .and_then(scalar_text)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| Error::invalid_param(name, "is required in the path"))?;

            out.push_str(&rest[..start]);
            out.push_str(&urlencoding::encode(&value));
            rest = &rest[start + len + 1..];
        }
        out.push_str(rest);
        Ok(out)
    }

    /// Query parameters present in `args`, in declaration order.
    pub fn query(&self, args: &Map<String, Value>) -> QueryParams {
        self.located(ParamLocation::Query, args)
            .fold(QueryParams::new(), |q, (name, value)| q.push(name, value.clone()))
    }

    /// JSON body built from the body parameters present in `args`.
    ///
    /// `None` when the tool declares no body parameters.
    pub fn body(&self, args: &Map<String, Value>) -> Option<Value> {
        if !self.declared.iter().any(|p| p.location == ParamLocation::Body) {
            return None;
        }
        let body: Map<String, Value> = self
            .located(ParamLocation::Body, args)
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect();
        Some(Value::Object(body))
    }

    /// `(param, header, value)` for each header parameter present in `args`.
    fn headers<'a>(&self, args: &'a Map<String, Value>) -> Vec<(String, &'static str, &'a str)> {
        self.params()
            .into_iter()
            .filter_map(|p| match p.location {
                ParamLocation::Header(header) => args
                    .get(&p.name)
                    .and_then(Value::as_str)
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .map(|v| (p.name, header, v)),
                _ => None,
            })
            .collect()
    }

    fn located<'a>(
        &'a self,
        location: ParamLocation,
        args: &'a Map<String, Value>,
    ) -> impl Iterator<Item = (&'a str, &'a Value)> + 'a {
        self.declared
            .iter()
            .filter(move |p| p.location == location)
            .filter_map(move |p| {
                args.get(&p.name)
                    .filter(|v| !v.is_null())
                    .map(|v| (p.name.as_str(), v))
            })
    }

    /// Run the tool: validate, authenticate, call, wrap.
    ///
    /// Never fails at the protocol level; every error becomes a failure
    /// envelope with `is_error` set.
    pub async fn invoke(&self, factory: &ClientFactory, args: Value) -> CallToolResult {
        match self.execute(factory, args).await {
            Ok((data, path)) => envelope::success(
                data,
                Metadata::now(&self.name, self.family, self.method.as_str(), path),
            ),
            Err(err) => {
                log::warn!("tool {} failed: {} ({})", self.name, err, err.kind());
                envelope::failure(&err)
            }
        }
    }

    async fn execute(&self, factory: &ClientFactory, args: Value) -> Result<(Value, String)> {
        let args = params::validate(&self.params(), args)?;
        let path = self.render_path(&args)?;
        let query = self.query(&args);
        let body = self.body(&args);

        let mut client = factory.client_from_params(self.family, &args)?;
        for (name, header, value) in self.headers(&args) {
            client = client
                .with_header(header, value)
                .map_err(|_| Error::invalid_param(name, "is not a valid header value"))?;
        }
        let data = client
            .request(self.method.clone(), &path, Some(&query), body.as_ref())
            .await?;
        Ok((data, path))
    }

    /// Bind the descriptor to a factory, producing a table entry.
    pub fn into_entry(self, factory: ClientFactory) -> ToolEntry {
        let tool = self.tool();
        let descriptor = Arc::new(self);
        ToolEntry::new(tool, move |args| {
            let descriptor = Arc::clone(&descriptor);
            let factory = factory.clone();
            Box::pin(async move { Ok(descriptor.invoke(&factory, args).await) })
        })
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================

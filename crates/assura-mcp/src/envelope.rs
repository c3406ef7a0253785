//! Success and failure response bodies.
//!
//! Every endpoint tool answers with a single text content block holding one
//! of these envelopes, so clients can branch on `success` without parsing
//! prose.

use assura_core::{Error, ServiceFamily};
use chrono::{SecondsFormat, Utc};
use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use serde_json::{Value, json};

/// Request facts echoed back in a success envelope.
#[derive(Clone, Debug, Serialize)]
pub struct Metadata {
    /// Tool name.
    pub tool: String,
    /// Service family that answered.
    pub service: ServiceFamily,
    /// HTTP verb.
    pub method: String,
    /// Rendered request path.
    pub path: String,
    /// RFC 3339 completion time.
    pub timestamp: String,
}

impl Metadata {
    /// Stamp metadata with the current time.
    pub fn now(
        tool: impl Into<String>,
        service: ServiceFamily,
        method: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            tool: tool.into(),
            service,
            method: method.into(),
            path: path.into(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// `{"success": true, ...}`
#[derive(Clone, Debug, Serialize)]
pub struct SuccessEnvelope {
    /// Always `true`.
    pub success: bool,
    /// Upstream payload.
    pub data: Value,
    /// `"<tool> completed"`.
    pub message: String,
    /// Request facts.
    pub metadata: Metadata,
}

/// Machine-readable failure classification.
#[derive(Clone, Debug, Serialize)]
pub struct FailureDetails {
    /// [`Error::kind`].
    pub kind: &'static str,
    /// HTTP status, when one was received.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// [`Error::is_retryable`]: resending the same call may succeed.
    pub retryable: bool,
}

/// Hints for the caller on what went wrong.
#[derive(Clone, Debug, Serialize)]
pub struct Troubleshooting {
    /// Plausible causes, most likely first.
    pub likely_causes: Vec<&'static str>,
    /// What to try next.
    pub suggestion: &'static str,
}

/// `{"success": false, ...}`
#[derive(Clone, Debug, Serialize)]
pub struct FailureEnvelope {
    /// Always `false`.
    pub success: bool,
    /// Human-readable message.
    pub error: String,
    /// Classification.
    pub details: FailureDetails,
    /// Hints.
    pub troubleshooting: Troubleshooting,
}

impl SuccessEnvelope {
    /// Wrap upstream data.
    pub fn new(data: Value, metadata: Metadata) -> Self {
        Self {
            success: true,
            data,
            message: format!("{} completed", metadata.tool),
            metadata,
        }
    }
}

impl FailureEnvelope {
    /// Describe an error.
    pub fn from_error(err: &Error) -> Self {
        Self {
            success: false,
            error: err.to_string(),
            details: FailureDetails {
                kind: err.kind(),
                status: err.status(),
                retryable: err.is_retryable(),
            },
            troubleshooting: troubleshooting(err),
        }
    }
}

/// Troubleshooting hints for an error, by kind and HTTP status.
pub fn troubleshooting(err: &Error) -> Troubleshooting {
    let (likely_causes, suggestion) = match (err.kind(), err.status()) {
        ("invalid_params", _) => (
            vec!["A required parameter is missing", "A parameter has the wrong type"],
            "Check the tool's input schema and resend the call",
        ),
        ("configuration", _) => (
            vec![
                "No bearerToken and an incomplete client credential set",
                "The service family has no base URL configured",
            ],
            "Provide bearerToken, or clientId, clientSecret and the organization id",
        ),
        ("auth", Some(401 | 403)) => (
            vec![
                "Client credentials were rejected",
                "The client is not enabled for this organization",
            ],
            "Verify clientId, clientSecret and the organization id",
        ),
        ("auth", _) => (
            vec!["The token endpoint is unreachable or failing"],
            "Retry later or supply a pre-issued bearerToken",
        ),
        ("network", _) => (
            vec!["The service is unreachable", "DNS or TLS failure", "Request timed out"],
            "Check the configured base URL and network access, then retry",
        ),
        (_, Some(401)) => (
            vec!["The bearer token is expired or invalid"],
            "Obtain a fresh token or pass client credentials instead",
        ),
        (_, Some(403)) => (
            vec!["The caller lacks permission for this resource", "Wrong tenant scope"],
            "Check the user's roles and the tenantId",
        ),
        (_, Some(404)) => (
            vec!["The identifier does not exist", "The resource belongs to another tenant"],
            "Verify the identifier, for example with a list tool",
        ),
        (_, Some(409)) => (
            vec!["The resource changed or is in a conflicting state"],
            "Fetch the current state and retry with updated values",
        ),
        (_, Some(422)) => (
            vec!["The request body failed upstream validation"],
            "Review the error message and correct the offending fields",
        ),
        (_, Some(429)) => (
            vec!["The upstream rate limit was exceeded"],
            "Wait before retrying and reduce request frequency",
        ),
        (_, Some(500..)) => (
            vec!["The upstream service is failing or unavailable"],
            "Retry later; contact the service owner if it persists",
        ),
        _ => (
            vec!["The upstream service rejected the request"],
            "Review the error message and the request parameters",
        ),
    };
    Troubleshooting {
        likely_causes,
        suggestion,
    }
}

/// Render a success envelope as a tool result.
pub fn success(data: Value, metadata: Metadata) -> CallToolResult {
    CallToolResult::success(vec![Content::text(render(&SuccessEnvelope::new(data, metadata)))])
}

/// Render a failure envelope as an error tool result.
pub fn failure(err: &Error) -> CallToolResult {
    CallToolResult::error(vec![Content::text(render(&FailureEnvelope::from_error(err)))])
}

fn render<T: Serialize>(envelope: &T) -> String {
    serde_json::to_string_pretty(envelope).unwrap_or_else(|e| {
        log::error!("failed to serialize envelope: {e}");
        json!({
            "success": false,
            "error": format!("failed to serialize response: {e}"),
        })
        .to_string()
    })
}

// ============================================================================
// Tests
// ============================================================================

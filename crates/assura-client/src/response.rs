//! Response parsing and error normalization.

use assura_core::{Error, Result};
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

/// Pull a human-readable message out of an upstream error body.
///
/// Looks for a string `message`, then `error` (a string, or an object with
/// its own `message`). Returns `None` for non-JSON bodies or when neither
/// field yields a non-empty string.
pub fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let obj = value.as_object()?;

    let non_empty = |v: Option<&Value>| {
        v.and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    non_empty(obj.get("message")).or_else(|| match obj.get("error") {
        Some(Value::Object(inner)) => non_empty(inner.get("message")),
        other => non_empty(other),
    })
}

/// `HTTP <status>: <statusText>`.
pub fn fallback_message(status: StatusCode) -> String {
    format!(
        "HTTP {}: {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown Status")
    )
}

/// Turn a response into a JSON value or a normalized error.
pub(crate) async fn parse_response(response: reqwest::Response) -> Result<Value> {
    let status = response.status();
    let is_json = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.to_ascii_lowercase().contains("json"));

    let body = response
        .text()
        .await
        .map_err(|e| Error::network(format!("failed to read response body: {e}")))?;

    if !status.is_success() {
        let message = error_message(&body).unwrap_or_else(|| fallback_message(status));
        log::debug!("Upstream returned {status}: {message}");
        return Err(Error::upstream(status.as_u16(), message));
    }

    if !is_json {
        return Ok(Value::String(body));
    }
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(&body)?)
}

// ============================================================================
// Tests
// ============================================================================

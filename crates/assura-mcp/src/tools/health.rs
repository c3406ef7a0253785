//! Built-in `health` tool.
//!
//! Reports server identity, the number of tools exposed, and which
//! upstream service families are configured. Makes no upstream calls.

use crate::error::McpErrorExt;
use crate::registry::{ToolRegistry, ToolResult};
use assura_core::ServiceFamily;
use rmcp::model::{CallToolResult, Content, ErrorData, Tool};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Health check response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Server status ("healthy").
    pub status: String,
    /// Server name.
    pub server_name: String,
    /// Server version.
    pub version: String,
    /// Number of registered tools, including `health`.
    pub tool_count: usize,
    /// Service families with a configured base URL.
    pub families: Vec<ServiceFamily>,
}

/// A tool registry that provides the `health` tool.
///
/// Captures server metadata at construction time and reports it
/// when the tool is called.
pub struct HealthTools {
    response: HealthResponse,
}

impl HealthTools {
    /// Create health tools with server metadata.
    ///
    /// `total_tool_count` should include the health tool itself.
    pub fn new(
        server_name: impl Into<String>,
        version: impl Into<String>,
        families: Vec<ServiceFamily>,
        total_tool_count: usize,
    ) -> Self {
        Self {
            response: HealthResponse {
                status: "healthy".to_string(),
                server_name: server_name.into(),
                version: version.into(),
                tool_count: total_tool_count,
                families,
            },
        }
    }
}

impl ToolRegistry for HealthTools {
    fn tools(&self) -> Vec<Tool> {
        let mut schema = serde_json::Map::new();
        schema.insert("type".into(), Value::String("object".into()));
        schema.insert("properties".into(), Value::Object(serde_json::Map::new()));
        vec![Tool::new(
            "health",
            "Check gateway health: version, tool count and configured service families",
            Arc::new(schema),
        )]
    }

    fn call(&self, name: &str, _args: Value) -> Option<ToolResult> {
        if name != "health" {
            return None;
        }
        let response = self.response.clone();
        Some(Box::pin(async move { render(&response) }))
    }
}

fn render(response: &HealthResponse) -> Result<CallToolResult, ErrorData> {
    let json = serde_json::to_string_pretty(response).map_err(|e| e.to_mcp_error())?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Tests
// ============================================================================

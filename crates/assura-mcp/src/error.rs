//! Error conversions for the MCP boundary.

use rmcp::model::ErrorData;
use thiserror::Error;

/// Convert local failures into protocol-level MCP errors.
///
/// Tool handlers report upstream failures inside the response envelope;
/// this is only for failures of the server itself.
pub trait McpErrorExt {
    /// Map to an rmcp `ErrorData`.
    fn to_mcp_error(&self) -> ErrorData;
}

impl McpErrorExt for serde_json::Error {
    fn to_mcp_error(&self) -> ErrorData {
        ErrorData::internal_error(self.to_string(), None)
    }
}

/// Errors while running the MCP transport.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ServeError {
    /// The MCP handshake with the client failed.
    #[error("MCP initialization failed: {0}")]
    Initialize(String),

    /// The server task ended abnormally.
    #[error("MCP server task failed: {0}")]
    Task(String),

    /// Socket or stdio failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

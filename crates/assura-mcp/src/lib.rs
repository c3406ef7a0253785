//! MCP server infrastructure for the Assura gateway.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      assura-mcp                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ToolRegistry trait — tool listing and dispatch             │
//! │  CompositeRegistry — combine registries, first name wins    │
//! │  ToolTable — explicit (name, description, schema, handler)  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ParamSpec — parameter declarations, schema, validation     │
//! │  EndpointTool — one REST endpoint as a tool (data)          │
//! │  envelope — success / failure response bodies               │
//! ├─────────────────────────────────────────────────────────────┤
//! │  GatewayServer — rmcp ServerHandler over a registry         │
//! │  McpErrorExt — serde_json::Error → rmcp::ErrorData          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Built-in tools:                                            │
//! │  └── health — server status, tool count, families           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use assura_mcp::{CompositeRegistry, GatewayServer, HealthTools, ToolTable};
//!
//! let mut table = ToolTable::new();
//! for tool in claims_tools() {
//!     table.register(tool.into_entry(factory.clone()));
//! }
//!
//! let registry = CompositeRegistry::new()
//!     .add(HealthTools::new("assura", version, families, table.tool_count() + 1))
//!     .add(table);
//!
//! GatewayServer::new(registry).with_name("assura").serve_stdio().await?;
//! ```

pub mod endpoint;
pub mod envelope;
pub mod error;
pub mod params;
pub mod registry;
pub mod server;
pub mod table;
pub mod tools;

/// Re-exported rmcp model types used by tool implementations.
pub use rmcp::model;

// Re-exports — registry
pub use registry::{CompositeRegistry, ToolRegistry, ToolResult};
pub use table::{ToolEntry, ToolHandler, ToolTable};

// Re-exports — tool building blocks
pub use endpoint::EndpointTool;
pub use params::{ParamKind, ParamLocation, ParamSpec};

// Re-exports — server
pub use server::{GatewayServer, ServerConfig};

// Re-exports — error
pub use error::{McpErrorExt, ServeError};

// Re-exports — built-in tools
pub use tools::{HealthResponse, HealthTools};

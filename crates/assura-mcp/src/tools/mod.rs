//! Built-in MCP tools that need no upstream service.

pub mod health;

pub use health::{HealthResponse, HealthTools};

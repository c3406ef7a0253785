#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Assura gateway library
//!
//! Command-line configuration and registry assembly for the gateway binary.

pub mod cli;

use assura_client::ClientFactory;
use assura_mcp::{CompositeRegistry, GatewayServer, HealthTools, ToolRegistry};

pub use cli::{Args, Transport};

/// Assemble the `health` tool and the catalogue of every configured family.
pub fn build_registry(factory: &ClientFactory) -> CompositeRegistry {
    let table = assura_mcp_tools::catalogue(factory);
    let config = factory.config();
    let health = HealthTools::new(
        config.server_name.clone(),
        env!("CARGO_PKG_VERSION"),
        config.families(),
        table.tool_count() + 1,
    );
    CompositeRegistry::new().add(health).add(table)
}

/// Build the server for the given arguments.
pub fn build_server(args: &Args) -> assura_core::Result<GatewayServer> {
    let factory = ClientFactory::new(args.config()?)?;
    let registry = build_registry(&factory);
    tracing::info!(
        tools = registry.tool_count(),
        families = ?factory.config().families(),
        "registry assembled"
    );
    Ok(GatewayServer::new(registry)
        .with_name(args.server_name.clone())
        .with_version(env!("CARGO_PKG_VERSION")))
}

// ============================================================================
// Tests
// ============================================================================

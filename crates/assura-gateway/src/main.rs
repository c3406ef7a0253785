//! Assura gateway entry point.
//!
//! Serves the tool catalogue over stdio by default. Logs go to stderr so
//! stdout stays reserved for the MCP transport.

use anyhow::Context;
use assura_gateway::{Args, Transport, build_server};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,assura=debug".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        transport = ?args.transport,
        "Assura gateway starting"
    );

    let server = build_server(&args).context("invalid gateway configuration")?;

    match args.transport {
        Transport::Stdio => server.serve_stdio().await?,
        Transport::Http => serve_http(server, args.bind).await?,
    }

    tracing::info!("Assura gateway stopped");
    Ok(())
}

#[cfg(feature = "http")]
async fn serve_http(
    server: assura_mcp::GatewayServer,
    bind: std::net::SocketAddr,
) -> anyhow::Result<()> {
    server.serve_http(bind).await?;
    Ok(())
}

#[cfg(not(feature = "http"))]
async fn serve_http(
    _server: assura_mcp::GatewayServer,
    _bind: std::net::SocketAddr,
) -> anyhow::Result<()> {
    anyhow::bail!(
        "HTTP transport requested but assura-gateway was built without the `http` feature"
    )
}

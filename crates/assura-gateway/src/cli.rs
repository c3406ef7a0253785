//! Command-line and environment configuration.

use std::net::SocketAddr;
use std::time::Duration;

use assura_core::{GatewayConfig, Result, ServiceEndpoint, ServiceFamily};
use clap::{Parser, ValueEnum};

/// How MCP clients connect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Transport {
    /// JSON-RPC over stdin/stdout.
    Stdio,
    /// Streamable HTTP at `/mcp` (requires the `http` feature).
    Http,
}

/// Assura MCP gateway
#[derive(Parser, Debug, Clone)]
#[command(name = "assura-gateway", author, version, about, long_about = None)]
pub struct Args {
    /// Claims service base URL
    #[arg(long, env = "ASSURA_CLAIMS_URL")]
    pub claims_url: Option<String>,

    /// Policy service base URL
    #[arg(long, env = "ASSURA_POLICY_URL")]
    pub policy_url: Option<String>,

    /// Documents service base URL; may contain `{tenantId}`
    #[arg(long, env = "ASSURA_DOCUMENTS_URL")]
    pub documents_url: Option<String>,

    /// Ledger service base URL
    #[arg(long, env = "ASSURA_LEDGER_URL")]
    pub ledger_url: Option<String>,

    /// Tenant configuration service base URL
    #[arg(long, env = "ASSURA_TENANT_URL")]
    pub tenant_url: Option<String>,

    /// Identity service base URL
    #[arg(long, env = "ASSURA_IDENTITY_URL")]
    pub identity_url: Option<String>,

    /// Per-request timeout in seconds (default: none)
    #[arg(long, env = "ASSURA_REQUEST_TIMEOUT_SECS")]
    pub request_timeout_secs: Option<u64>,

    /// Transport to serve on
    #[arg(long, env = "ASSURA_TRANSPORT", value_enum, default_value_t = Transport::Stdio)]
    pub transport: Transport,

    /// Listen address for the HTTP transport
    #[arg(long, env = "ASSURA_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Name reported to MCP clients
    #[arg(long, env = "ASSURA_SERVER_NAME", default_value = "assura-gateway")]
    pub server_name: String,
}

impl Args {
    /// Base URL flag for each family, in registration order.
    pub fn urls(&self) -> [(ServiceFamily, Option<&str>); 6] {
        [
            (ServiceFamily::Claims, self.claims_url.as_deref()),
            (ServiceFamily::Policy, self.policy_url.as_deref()),
            (ServiceFamily::Documents, self.documents_url.as_deref()),
            (ServiceFamily::Ledger, self.ledger_url.as_deref()),
            (ServiceFamily::Tenant, self.tenant_url.as_deref()),
            (ServiceFamily::Identity, self.identity_url.as_deref()),
        ]
    }

    /// Build and validate the gateway configuration.
    ///
    /// Families with no (or a blank) URL are left out.
    pub fn config(&self) -> Result<GatewayConfig> {
        let mut config = GatewayConfig::new(self.server_name.clone());

        for (family, url) in self.urls() {
            match url.map(str::trim).filter(|u| !u.is_empty()) {
                Some(url) => {
                    tracing::debug!(%family, url, "service configured");
                    config = config.with_endpoint(family, ServiceEndpoint::new(family, url));
                }
                None => tracing::warn!(%family, "no base URL set; tools not registered"),
            }
        }

        if let Some(secs) = self.request_timeout_secs.filter(|s| *s > 0) {
            config = config.with_request_timeout(Duration::from_secs(secs));
        }

        config.validate()?;
        Ok(config)
    }
}

// ============================================================================
// Tests
// ============================================================================

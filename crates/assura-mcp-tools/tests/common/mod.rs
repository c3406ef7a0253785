//! Common test utilities and harness for catalogue integration tests.

use assura_client::ClientFactory;
use assura_core::{GatewayConfig, ServiceEndpoint, ServiceFamily};
use assura_mcp::model::{CallToolResult, RawContent};
use assura_mcp::{ToolRegistry, ToolTable};
use serde_json::Value;
use wiremock::MockServer;

/// Test harness for integration tests.
///
/// Points every service family at one mock server and builds the full
/// catalogue against it.
pub struct TestHarness {
    /// Upstream stand-in for every family.
    pub server: MockServer,
    /// Factory configured for the mock server.
    pub factory: ClientFactory,
    /// The registered catalogue.
    pub table: ToolTable,
}

impl TestHarness {
    /// Start a mock server and register the catalogue for every family.
    pub async fn new() -> Self {
        Self::with_families(&ServiceFamily::ALL).await
    }

    /// Start a mock server and configure only `families`.
    pub async fn with_families(families: &[ServiceFamily]) -> Self {
        let server = MockServer::start().await;
        let config = families.iter().fold(GatewayConfig::new("assura-test"), |c, &f| {
            c.with_endpoint(f, ServiceEndpoint::new(f, server.uri()))
        });
        let factory = ClientFactory::new(config).expect("valid test config");
        let table = assura_mcp_tools::catalogue(&factory);
        Self {
            server,
            factory,
            table,
        }
    }

    /// Call a tool and return the raw result.
    pub async fn call(&self, name: &str, args: Value) -> CallToolResult {
        self.table
            .call(name, args)
            .unwrap_or_else(|| panic!("tool {name} not registered"))
            .await
            .expect("endpoint tools never fail at the protocol level")
    }

    /// Call a tool and parse its envelope.
    pub async fn envelope(&self, name: &str, args: Value) -> (bool, Value) {
        let result = self.call(name, args).await;
        (result.is_error.unwrap_or(false), envelope_of(&result))
    }
}

/// Parse the JSON envelope out of a tool result.
pub fn envelope_of(result: &CallToolResult) -> Value {
    assert_eq!(result.content.len(), 1, "exactly one content block");
    match &result.content[0].raw {
        RawContent::Text(t) => serde_json::from_str(&t.text).expect("envelope is JSON"),
        other => panic!("expected text content, got {other:?}"),
    }
}

/// Assert the success envelope contract.
pub fn assert_success_envelope(v: &Value, tool: &str) {
    assert_eq!(v["success"], true);
    assert!(v.get("data").is_some());
    assert_eq!(v["message"], format!("{tool} completed"));
    assert_eq!(v["metadata"]["tool"], tool);
    for key in ["service", "method", "path", "timestamp"] {
        assert!(v["metadata"][key].is_string(), "metadata.{key}");
    }
}

/// Assert the failure envelope contract.
pub fn assert_failure_envelope(v: &Value) {
    assert_eq!(v["success"], false);
    assert!(v["error"].is_string());
    assert!(v["details"]["kind"].is_string());
    assert!(v["details"]["retryable"].is_boolean());
    assert!(v["troubleshooting"]["likely_causes"].is_array());
    assert!(v["troubleshooting"]["suggestion"].is_string());
}

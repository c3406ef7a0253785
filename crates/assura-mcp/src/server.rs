//! The gateway's rmcp server handler.
//!
//! [`GatewayServer`] is a thin adapter: it advertises the tools of the
//! registry it holds and forwards `call_tool` by name.

use std::sync::Arc;

use rmcp::model::{
    CallToolRequestParams, CallToolResult, ErrorData, Implementation, ListToolsResult,
    PaginatedRequestParams, ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{RoleServer, ServerHandler, ServiceExt};
use serde_json::Value;

use crate::error::ServeError;
use crate::registry::ToolRegistry;

/// Identity reported during the MCP handshake.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Server name.
    pub name: String,
    /// Server version.
    pub version: String,
    /// Free-form usage notes for the client.
    pub instructions: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "assura-gateway".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            instructions: Some(
                "Tools for the Assura insurance platform services. Every tool accepts either \
                 bearerToken or clientId, clientSecret and the organization id. Responses are \
                 JSON envelopes with a success flag."
                    .to_string(),
            ),
        }
    }
}

/// MCP server over a [`ToolRegistry`].
#[derive(Clone)]
pub struct GatewayServer {
    registry: Arc<dyn ToolRegistry>,
    config: ServerConfig,
}

impl GatewayServer {
    /// Serve the tools of `registry`.
    pub fn new<R: ToolRegistry + 'static>(registry: R) -> Self {
        Self {
            registry: Arc::new(registry),
            config: ServerConfig::default(),
        }
    }

    /// Set the advertised name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.config.name = name.into();
        self
    }

    /// Set the advertised version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.config.version = version.into();
        self
    }

    /// Set the usage notes.
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.config.instructions = Some(instructions.into());
        self
    }

    /// The handshake identity.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// The registry being served.
    pub fn registry(&self) -> &dyn ToolRegistry {
        self.registry.as_ref()
    }

    /// Dispatch one call; unknown names are `invalid_params`.
    pub async fn dispatch(&self, name: &str, args: Value) -> Result<CallToolResult, ErrorData> {
        log::debug!("call_tool {name}");
        match self.registry.call(name, args) {
            Some(future) => future.await,
            None => Err(ErrorData::invalid_params(format!("Unknown tool: {name}"), None)),
        }
    }

    /// Serve over stdin/stdout until the client disconnects.
    pub async fn serve_stdio(self) -> Result<(), ServeError> {
        log::info!(
            "{} {} serving {} tools over stdio",
            self.config.name,
            self.config.version,
            self.registry.tool_count()
        );
        let running = self
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| ServeError::Initialize(e.to_string()))?;
        let reason = running
            .waiting()
            .await
            .map_err(|e| ServeError::Task(e.to_string()))?;
        log::info!("stdio session ended: {reason:?}");
        Ok(())
    }

    /// Serve streamable HTTP at `/mcp` on `bind` until Ctrl-C.
    #[cfg(feature = "http")]
    pub async fn serve_http(self, bind: std::net::SocketAddr) -> Result<(), ServeError> {
        use rmcp::transport::streamable_http_server::{
            StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
        };

        let tool_count = self.registry.tool_count();
        let service = StreamableHttpService::new(
            move || Ok(self.clone()),
            LocalSessionManager::default().into(),
            StreamableHttpServerConfig::default(),
        );
        let router = axum::Router::new().nest_service("/mcp", service);

        let listener = tokio::net::TcpListener::bind(bind).await?;
        log::info!("serving {tool_count} tools at http://{bind}/mcp");
        axum::serve(listener, router)
            .with_graceful_shutdown(async {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    log::error!("failed to listen for shutdown signal: {e}");
                }
            })
            .await?;
        Ok(())
    }
}

impl ServerHandler for GatewayServer {
    fn get_info(&self) -> ServerInfo {
        let info = ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_server_info(Implementation::new(
                self.config.name.clone(),
                self.config.version.clone(),
            ));
        match &self.config.instructions {
            Some(instructions) => info.with_instructions(instructions.clone()),
            None => info,
        }
    }

    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListToolsResult, ErrorData>> + Send + '_ {
        std::future::ready(Ok(ListToolsResult::with_all_items(self.registry.tools())))
    }

    fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<CallToolResult, ErrorData>> + Send + '_ {
        async move {
            let args = request.arguments.map(Value::Object).unwrap_or(Value::Null);
            self.dispatch(&request.name, args).await
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::CompositeRegistry;
    use crate::tools::HealthTools;
    use assura_core::ServiceFamily;
    use rmcp::model::ErrorCode;
    use serde_json::json;

    fn server() -> GatewayServer {
        let registry = CompositeRegistry::new().add(HealthTools::new(
            "assura-test",
            "0.0.1",
            vec![ServiceFamily::Claims],
            1,
        ));
        GatewayServer::new(registry).with_name("assura-test").with_version("0.0.1")
    }

    #[test]
    fn test_info_advertises_tools() {
        let info = server().get_info();
        assert_eq!(info.server_info.name, "assura-test");
        assert_eq!(info.server_info.version, "0.0.1");
        assert!(info.capabilities.tools.is_some());
        assert!(info.instructions.unwrap().contains("bearerToken"));
    }

    #[test]
    fn test_info_without_instructions() {
        let mut server = server();
        server.config.instructions = None;
        let info = server.get_info();
        assert!(info.instructions.is_none());
        assert_eq!(info.server_info.name, "assura-test");
    }

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.name, "assura-gateway");
        assert!(!config.version.is_empty());
    }

    #[tokio::test]
    async fn test_dispatch_known_tool() {
        let result = server().dispatch("health", json!({})).await.unwrap();
        assert_eq!(result.is_error, Some(false));
    }

    #[tokio::test]
    async fn test_dispatch_unknown_tool_is_invalid_params() {
        let err = server().dispatch("nope", Value::Null).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("Unknown tool: nope"));
    }

    #[test]
    fn test_registry_exposed() {
        let server = server();
        assert_eq!(server.registry().tool_count(), 1);
        assert!(server.registry().has_tool("health"));
    }
}

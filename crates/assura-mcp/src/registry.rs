//! Tool registry trait for the gateway's MCP server.
//!
//! [`ToolRegistry`] abstracts over tool listing and dispatch. The
//! [`CompositeRegistry`] combines several registries (the built-in `health`
//! tool, one [`ToolTable`](crate::ToolTable) per service family) into the
//! single registry the server holds.

use rmcp::model::{CallToolResult, ErrorData, Tool};
use serde_json::Value;
use std::collections::HashSet;
use std::future::Future;
use std::pin::Pin;

/// Type alias for async tool handler results.
pub type ToolResult = Pin<Box<dyn Future<Output = Result<CallToolResult, ErrorData>> + Send>>;

/// Trait for registering and dispatching MCP tools.
///
/// The [`GatewayServer`](crate::GatewayServer) delegates `list_tools` and
/// `call_tool` to the registry it holds.
///
/// # Example
///
/// ```rust,ignore
/// struct MyTools { /* ... */ }
///
/// impl ToolRegistry for MyTools {
///     fn tools(&self) -> Vec<Tool> {
///         vec![/* tool definitions */]
///     }
///
///     fn call(&self, name: &str, args: Value) -> Option<ToolResult> {
///         match name {
///             "my_tool" => Some(Box::pin(self.handle_my_tool(args))),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait ToolRegistry: Send + Sync {
    /// Returns information about all available tools.
    fn tools(&self) -> Vec<Tool>;

    /// Dispatches a tool call by name.
    ///
    /// Returns `None` if the tool is not recognized by this registry.
    fn call(&self, name: &str, args: Value) -> Option<ToolResult>;

    /// Returns the number of registered tools.
    fn tool_count(&self) -> usize {
        self.tools().len()
    }

    /// Check if a tool exists by name.
    fn has_tool(&self, name: &str) -> bool {
        self.tools().iter().any(|t| t.name == name)
    }
}

/// A registry that combines multiple sub-registries.
///
/// Registries are consulted in the order they were added. When two expose
/// the same tool name, the earlier one wins for both listing and dispatch.
///
/// # Example
///
/// ```rust,ignore
/// let registry = CompositeRegistry::new()
///     .add(health)
///     .add(claims_table)
///     .add(policy_table);
/// ```
pub struct CompositeRegistry {
    registries: Vec<Box<dyn ToolRegistry>>,
}

impl CompositeRegistry {
    /// Create a new empty composite registry.
    pub fn new() -> Self {
        Self {
            registries: Vec::new(),
        }
    }

    /// Add a sub-registry.
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: ToolRegistry + 'static>(mut self, registry: R) -> Self {
        let shadowed: Vec<String> = registry
            .tools()
            .into_iter()
            .map(|t| t.name.to_string())
            .filter(|name| self.has_tool(name))
            .collect();
        for name in &shadowed {
            log::warn!("tool '{name}' already registered; keeping the first definition");
        }
        self.registries.push(Box::new(registry));
        self
    }

    /// Number of sub-registries.
    pub fn len(&self) -> usize {
        self.registries.len()
    }

    /// Whether no sub-registry has been added.
    pub fn is_empty(&self) -> bool {
        self.registries.is_empty()
    }
}

impl Default for CompositeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolRegistry for CompositeRegistry {
    fn tools(&self) -> Vec<Tool> {
        let mut seen = HashSet::new();
        self.registries
            .iter()
            .flat_map(|r| r.tools())
            .filter(|t| seen.insert(t.name.to_string()))
            .collect()
    }

    fn call(&self, name: &str, args: Value) -> Option<ToolResult> {
        self.registries
            .iter()
            .find(|r| r.has_tool(name))
            .and_then(|r| r.call(name, args))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rmcp::model::{Content, RawContent};
    use serde_json::json;
    use std::sync::Arc;

    fn make_tool(name: &str, description: &str) -> Tool {
        Tool::new(
            name.to_string(),
            description.to_string(),
            Arc::new(serde_json::Map::new()),
        )
    }

    struct TestRegistry {
        label: &'static str,
        tool_list: Vec<Tool>,
    }

    impl TestRegistry {
        fn new(label: &'static str, names: &[&str]) -> Self {
            Self {
                label,
                tool_list: names.iter().map(|n| make_tool(n, label)).collect(),
            }
        }
    }

    impl ToolRegistry for TestRegistry {
        fn tools(&self) -> Vec<Tool> {
            self.tool_list.clone()
        }

        fn call(&self, name: &str, _args: Value) -> Option<ToolResult> {
            if self.has_tool(name) {
                let text = format!("{}:{name}", self.label);
                Some(Box::pin(async move {
                    Ok(CallToolResult::success(vec![Content::text(text)]))
                }))
            } else {
                None
            }
        }
    }

    fn text_of(result: &CallToolResult) -> String {
        match &result.content[0].raw {
            RawContent::Text(t) => t.text.clone(),
            _ => String::new(),
        }
    }

    #[test]
    fn test_tool_count() {
        let registry = TestRegistry::new("r", &["list_claims", "get_claim"]);
        assert_eq!(registry.tool_count(), 2);
    }

    #[test]
    fn test_has_tool() {
        let registry = TestRegistry::new("r", &["get_policy"]);
        assert!(registry.has_tool("get_policy"));
        assert!(!registry.has_tool("missing"));
    }

    #[tokio::test]
    async fn test_call_known_tool() {
        let registry = TestRegistry::new("r", &["get_claim"]);
        let result = registry.call("get_claim", json!({})).unwrap().await.unwrap();
        assert_eq!(result.is_error, Some(false));
        assert_eq!(text_of(&result), "r:get_claim");
    }

    #[test]
    fn test_call_unknown_tool() {
        let registry = TestRegistry::new("r", &["get_claim"]);
        assert!(registry.call("missing", json!({})).is_none());
    }

    #[test]
    fn test_composite_registry_empty() {
        let composite = CompositeRegistry::default();
        assert!(composite.is_empty());
        assert_eq!(composite.tool_count(), 0);
        assert!(!composite.has_tool("anything"));
    }

    #[tokio::test]
    async fn test_composite_registry_combines_and_dispatches() {
        let composite = CompositeRegistry::new()
            .add(TestRegistry::new("claims", &["list_claims"]))
            .add(TestRegistry::new("ledger", &["import_bdx", "validate_bdx"]));

        assert_eq!(composite.len(), 2);
        assert_eq!(composite.tool_count(), 3);

        let result = composite.call("validate_bdx", json!({})).unwrap().await.unwrap();
        assert_eq!(text_of(&result), "ledger:validate_bdx");
        assert!(composite.call("missing", json!({})).is_none());
    }

    #[tokio::test]
    async fn test_composite_registry_first_wins_on_collision() {
        let composite = CompositeRegistry::new()
            .add(TestRegistry::new("first", &["get_policy", "a"]))
            .add(TestRegistry::new("second", &["get_policy", "b"]));

        let names: Vec<String> = composite.tools().iter().map(|t| t.name.to_string()).collect();
        assert_eq!(names, vec!["get_policy", "a", "b"]);

        let listed = composite
            .tools()
            .into_iter()
            .find(|t| t.name == "get_policy")
            .unwrap();
        assert_eq!(listed.description.as_deref(), Some("first"));

        let result = composite.call("get_policy", json!({})).unwrap().await.unwrap();
        assert_eq!(text_of(&result), "first:get_policy");
    }

    #[test]
    fn test_trait_object_safety() {
        fn _assert_object_safe(_: &dyn ToolRegistry) {}
    }
}

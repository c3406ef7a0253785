//! Explicit tool tables.
//!
//! A [`ToolTable`] is the list of `(tool, handler)` entries assembled at
//! startup. It is enumerable, so tests can inspect exactly what a server
//! will expose.

use std::collections::HashMap;
use std::sync::Arc;

use rmcp::model::Tool;
use serde_json::Value;

use crate::registry::{ToolRegistry, ToolResult};

/// Async handler invoked with a tool's raw arguments.
pub type ToolHandler = Arc<dyn Fn(Value) -> ToolResult + Send + Sync>;

/// One registered tool: its MCP definition and the handler behind it.
#[derive(Clone)]
pub struct ToolEntry {
    /// Name, description and input schema as advertised to clients.
    pub tool: Tool,
    /// Invoked on `call_tool`.
    pub handler: ToolHandler,
}

impl ToolEntry {
    /// Pair a tool definition with its handler.
    pub fn new<F>(tool: Tool, handler: F) -> Self
    where
        F: Fn(Value) -> ToolResult + Send + Sync + 'static,
    {
        Self {
            tool,
            handler: Arc::new(handler),
        }
    }

    /// The tool's name.
    pub fn name(&self) -> &str {
        &self.tool.name
    }
}

impl std::fmt::Debug for ToolEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolEntry")
            .field("name", &self.tool.name)
            .finish_non_exhaustive()
    }
}

/// Ordered, name-unique collection of [`ToolEntry`]s.
#[derive(Clone, Debug, Default)]
pub struct ToolTable {
    entries: Vec<ToolEntry>,
    index: HashMap<String, usize>,
}

impl ToolTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entry.
    ///
    /// Returns `false` and leaves the table unchanged when a tool with the
    /// same name is already registered.
    pub fn register(&mut self, entry: ToolEntry) -> bool {
        let name = entry.name().to_string();
        if self.index.contains_key(&name) {
            log::debug!("tool '{name}' already registered, ignoring");
            return false;
        }
        self.index.insert(name, self.entries.len());
        self.entries.push(entry);
        true
    }

    /// Register every entry, returning how many were new.
    pub fn extend<I: IntoIterator<Item = ToolEntry>>(&mut self, entries: I) -> usize {
        entries
            .into_iter()
            .map(|entry| self.register(entry))
            .filter(|added| *added)
            .count()
    }

    /// Registered names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(ToolEntry::name).collect()
    }

    /// Look up an entry by name.
    pub fn get(&self, name: &str) -> Option<&ToolEntry> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ToolRegistry for ToolTable {
    fn tools(&self) -> Vec<Tool> {
        self.entries.iter().map(|e| e.tool.clone()).collect()
    }

    fn call(&self, name: &str, args: Value) -> Option<ToolResult> {
        self.get(name).map(|entry| (entry.handler)(args))
    }

    fn tool_count(&self) -> usize {
        self.entries.len()
    }

    fn has_tool(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }
}

// ============================================================================
// Tests
// ============================================================================

//! Integration tests for catalogue registration.

use assura_core::ServiceFamily;
use assura_mcp::{CompositeRegistry, HealthTools, ToolRegistry};

use crate::common::{TestHarness, envelope_of};

#[tokio::test]
async fn test_full_catalogue_registered() {
    let harness = TestHarness::new().await;
    assert_eq!(harness.table.len(), assura_mcp_tools::descriptors().len());
    assert!(harness.table.has_tool("manage_policy_events"));
    assert!(harness.table.has_tool("manage_policy_actions"));
    assert!(harness.table.has_tool("import_bdx"));
}

#[tokio::test]
async fn test_unconfigured_families_skipped() {
    let harness = TestHarness::with_families(&[ServiceFamily::Claims, ServiceFamily::Ledger]).await;

    let expected =
        assura_mcp_tools::claims::tools().len() + assura_mcp_tools::ledger::tools().len();
    assert_eq!(harness.table.len(), expected);
    assert!(harness.table.has_tool("get_claim"));
    assert!(!harness.table.has_tool("get_policy"));
}

#[tokio::test]
async fn test_registering_twice_keeps_tool_count() {
    let mut harness = TestHarness::new().await;
    let before = harness.table.tool_count();

    let added = assura_mcp_tools::register_into(&mut harness.table, &harness.factory);
    assert_eq!(added, 0);
    assert_eq!(harness.table.tool_count(), before);
    assert_eq!(harness.table.names().len(), before);
}

#[tokio::test]
async fn test_composite_with_health() {
    let harness = TestHarness::new().await;
    let count = harness.table.tool_count() + 1;
    let families = harness.factory.config().families();

    let registry = CompositeRegistry::new()
        .add(HealthTools::new("assura-test", "0.0.0", families, count))
        .add(harness.table);
    assert_eq!(registry.tool_count(), count);

    let result = registry.call("health", serde_json::json!({})).unwrap().await.unwrap();
    let health = envelope_of(&result);
    assert_eq!(health["tool_count"], count);
    assert_eq!(health["families"].as_array().unwrap().len(), ServiceFamily::ALL.len());
}

#[tokio::test]
async fn test_listed_schemas_are_objects() {
    let harness = TestHarness::new().await;
    for tool in harness.table.tools() {
        assert_eq!(tool.input_schema["type"], "object", "{}", tool.name);
        assert!(tool.description.is_some());
    }
}

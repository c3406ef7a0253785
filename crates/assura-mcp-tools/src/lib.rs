//! Tool catalogues for the Assura MCP gateway.
//!
//! Each module describes one upstream service family as a list of
//! [`EndpointTool`]s. [`catalogue`] binds every descriptor of every
//! configured family to a [`ClientFactory`] in a single pass.
//!
//! # Tools
//!
//! - claims: `list_claims`, `get_claim`, `create_claim`, `update_claim_status`,
//!   `add_claim_note`, `list_claim_documents`, `get_claim_reserves`
//! - policy: `search_policies`, `get_policy`, `list_policy_events`,
//!   `manage_policy_events`, `manage_policy_actions`, `get_policy_coverages`
//! - documents: `list_forms`, `get_form`, `submit_document_extraction`,
//!   `get_extraction_job`, `list_extraction_fields`
//! - ledger: `list_transactions`, `get_transaction`, `import_bdx`,
//!   `validate_bdx`, `get_bdx_import_status`
//! - tenant: `get_tenant_config`, `update_tenant_settings`,
//!   `list_tenant_features`, `set_feature_flag`
//! - identity: `get_current_user`, `list_users`, `get_user_roles`
//!
//! # Example
//!
//! ```rust,ignore
//! let factory = ClientFactory::new(config)?;
//! let table = assura_mcp_tools::catalogue(&factory);
//! let registry = CompositeRegistry::new().add(health).add(table);
//! ```

pub mod claims;
pub mod documents;
pub mod identity;
pub mod ledger;
pub mod policy;
pub mod tenant;

use assura_client::ClientFactory;
use assura_core::ServiceFamily;
use assura_mcp::{EndpointTool, ToolTable};

/// Descriptors for one family.
pub fn family_tools(family: ServiceFamily) -> Vec<EndpointTool> {
    match family {
        ServiceFamily::Claims => claims::tools(),
        ServiceFamily::Policy => policy::tools(),
        ServiceFamily::Documents => documents::tools(),
        ServiceFamily::Ledger => ledger::tools(),
        ServiceFamily::Tenant => tenant::tools(),
        ServiceFamily::Identity => identity::tools(),
    }
}

/// Every descriptor of every family.
pub fn descriptors() -> Vec<EndpointTool> {
    ServiceFamily::ALL.into_iter().flat_map(family_tools).collect()
}

/// Register the tools of every family `factory` has an endpoint for.
///
/// Families without a configured base URL are skipped.
pub fn catalogue(factory: &ClientFactory) -> ToolTable {
    let mut table = ToolTable::new();
    register_into(&mut table, factory);
    table
}

/// Register the catalogue into an existing table.
///
/// Returns how many tools were newly added; registering twice adds none.
pub fn register_into(table: &mut ToolTable, factory: &ClientFactory) -> usize {
    let mut added = 0;
    for family in ServiceFamily::ALL {
        if !factory.has_family(family) {
            log::warn!("no base URL configured for {family}; its tools are not registered");
            continue;
        }
        let entries = family_tools(family)
            .into_iter()
            .map(|tool| tool.into_entry(factory.clone()));
        let count = table.extend(entries);
        log::debug!("registered {count} {family} tools");
        added += count;
    }
    added
}

// ============================================================================
// Tests
// ============================================================================

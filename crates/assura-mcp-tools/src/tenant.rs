//! Tenant configuration tools.

use assura_core::ServiceFamily::Tenant;
use assura_mcp::{EndpointTool, ParamKind, ParamSpec};

fn tenant_id() -> ParamSpec {
    ParamSpec::path("tenantId", "Tenant identifier")
}

/// Tenant service endpoints.
pub fn tools() -> Vec<EndpointTool> {
    vec![
        EndpointTool::get(Tenant, "get_tenant_config", "/api/v1/tenants/{tenantId}/config")
            .describe("Fetch a tenant's configuration: locale, currency, branding and limits")
            .param(tenant_id()),
        EndpointTool::patch(Tenant, "update_tenant_settings", "/api/v1/tenants/{tenantId}/settings")
            .describe("Update tenant settings; only the supplied keys change")
            .param(tenant_id())
            .param(ParamSpec::body("settings", ParamKind::Object, "Settings to change").required()),
        EndpointTool::get(Tenant, "list_tenant_features", "/api/v1/tenants/{tenantId}/features")
            .describe("List feature flags and whether each is enabled for the tenant")
            .param(tenant_id()),
        EndpointTool::put(
            Tenant,
            "set_feature_flag",
            "/api/v1/tenants/{tenantId}/features/{feature}",
        )
            .describe("Enable or disable one feature flag for the tenant")
            .param(tenant_id())
            .param(ParamSpec::path("feature", "Feature flag key"))
            .param(ParamSpec::body("enabled", ParamKind::Boolean, "New state").required()),
    ]
}

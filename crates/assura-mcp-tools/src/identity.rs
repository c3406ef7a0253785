//! Identity and user directory tools.

use assura_core::ServiceFamily::Identity;
use assura_mcp::{EndpointTool, ParamKind, ParamSpec};

/// Identity service endpoints.
pub fn tools() -> Vec<EndpointTool> {
    vec![
        EndpointTool::get(Identity, "get_current_user", "/api/v1/identity/me")
            .describe("The user or service principal the supplied credentials authenticate as"),
        EndpointTool::get(Identity, "list_users", "/api/v1/identity/users")
            .describe("List users in the organization")
            .param(ParamSpec::query("search", ParamKind::String, "Match on name or email"))
            .param(ParamSpec::query("role", ParamKind::String, "Only users holding this role"))
            .param(ParamSpec::query("active", ParamKind::Boolean, "Only active users")),
        EndpointTool::get(Identity, "get_user_roles", "/api/v1/identity/users/{userId}/roles")
            .describe("Roles and permission scopes granted to a user")
            .param(ParamSpec::path("userId", "User identifier")),
    ]
}

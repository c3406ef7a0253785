//! Policy administration tools.
//!
//! Policy events (endorsements, renewals, cancellations) and policy actions
//! (tasks raised against a policy) are managed by two separate tools.

use assura_core::ServiceFamily::Policy;
use assura_mcp::{EndpointTool, ParamKind, ParamSpec};

/// Policy service endpoints.
pub fn tools() -> Vec<EndpointTool> {
    vec![
        EndpointTool::get(Policy, "search_policies", "/api/v1/policies")
            .describe("Search policies by holder, product, status or effective date")
            .param(ParamSpec::query(
                "query",
                ParamKind::String,
                "Free-text match on policy number or holder",
            ))
            .param(ParamSpec::query("product", ParamKind::String, "Product code"))
            .param(ParamSpec::query("status", ParamKind::Array, "One or more statuses"))
            .param(ParamSpec::query(
                "effectiveFrom",
                ParamKind::String,
                "Effective on or after (YYYY-MM-DD)",
            ))
            .param(ParamSpec::query("page", ParamKind::Integer, "Page number, starting at 1")),
        EndpointTool::get(Policy, "get_policy", "/api/v1/policies/{policyId}")
            .describe("Fetch one policy with holder, term and premium summary")
            .param(ParamSpec::path("policyId", "Policy identifier")),
        EndpointTool::get(Policy, "list_policy_events", "/api/v1/policies/{policyId}/events")
            .describe("List lifecycle events recorded on a policy")
            .param(ParamSpec::path("policyId", "Policy identifier"))
            .param(ParamSpec::query("type", ParamKind::String, "Event type filter")),
        EndpointTool::post(Policy, "manage_policy_events", "/api/v1/policies/{policyId}/events")
            .describe("Record a lifecycle event (endorsement, renewal, cancellation) on a policy")
            .param(ParamSpec::path("policyId", "Policy identifier"))
            .param(ParamSpec::body("type", ParamKind::String, "Event type").required())
            .param(
                ParamSpec::body("effectiveDate", ParamKind::String, "Effective date (YYYY-MM-DD)")
                    .required(),
            )
            .param(ParamSpec::body(
                "changes",
                ParamKind::Object,
                "Field changes carried by the event",
            )),
        EndpointTool::post(Policy, "manage_policy_actions", "/api/v1/policies/{policyId}/actions")
            .describe("Raise or complete a follow-up action on a policy")
            .param(ParamSpec::path("policyId", "Policy identifier"))
            .param(ParamSpec::body("action", ParamKind::String, "Action type").required())
            .param(ParamSpec::body("assignee", ParamKind::String, "User the action is assigned to"))
            .param(ParamSpec::body("dueDate", ParamKind::String, "Due date (YYYY-MM-DD)"))
            .param(ParamSpec::body("completed", ParamKind::Boolean, "Mark the action complete")),
        EndpointTool::get(Policy, "get_policy_coverages", "/api/v1/policies/{policyId}/coverages")
            .describe("List coverages with limits and deductibles")
            .param(ParamSpec::path("policyId", "Policy identifier")),
    ]
}

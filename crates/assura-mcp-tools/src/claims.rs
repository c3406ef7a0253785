//! Claims lifecycle tools.

use assura_core::ServiceFamily::Claims;
use assura_mcp::{EndpointTool, ParamKind, ParamSpec};

/// Claims service endpoints.
pub fn tools() -> Vec<EndpointTool> {
    vec![
        EndpointTool::get(Claims, "list_claims", "/api/v1/claims")
            .describe("List claims, optionally filtered by status, policy or loss date range")
            .param(ParamSpec::query(
                "status",
                ParamKind::String,
                "Claim status, e.g. open, closed, reopened",
            ))
            .param(ParamSpec::query(
                "policyNumber",
                ParamKind::String,
                "Only claims on this policy",
            ))
            .param(ParamSpec::query(
                "lossDateFrom",
                ParamKind::String,
                "Earliest loss date (YYYY-MM-DD)",
            ))
            .param(ParamSpec::query(
                "lossDateTo",
                ParamKind::String,
                "Latest loss date (YYYY-MM-DD)",
            ))
            .param(ParamSpec::query("page", ParamKind::Integer, "Page number, starting at 1"))
            .param(ParamSpec::query("pageSize", ParamKind::Integer, "Results per page (max 100)")),
        EndpointTool::get(Claims, "get_claim", "/api/v1/claims/{claimId}")
            .describe("Fetch one claim with its parties, status history and current assignment")
            .param(ParamSpec::path("claimId", "Claim identifier")),
        EndpointTool::post(Claims, "create_claim", "/api/v1/claims")
            .describe("Open a first notice of loss against a policy")
            .param(
                ParamSpec::body("policyNumber", ParamKind::String, "Policy the loss is reported on")
                    .required(),
            )
            .param(
                ParamSpec::body("lossDate", ParamKind::String, "Date of loss (YYYY-MM-DD)")
                    .required(),
            )
            .param(ParamSpec::body("description", ParamKind::String, "What happened").required())
            .param(ParamSpec::body("lossType", ParamKind::String, "Peril or loss category"))
            .param(ParamSpec::body("claimant", ParamKind::Object, "Claimant contact details")),
        EndpointTool::patch(Claims, "update_claim_status", "/api/v1/claims/{claimId}/status")
            .describe(
                "Move a claim to a new status; the service rejects invalid transitions with 409",
            )
            .param(ParamSpec::path("claimId", "Claim identifier"))
            .param(ParamSpec::body("status", ParamKind::String, "Target status").required())
            .param(ParamSpec::body(
                "reason",
                ParamKind::String,
                "Reason recorded in the status history",
            )),
        EndpointTool::post(Claims, "add_claim_note", "/api/v1/claims/{claimId}/notes")
            .describe("Attach a note to a claim")
            .param(ParamSpec::path("claimId", "Claim identifier"))
            .param(ParamSpec::body("text", ParamKind::String, "Note text").required())
            .param(ParamSpec::body("visibility", ParamKind::String, "internal or shared")),
        EndpointTool::get(Claims, "list_claim_documents", "/api/v1/claims/{claimId}/documents")
            .describe("List documents attached to a claim")
            .param(ParamSpec::path("claimId", "Claim identifier"))
            .param(ParamSpec::query("category", ParamKind::String, "Document category filter")),
        EndpointTool::get(Claims, "get_claim_reserves", "/api/v1/claims/{claimId}/reserves")
            .describe("Current reserve amounts per coverage, with the reserve change history")
            .param(ParamSpec::path("claimId", "Claim identifier")),
    ]
}

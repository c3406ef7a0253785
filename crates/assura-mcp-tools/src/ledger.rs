//! Business ledger tools: transactions and bordereaux (BDX) imports.

use assura_core::ServiceFamily::Ledger;
use assura_mcp::{EndpointTool, ParamKind, ParamSpec};

/// Ledger service endpoints.
pub fn tools() -> Vec<EndpointTool> {
    vec![
        EndpointTool::get(Ledger, "list_transactions", "/api/v1/ledger/transactions")
            .describe("List ledger transactions, filtered by type, policy or accounting period")
            .param(ParamSpec::query(
                "type",
                ParamKind::Array,
                "Transaction types, e.g. premium, claim_payment",
            ))
            .param(ParamSpec::query(
                "policyNumber",
                ParamKind::String,
                "Only transactions on this policy",
            ))
            .param(ParamSpec::query("period", ParamKind::String, "Accounting period (YYYY-MM)"))
            .param(ParamSpec::query("page", ParamKind::Integer, "Page number, starting at 1")),
        EndpointTool::get(Ledger, "get_transaction", "/api/v1/ledger/transactions/{transactionId}")
            .describe("Fetch one ledger transaction with its postings")
            .param(ParamSpec::path("transactionId", "Transaction identifier")),
        EndpointTool::post(Ledger, "import_bdx", "/api/v1/ledger/bdx/imports")
            .describe(
                "Import a bordereau. Large files are processed asynchronously; \
                 poll get_bdx_import_status. Subject to upstream rate limits",
            )
            .param(
                ParamSpec::body("fileUrl", ParamKind::String, "Location of the bordereau file")
                    .required(),
            )
            .param(ParamSpec::body("bdxType", ParamKind::String, "premium or claims").required())
            .param(
                ParamSpec::body("period", ParamKind::String, "Reporting period (YYYY-MM)")
                    .required(),
            )
            .param(ParamSpec::body("mapping", ParamKind::Object, "Column mapping overrides")),
        EndpointTool::post(Ledger, "validate_bdx", "/api/v1/ledger/bdx/validations")
            .describe("Dry-run a bordereau against the mapping and report row-level errors")
            .param(
                ParamSpec::body("fileUrl", ParamKind::String, "Location of the bordereau file")
                    .required(),
            )
            .param(ParamSpec::body("bdxType", ParamKind::String, "premium or claims").required())
            .param(ParamSpec::body("mapping", ParamKind::Object, "Column mapping overrides")),
        EndpointTool::get(Ledger, "get_bdx_import_status", "/api/v1/ledger/bdx/imports/{importId}")
            .describe("Progress, row counts and errors of a bordereau import")
            .param(ParamSpec::path("importId", "Import identifier")),
    ]
}

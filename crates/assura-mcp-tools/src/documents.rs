//! Forms and document-AI tools.
//!
//! The documents service is usually deployed per tenant, so its base URL
//! may carry a `{tenantId}` placeholder.

use assura_core::ServiceFamily::Documents;
use assura_mcp::{EndpointTool, ParamKind, ParamSpec};

/// Documents service endpoints.
pub fn tools() -> Vec<EndpointTool> {
    vec![
        EndpointTool::get(Documents, "list_forms", "/api/v1/forms")
            .describe("List form templates available to the organization")
            .param(ParamSpec::query("category", ParamKind::String, "Form category"))
            .param(ParamSpec::query("active", ParamKind::Boolean, "Only active forms")),
        EndpointTool::get(Documents, "get_form", "/api/v1/forms/{formId}")
            .describe("Fetch a form template with its field definitions")
            .param(ParamSpec::path("formId", "Form identifier")),
        EndpointTool::post(Documents, "submit_document_extraction", "/api/v1/extractions")
            .describe(
                "Start an asynchronous extraction job for an uploaded document; \
                 poll get_extraction_job for the result",
            )
            .param(
                ParamSpec::body(
                    "documentUrl",
                    ParamKind::String,
                    "Location of the uploaded document",
                )
                .required(),
            )
            .param(ParamSpec::body("formId", ParamKind::String, "Form template to extract against"))
            .param(ParamSpec::body(
                "callbackUrl",
                ParamKind::String,
                "Notified when the job finishes",
            )),
        EndpointTool::get(Documents, "get_extraction_job", "/api/v1/extractions/{jobId}")
            .describe("Status and, once complete, extracted values of an extraction job")
            .param(ParamSpec::path("jobId", "Extraction job identifier")),
        EndpointTool::get(Documents, "list_extraction_fields", "/api/v1/extractions/{jobId}/fields")
            .describe("Extracted fields of a completed job with confidence scores")
            .param(ParamSpec::path("jobId", "Extraction job identifier"))
            .param(ParamSpec::query(
                "minConfidence",
                ParamKind::Number,
                "Drop fields below this confidence (0-1)",
            )),
    ]
}

//! Integration tests for success and failure envelopes across tool shapes.

use assura_client::ClientFactory;
use assura_core::{GatewayConfig, ServiceEndpoint, ServiceFamily};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{TestHarness, assert_failure_envelope, assert_success_envelope, envelope_of};

#[tokio::test]
async fn test_get_with_array_query() {
    let harness = TestHarness::new().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/policies"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": [], "total": 0})))
        .expect(1)
        .mount(&harness.server)
        .await;

    let (is_error, v) = harness
        .envelope(
            "search_policies",
            json!({"bearerToken": "t", "status": ["active", "lapsed"], "page": 1}),
        )
        .await;
    assert!(!is_error);
    assert_success_envelope(&v, "search_policies");
    assert_eq!(v["metadata"]["service"], "policy");

    let received = harness.server.received_requests().await.unwrap();
    assert_eq!(
        received[0].url.query(),
        Some("status=active&status=lapsed&page=1")
    );
}

#[tokio::test]
async fn test_patch_body_and_status_transition_conflict() {
    let harness = TestHarness::new().await;
    Mock::given(method("PATCH"))
        .and(path("/api/v1/claims/C-1/status"))
        .and(body_json(json!({"status": "closed"})))
        .respond_with(
            ResponseTemplate::new(409)
                .set_body_json(json!({"error": {"message": "claim has open reserves"}})),
        )
        .expect(1)
        .mount(&harness.server)
        .await;

    let (is_error, v) = harness
        .envelope(
            "update_claim_status",
            json!({"bearerToken": "t", "claimId": "C-1", "status": "closed"}),
        )
        .await;
    assert!(is_error);
    assert_failure_envelope(&v);
    assert_eq!(v["error"], "claim has open reserves");
    assert_eq!(v["details"]["status"], 409);
}

#[tokio::test]
async fn test_post_accepted_job() {
    let harness = TestHarness::new().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/ledger/bdx/imports"))
        .respond_with(
            ResponseTemplate::new(202)
                .set_body_json(json!({"importId": "IMP-3", "state": "queued"})),
        )
        .expect(1)
        .mount(&harness.server)
        .await;

    let (is_error, v) = harness
        .envelope(
            "import_bdx",
            json!({
                "bearerToken": "t",
                "fileUrl": "s3://bucket/bdx.csv",
                "bdxType": "premium",
                "period": "2026-09"
            }),
        )
        .await;
    assert!(!is_error);
    assert_eq!(v["data"]["importId"], "IMP-3");
}

#[tokio::test]
async fn test_text_response_becomes_string_data() {
    let harness = TestHarness::new().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/forms/F-1"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/plain")
                .set_body_string("legacy form body"),
        )
        .mount(&harness.server)
        .await;

    let (_, v) = harness
        .envelope("get_form", json!({"bearerToken": "t", "formId": "F-1"}))
        .await;
    assert_eq!(v["data"], "legacy form body");
}

#[tokio::test]
async fn test_upstream_fallback_message() {
    let harness = TestHarness::new().await;
    Mock::given(method("GET"))
        .and(query_param("minConfidence", "0.8"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
        .mount(&harness.server)
        .await;

    let (is_error, v) = harness
        .envelope(
            "list_extraction_fields",
            json!({"bearerToken": "t", "jobId": "J-1", "minConfidence": 0.8}),
        )
        .await;
    assert!(is_error);
    assert_eq!(v["error"], "HTTP 502: Bad Gateway");
    assert!(
        v["troubleshooting"]["likely_causes"][0]
            .as_str()
            .unwrap()
            .contains("unavailable")
    );
}

#[tokio::test]
async fn test_invalid_arguments_never_reach_upstream() {
    let harness = TestHarness::new().await;

    let (is_error, v) = harness
        .envelope("get_policy", json!({"bearerToken": "t", "policyId": 42}))
        .await;
    assert!(is_error);
    assert_failure_envelope(&v);
    assert_eq!(v["details"]["kind"], "invalid_params");
    assert!(harness.server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unreachable_service_is_network_failure() {
    let config = GatewayConfig::new("assura-test").with_endpoint(
        ServiceFamily::Identity,
        ServiceEndpoint::new(ServiceFamily::Identity, "http://127.0.0.1:9"),
    );
    let factory = ClientFactory::new(config).unwrap();
    let table = assura_mcp_tools::catalogue(&factory);
    assert_eq!(table.len(), assura_mcp_tools::identity::tools().len());

    let result = table.get("list_users").unwrap();
    let result = (result.handler)(json!({"bearerToken": "t"})).await.unwrap();
    assert_eq!(result.is_error, Some(true));

    let v = envelope_of(&result);
    assert_failure_envelope(&v);
    assert_eq!(v["details"], json!({"kind": "network", "retryable": true}));
}

//! Integration tests for tenant scoping and forwarded request headers.

use assura_client::ClientFactory;
use assura_core::{GatewayConfig, ServiceEndpoint, ServiceFamily};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{TestHarness, assert_failure_envelope, assert_success_envelope, envelope_of};

#[tokio::test]
async fn test_tenant_cannot_rewrite_templated_host() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let config = GatewayConfig::new("assura-test").with_endpoint(
        ServiceFamily::Documents,
        ServiceEndpoint::new(ServiceFamily::Documents, "http://{tenantId}.docs.test"),
    );
    let factory = ClientFactory::new(config).unwrap();
    let table = assura_mcp_tools::catalogue(&factory);

    for tenant in [
        format!("{}/#", server.address()),
        format!("{}/api?", server.address()),
        format!("attacker@{}", server.address()),
    ] {
        let entry = table.get("list_forms").unwrap();
        let result = (entry.handler)(json!({"bearerToken": "t", "tenantId": tenant}))
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true), "{tenant}");

        let v = envelope_of(&result);
        assert_failure_envelope(&v);
        assert_eq!(v["details"]["kind"], "configuration");
        assert!(v["error"].as_str().unwrap().contains("tenantId"));
    }
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_tenant_header_rejects_control_characters() {
    let harness = TestHarness::new().await;

    let (is_error, v) = harness
        .envelope(
            "get_claim",
            json!({"claimId": "C-1", "bearerToken": "t", "tenantId": "org-1\r\nX-Admin: 1"}),
        )
        .await;
    assert!(is_error);
    assert_eq!(v["details"]["kind"], "configuration");
    assert!(harness.server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_blank_tenant_falls_back_to_credentials_org() {
    let harness = TestHarness::new().await;
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "T"})))
        .expect(1)
        .mount(&harness.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/claims/C-2"))
        .and(header("x-tenant-id", "org-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "C-2"})))
        .expect(1)
        .mount(&harness.server)
        .await;

    let (is_error, v) = harness
        .envelope(
            "get_claim",
            json!({
                "claimId": "C-2",
                "clientId": "cid",
                "clientSecret": "secret",
                "organizationId": "org-1",
                "tenantId": "  "
            }),
        )
        .await;
    assert!(!is_error);
    assert_success_envelope(&v, "get_claim");
}

#[tokio::test]
async fn test_accept_language_reaches_upstream() {
    let harness = TestHarness::new().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/policies/P-9"))
        .and(header("accept-language", "fr-CH"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"number": "P-9"})))
        .expect(1)
        .mount(&harness.server)
        .await;

    let (is_error, v) = harness
        .envelope(
            "get_policy",
            json!({"policyId": "P-9", "bearerToken": "t", "acceptLanguage": "fr-CH"}),
        )
        .await;
    assert!(!is_error);
    assert_eq!(v["data"]["number"], "P-9");

    let requests = harness.server.received_requests().await.unwrap();
    assert!(!requests[0].url.query_pairs().any(|(k, _)| k == "acceptLanguage"));
}

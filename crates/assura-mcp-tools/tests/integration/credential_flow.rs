//! Integration tests for authentication through catalogue tools.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{TestHarness, assert_failure_envelope, assert_success_envelope};

#[tokio::test]
async fn test_client_credentials_exchanged_then_used() {
    let harness = TestHarness::new().await;
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .and(body_json(json!({
            "clientId": "cid",
            "clientSecret": "secret",
            "organizationId": "org-1"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"token": "T", "expires_in": 3600})),
        )
        .expect(1)
        .mount(&harness.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/claims/C-7"))
        .and(header("authorization", "Bearer T"))
        .and(header("x-tenant-id", "org-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "C-7"})))
        .expect(1)
        .mount(&harness.server)
        .await;

    let (is_error, v) = harness
        .envelope(
            "get_claim",
            json!({
                "claimId": "C-7",
                "clientId": "cid",
                "clientSecret": "secret",
                "organizationId": "org-1"
            }),
        )
        .await;
    assert!(!is_error);
    assert_success_envelope(&v, "get_claim");
    assert_eq!(v["data"]["id"], "C-7");
}

#[tokio::test]
async fn test_bearer_token_wins_over_credentials() {
    let harness = TestHarness::new().await;
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "unused"})))
        .expect(0)
        .mount(&harness.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/identity/me"))
        .and(header("authorization", "Bearer direct"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"sub": "svc-1"})))
        .expect(1)
        .mount(&harness.server)
        .await;

    let (is_error, v) = harness
        .envelope(
            "get_current_user",
            json!({
                "bearerToken": "direct",
                "clientId": "cid",
                "clientSecret": "secret",
                "organizationId": "org-1"
            }),
        )
        .await;
    assert!(!is_error);
    assert_eq!(v["data"]["sub"], "svc-1");
}

#[tokio::test]
async fn test_tenant_family_logs_in_with_tenant_id() {
    let harness = TestHarness::new().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({"clientId": "cid", "clientSecret": "s", "tenantId": "acme"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": "TT"})))
        .expect(1)
        .mount(&harness.server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/tenants/acme/features/bdx-v2"))
        .and(header("authorization", "Bearer TT"))
        .and(header("x-tenant-id", "acme"))
        .and(body_json(json!({"enabled": true})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"key": "bdx-v2", "enabled": true})),
        )
        .expect(1)
        .mount(&harness.server)
        .await;

    let (is_error, v) = harness
        .envelope(
            "set_feature_flag",
            json!({
                "tenantId": "acme",
                "feature": "bdx-v2",
                "enabled": true,
                "clientId": "cid",
                "clientSecret": "s"
            }),
        )
        .await;
    assert!(!is_error, "{v}");
    assert_eq!(v["data"]["enabled"], true);
    assert_eq!(v["metadata"]["method"], "PUT");
}

#[tokio::test]
async fn test_rejected_credentials_are_auth_failure() {
    let harness = TestHarness::new().await;
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&harness.server)
        .await;

    let (is_error, v) = harness
        .envelope(
            "list_transactions",
            json!({"clientId": "cid", "clientSecret": "bad", "organizationId": "org-1"}),
        )
        .await;
    assert!(is_error);
    assert_failure_envelope(&v);
    assert_eq!(
        v["details"],
        json!({"kind": "auth", "status": 401, "retryable": false})
    );
    assert!(v["error"].as_str().unwrap().contains("401"));
}

#[tokio::test]
async fn test_partial_credentials_name_missing_fields() {
    let harness = TestHarness::new().await;

    let (is_error, v) = harness
        .envelope("list_users", json!({"clientId": "cid"}))
        .await;
    assert!(is_error);
    assert_failure_envelope(&v);
    assert_eq!(v["details"]["kind"], "configuration");
    let message = v["error"].as_str().unwrap();
    assert!(message.contains("missing credentials"));
    assert!(message.contains("clientSecret"));
    assert!(message.contains("organizationId"));
    assert!(harness.server.received_requests().await.unwrap().is_empty());
}

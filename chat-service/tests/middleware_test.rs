//! Request pipeline middleware integration tests.

mod common;

use chat_service::services::providers::mock::MockChatProvider;
use common::TestApp;
use std::sync::Arc;

#[tokio::test]
async fn every_response_carries_a_request_id() {
    let app = TestApp::spawn_unavailable().await;

    for path in ["/", "/api/v1/health", "/api/v1/ai/test"] {
        let response = app
            .client()
            .get(format!("{}{}", app.address, path))
            .send()
            .await
            .expect("Failed to execute request");

        let request_id = response
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        assert!(!request_id.is_empty(), "missing x-request-id on {}", path);
    }
}

#[tokio::test]
async fn caller_supplied_request_id_is_echoed() {
    let app = TestApp::spawn_unavailable().await;

    let response = app
        .client()
        .get(format!("{}/api/v1/health", app.address))
        .header("x-request-id", "test-correlation-id")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(
        response
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok()),
        Some("test-correlation-id")
    );
}

#[tokio::test]
async fn error_body_carries_the_same_request_id_as_the_header() {
    let app = TestApp::spawn_unavailable().await;

    let response = app
        .client()
        .post(format!("{}/api/v1/ai/chat", app.address))
        .header("x-request-id", "err-correlation-id")
        .json(&serde_json::json!({"message": "Hello"}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 503);
    assert_eq!(
        response
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok()),
        Some("err-correlation-id")
    );

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["requestId"], "err-correlation-id");
}

#[tokio::test]
async fn validation_error_body_carries_request_id() {
    let app =
        TestApp::spawn_with_provider(Arc::new(MockChatProvider::replying("Hi", "gpt-4o-mini", 1)))
            .await;

    let response = app
        .client()
        .post(format!("{}/api/v1/ai/chat", app.address))
        .header("x-request-id", "validation-correlation-id")
        .json(&serde_json::json!({"message": ""}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 422);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["requestId"], "validation-correlation-id");
}

#[tokio::test]
async fn responses_carry_process_time_header() {
    let app = TestApp::spawn_unavailable().await;

    let response = app
        .client()
        .get(format!("{}/api/v1/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    let elapsed = response
        .headers()
        .get("x-process-time")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<f64>().ok())
        .expect("Missing or invalid x-process-time header");
    assert!(elapsed >= 0.0);
}

#[tokio::test]
async fn api_responses_carry_security_headers() {
    let app = TestApp::spawn_unavailable().await;

    let response = app
        .client()
        .get(format!("{}/api/v1/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    let headers = response.headers();
    assert_eq!(
        headers
            .get("x-content-type-options")
            .and_then(|v| v.to_str().ok()),
        Some("nosniff")
    );
    assert_eq!(
        headers.get("x-frame-options").and_then(|v| v.to_str().ok()),
        Some("DENY")
    );
    assert!(headers.contains_key("content-security-policy"));
    assert!(headers.contains_key("strict-transport-security"));
}

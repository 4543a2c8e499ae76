//! Chat endpoint integration tests against scripted providers.

mod common;

use chat_service::services::providers::mock::MockChatProvider;
use common::TestApp;
use std::sync::Arc;

#[tokio::test]
async fn chat_success_returns_completion() {
    let app = TestApp::spawn_with_provider(Arc::new(MockChatProvider::replying(
        "Hi there",
        "gpt-4o-mini",
        42,
    )))
    .await;

    let response = app
        .client()
        .post(format!("{}/api/v1/ai/chat", app.address))
        .json(&serde_json::json!({"message": "Hello", "model": "gpt-4o-mini"}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["response"], "Hi there");
    assert_eq!(body["model"], "gpt-4o-mini");
    assert_eq!(body["tokensUsed"], 42);
}

#[tokio::test]
async fn chat_reports_model_served_by_upstream() {
    // The upstream may resolve the requested alias to a pinned revision
    let app = TestApp::spawn_with_provider(Arc::new(MockChatProvider::replying(
        "Hi",
        "gpt-4o-mini-2024-07-18",
        7,
    )))
    .await;

    let response = app
        .client()
        .post(format!("{}/api/v1/ai/chat", app.address))
        .json(&serde_json::json!({"message": "Hello", "model": "gpt-4o-mini"}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["model"], "gpt-4o-mini-2024-07-18");
}

#[tokio::test]
async fn chat_empty_message_returns_422_with_field_errors() {
    let app =
        TestApp::spawn_with_provider(Arc::new(MockChatProvider::replying("Hi", "gpt-4o-mini", 1)))
            .await;

    let response = app
        .client()
        .post(format!("{}/api/v1/ai/chat", app.address))
        .json(&serde_json::json!({"message": ""}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 422);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Validation error");

    let errors = body["errors"].as_array().expect("Missing errors list");
    assert!(errors.iter().any(|e| e["field"] == "message"));
    assert!(body["requestId"].is_string());
}

#[tokio::test]
async fn chat_missing_message_returns_422() {
    let app =
        TestApp::spawn_with_provider(Arc::new(MockChatProvider::replying("Hi", "gpt-4o-mini", 1)))
            .await;

    let response = app
        .client()
        .post(format!("{}/api/v1/ai/chat", app.address))
        .json(&serde_json::json!({}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 422);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let errors = body["errors"].as_array().expect("Missing errors list");
    assert!(!errors.is_empty());
}

#[tokio::test]
async fn chat_unavailable_returns_503() {
    let app = TestApp::spawn_unavailable().await;

    let response = app
        .client()
        .post(format!("{}/api/v1/ai/chat", app.address))
        .json(&serde_json::json!({"message": "Hello"}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 503);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["detail"], "AI service is not available");
    assert!(body["requestId"].is_string());
}

#[tokio::test]
async fn chat_upstream_failure_returns_502() {
    let app =
        TestApp::spawn_with_provider(Arc::new(MockChatProvider::failing("quota exceeded"))).await;

    let response = app
        .client()
        .post(format!("{}/api/v1/ai/chat", app.address))
        .json(&serde_json::json!({"message": "Hello"}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 502);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["detail"], "External AI service error");
    assert!(body["requestId"].is_string());
}

#[tokio::test]
async fn chat_unreachable_upstream_returns_502() {
    let app =
        TestApp::spawn_with_provider(Arc::new(MockChatProvider::unreachable("connection refused")))
            .await;

    let response = app
        .client()
        .post(format!("{}/api/v1/ai/chat", app.address))
        .json(&serde_json::json!({"message": "Hello"}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 502);
}

#[tokio::test]
async fn chat_empty_completion_returns_500() {
    let app = TestApp::spawn_with_provider(Arc::new(MockChatProvider::empty("gpt-4o-mini"))).await;

    let response = app
        .client()
        .post(format!("{}/api/v1/ai/chat", app.address))
        .json(&serde_json::json!({"message": "Hello"}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 500);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["detail"], "Failed to generate response");
    assert!(body["requestId"].is_string());
}

pub mod config;
pub mod dtos;
pub mod handlers;
pub mod services;
pub mod startup;

use axum::{
    Json, Router,
    middleware::from_fn,
    routing::{get, post},
};
use service_core::middleware::{
    logging::access_log_middleware, security_headers::security_headers_middleware,
    tracing::request_id_middleware,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::{ChatConfig, Environment};
use crate::services::AiGateway;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health::health,
        handlers::health::health_full,
        handlers::ai::chat,
        handlers::ai::test_connection,
    ),
    components(
        schemas(
            dtos::ai::ChatRequest,
            dtos::ai::ChatResponse,
            dtos::ai::ServiceStatus,
            dtos::ai::ServiceAvailability,
            dtos::health::HealthCheck,
            dtos::health::DetailedHealthCheck,
            dtos::health::ServiceHealthStatus,
            dtos::health::OverallHealth,
            dtos::health::DependencyHealth,
        )
    ),
    tags(
        (name = "Health", description = "Service liveness and dependency health"),
        (name = "AI", description = "Chat completion endpoints"),
    )
)]
pub struct ApiDoc;

#[derive(Clone)]
pub struct AppState {
    pub config: ChatConfig,
    pub gateway: AiGateway,
}

/// Service metadata for API consumers.
async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "chat-service",
        "version": env!("CARGO_PKG_VERSION"),
        "docs": "/docs",
        "health": "/api/v1/health",
    }))
}

pub fn build_router(state: AppState) -> Router {
    let mut app = Router::new()
        .route("/", get(root))
        .route("/api/v1/health", get(handlers::health::health))
        .route("/api/v1/health/full", get(handlers::health::health_full))
        .route("/api/v1/ai/chat", post(handlers::ai::chat))
        .route("/api/v1/ai/test", get(handlers::ai::test_connection));

    // Swagger UI in dev; bare OpenAPI JSON in prod
    if state.config.environment == Environment::Dev {
        app =
            app.merge(SwaggerUi::new("/docs").url("/.well-known/openapi.json", ApiDoc::openapi()));
    } else {
        app = app.route(
            "/.well-known/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        );
    }

    let cors = CorsLayer::new()
        .allow_origin(
            state
                .config
                .security
                .allowed_origins
                .iter()
                .map(|o| {
                    o.parse::<axum::http::HeaderValue>().unwrap_or_else(|e| {
                        tracing::error!("Invalid CORS origin '{}': {}. Using fallback.", o, e);
                        axum::http::HeaderValue::from_static("*")
                    })
                })
                .collect::<Vec<axum::http::HeaderValue>>(),
        )
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::HeaderName::from_static("x-request-id"),
        ]);

    app.with_state(state)
        // Access logging
        .layer(from_fn(access_log_middleware))
        // Per-request tracing span
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        // Request-id assignment; must wrap the logging stages
        .layer(from_fn(request_id_middleware))
        // Security headers on every outbound response
        .layer(from_fn(security_headers_middleware))
        // CORS
        .layer(cors)
}

use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::AppState;
use crate::dtos::ai::{ChatRequest, ChatResponse, ServiceAvailability, ServiceStatus};
use crate::services::GatewayError;
use service_core::error::ErrorResponse;
use service_core::extract::ValidatedJson;
use service_core::middleware::tracing::RequestId;

/// Send a chat message to the AI assistant
#[utoipa::path(
    post,
    path = "/api/v1/ai/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Chat completion", body = ChatResponse),
        (status = 422, description = "Validation error"),
        (status = 502, description = "External AI service failed"),
        (status = 503, description = "AI service not configured"),
        (status = 500, description = "Internal server error")
    ),
    tag = "AI"
)]
pub async fn chat(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    ValidatedJson(req): ValidatedJson<ChatRequest>,
) -> Result<Json<ChatResponse>, Response> {
    if !state.gateway.is_available() {
        tracing::warn!(
            request_id = %request_id,
            "Chat request rejected, AI service not available"
        );
        return Err(service_unavailable(&request_id));
    }

    let model = req
        .model
        .as_deref()
        .unwrap_or(&state.config.openai.chat_model);

    match state.gateway.send_chat_message(&req.message, model).await {
        Ok(reply) => {
            let Some(text) = reply.text else {
                tracing::error!(
                    request_id = %request_id,
                    model = %reply.model,
                    "Upstream returned a completion without content"
                );
                return Err(internal_error(
                    &request_id,
                    "Failed to generate response",
                    state.config.debug,
                    &format!("upstream returned no content for model {}", reply.model),
                ));
            };

            Ok(Json(ChatResponse {
                response: text,
                model: reply.model,
                tokens_used: reply.tokens_used,
            }))
        }
        Err(GatewayError::NotAvailable) => Err(service_unavailable(&request_id)),
        Err(GatewayError::Upstream(e)) => {
            tracing::error!(
                request_id = %request_id,
                error_kind = e.kind(),
                "Chat request failed upstream"
            );
            Err(error_response(
                StatusCode::BAD_GATEWAY,
                "Bad gateway",
                "External AI service error",
                &request_id,
            ))
        }
    }
}

/// Probe AI service availability
#[utoipa::path(
    get,
    path = "/api/v1/ai/test",
    responses(
        (status = 200, description = "Service status", body = ServiceStatus)
    ),
    tag = "AI"
)]
pub async fn test_connection(State(state): State<AppState>) -> Json<ServiceStatus> {
    if !state.gateway.is_available() {
        return Json(ServiceStatus {
            status: ServiceAvailability::Unavailable,
            message: "AI service not configured".to_string(),
        });
    }

    let (ok, message) = state.gateway.test_connectivity().await;

    Json(ServiceStatus {
        status: if ok {
            ServiceAvailability::Available
        } else {
            ServiceAvailability::Error
        },
        message,
    })
}

fn service_unavailable(request_id: &RequestId) -> Response {
    error_response(
        StatusCode::SERVICE_UNAVAILABLE,
        "Service unavailable",
        "AI service is not available",
        request_id,
    )
}

fn internal_error(request_id: &RequestId, detail: &str, debug: bool, cause: &str) -> Response {
    let detail = if debug {
        format!("{}: {}", detail, cause)
    } else {
        detail.to_string()
    };
    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error",
        &detail,
        request_id,
    )
}

fn error_response(
    status: StatusCode,
    error: &str,
    detail: &str,
    request_id: &RequestId,
) -> Response {
    (
        status,
        Json(
            ErrorResponse::new(error)
                .with_detail(detail)
                .with_request_id(request_id.to_string()),
        ),
    )
        .into_response()
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ChatRequest {
    #[validate(length(min = 1, message = "Message must not be empty"))]
    #[schema(example = "Hello, how are you?", min_length = 1)]
    pub message: String,

    /// Falls back to the configured default model when omitted.
    #[schema(example = "gpt-4o-mini")]
    pub model: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    #[schema(example = "Hi there")]
    pub response: String,

    /// Model the upstream actually served, which may differ from the
    /// requested one.
    #[schema(example = "gpt-4o-mini")]
    pub model: String,

    #[schema(example = 42)]
    pub tokens_used: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ServiceAvailability {
    Available,
    Unavailable,
    Error,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceStatus {
    pub status: ServiceAvailability,
    #[schema(example = "Connected successfully")]
    pub message: String,
}

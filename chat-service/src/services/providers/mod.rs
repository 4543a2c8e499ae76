//! Chat provider abstraction and implementations.
//!
//! A trait-based seam over the upstream chat-completion API so the real
//! OpenAI backend and the scripted mock are interchangeable.

pub mod mock;
pub mod openai;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Network error: {0}")]
    NetworkError(String),
}

impl ProviderError {
    /// Stable short label for logs and status messages; never carries
    /// upstream payload content.
    pub fn kind(&self) -> &'static str {
        match self {
            ProviderError::NotConfigured(_) => "NotConfigured",
            ProviderError::ApiError(_) => "ApiError",
            ProviderError::RateLimited => "RateLimited",
            ProviderError::NetworkError(_) => "NetworkError",
        }
    }
}

/// Parameters applied to a single chat completion.
#[derive(Debug, Clone)]
pub struct ChatParams {
    pub model: String,
    pub system_prompt: String,
    pub max_tokens: u32,
}

/// Upstream completion result.
pub struct ProviderReply {
    /// Completion text; `None` when the upstream answered without any usable
    /// choice content.
    pub text: Option<String>,

    /// Model the upstream actually served.
    pub model: String,

    /// Total tokens billed; 0 when usage metadata was absent.
    pub total_tokens: u32,
}

#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Run one chat completion.
    async fn complete(
        &self,
        message: &str,
        params: &ChatParams,
    ) -> Result<ProviderReply, ProviderError>;

    /// Lightweight reachability probe; performs no real work.
    async fn health_check(&self) -> Result<(), ProviderError>;
}

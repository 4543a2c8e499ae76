//! AI gateway: mediates every call to the chat-completion upstream.

pub mod providers;

use providers::{ChatParams, ChatProvider, ProviderError};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("AI service is not available")]
    NotAvailable,

    #[error("Upstream AI service error: {0}")]
    Upstream(ProviderError),
}

/// A completed chat exchange as returned by the gateway.
pub struct ChatReply {
    /// `None` when the upstream produced no usable content.
    pub text: Option<String>,
    pub model: String,
    pub tokens_used: u32,
}

/// Wraps the configured chat provider. Constructed once at startup and shared
/// read-only across request tasks; availability is fixed at construction.
#[derive(Clone)]
pub struct AiGateway {
    provider: Option<Arc<dyn ChatProvider>>,
    system_prompt: String,
    max_tokens: u32,
}

impl AiGateway {
    pub fn new(
        provider: Arc<dyn ChatProvider>,
        system_prompt: impl Into<String>,
        max_tokens: u32,
    ) -> Self {
        Self {
            provider: Some(provider),
            system_prompt: system_prompt.into(),
            max_tokens,
        }
    }

    /// Gateway with no provider; every chat call reports `NotAvailable`.
    pub fn disabled() -> Self {
        Self {
            provider: None,
            system_prompt: String::new(),
            max_tokens: 0,
        }
    }

    pub fn is_available(&self) -> bool {
        self.provider.is_some()
    }

    /// Forward one chat message upstream. Upstream failures are propagated as
    /// `GatewayError::Upstream`, never swallowed. Only the message length is
    /// logged, never its content.
    pub async fn send_chat_message(
        &self,
        message: &str,
        model: &str,
    ) -> Result<ChatReply, GatewayError> {
        let provider = self.provider.as_ref().ok_or_else(|| {
            tracing::error!("Chat completion attempted without a configured provider");
            GatewayError::NotAvailable
        })?;

        let params = ChatParams {
            model: model.to_string(),
            system_prompt: self.system_prompt.clone(),
            max_tokens: self.max_tokens,
        };

        tracing::debug!(
            model = %model,
            message_len = message.len(),
            "Requesting chat completion"
        );

        let reply = provider.complete(message, &params).await.map_err(|e| {
            tracing::error!(
                model = %model,
                error_kind = e.kind(),
                error = %e,
                "Chat completion failed"
            );
            GatewayError::Upstream(e)
        })?;

        tracing::info!(
            model = %reply.model,
            tokens = reply.total_tokens,
            message_len = message.len(),
            "Chat completion succeeded"
        );

        Ok(ChatReply {
            text: reply.text,
            model: reply.model,
            tokens_used: reply.total_tokens,
        })
    }

    /// Probe upstream reachability. Never fails; reports the outcome instead.
    pub async fn test_connectivity(&self) -> (bool, String) {
        let Some(provider) = self.provider.as_ref() else {
            return (false, "Service not configured".to_string());
        };

        match provider.health_check().await {
            Ok(()) => {
                tracing::info!("Upstream connectivity probe succeeded");
                (true, "Connected successfully".to_string())
            }
            Err(e) => {
                tracing::error!(
                    error_kind = e.kind(),
                    error = %e,
                    "Upstream connectivity probe failed"
                );
                (false, format!("Connection failed: {}", e.kind()))
            }
        }
    }
}

//! Scripted mock provider for tests.

use super::{ChatParams, ChatProvider, ProviderError, ProviderReply};
use async_trait::async_trait;

enum Script {
    Reply {
        text: Option<String>,
        model: String,
        total_tokens: u32,
    },
    ApiError(String),
    Network(String),
}

pub struct MockChatProvider {
    script: Script,
}

impl MockChatProvider {
    /// Mock that answers every completion with a fixed reply.
    pub fn replying(text: &str, model: &str, total_tokens: u32) -> Self {
        Self {
            script: Script::Reply {
                text: Some(text.to_string()),
                model: model.to_string(),
                total_tokens,
            },
        }
    }

    /// Mock whose replies carry no content.
    pub fn empty(model: &str) -> Self {
        Self {
            script: Script::Reply {
                text: None,
                model: model.to_string(),
                total_tokens: 0,
            },
        }
    }

    /// Mock that fails every call with an upstream API error.
    pub fn failing(message: &str) -> Self {
        Self {
            script: Script::ApiError(message.to_string()),
        }
    }

    /// Mock that fails every call with a transport error.
    pub fn unreachable(message: &str) -> Self {
        Self {
            script: Script::Network(message.to_string()),
        }
    }

    fn failure(&self) -> Option<ProviderError> {
        match &self.script {
            Script::ApiError(msg) => Some(ProviderError::ApiError(msg.clone())),
            Script::Network(msg) => Some(ProviderError::NetworkError(msg.clone())),
            Script::Reply { .. } => None,
        }
    }
}

#[async_trait]
impl ChatProvider for MockChatProvider {
    async fn complete(
        &self,
        _message: &str,
        _params: &ChatParams,
    ) -> Result<ProviderReply, ProviderError> {
        match &self.script {
            Script::Reply {
                text,
                model,
                total_tokens,
            } => Ok(ProviderReply {
                text: text.clone(),
                model: model.clone(),
                total_tokens: *total_tokens,
            }),
            Script::ApiError(msg) => Err(ProviderError::ApiError(msg.clone())),
            Script::Network(msg) => Err(ProviderError::NetworkError(msg.clone())),
        }
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        match self.failure() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

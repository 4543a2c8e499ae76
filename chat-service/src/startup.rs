//! Application startup and lifecycle management.

use crate::config::ChatConfig;
use crate::services::AiGateway;
use crate::services::providers::openai::{OpenAiConfig, OpenAiProvider};
use crate::{AppState, build_router};
use service_core::error::AppError;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: ChatConfig) -> Result<Self, AppError> {
        let gateway = match &config.openai.api_key {
            Some(key) => {
                let provider = OpenAiProvider::new(OpenAiConfig {
                    api_key: key.clone(),
                    api_base: config.openai.api_base.clone(),
                });
                tracing::info!(
                    model = %config.openai.chat_model,
                    "Initialized OpenAI chat provider"
                );
                AiGateway::new(
                    Arc::new(provider),
                    config.openai.system_prompt.clone(),
                    config.openai.max_tokens,
                )
            }
            None => {
                tracing::warn!("OpenAI API key not configured; AI endpoints disabled");
                AiGateway::disabled()
            }
        };

        let state = AppState {
            config: config.clone(),
            gateway,
        };

        // Bind listener (port 0 = random port for testing)
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("chat-service listening on port {}", port);

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let app = build_router(self.state);

        axum::serve(
            self.listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
    }
}

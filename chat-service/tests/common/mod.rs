//! Test helpers for chat-service integration tests.

#![allow(dead_code)]

use chat_service::config::{ChatConfig, Environment, OpenAiSettings, SecuritySettings};
use chat_service::services::AiGateway;
use chat_service::services::providers::ChatProvider;
use chat_service::{AppState, build_router};
use service_core::config::Config;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Test application bound to a random local port.
pub struct TestApp {
    pub address: String,
    pub port: u16,
}

impl TestApp {
    /// Spawn the service with the given gateway.
    pub async fn spawn(gateway: AiGateway) -> TestApp {
        TestApp::spawn_with_config(test_config(), gateway).await
    }

    /// Spawn with a scripted provider behind a fully configured gateway.
    pub async fn spawn_with_provider(provider: Arc<dyn ChatProvider>) -> TestApp {
        let config = test_config();
        let gateway = AiGateway::new(
            provider,
            config.openai.system_prompt.clone(),
            config.openai.max_tokens,
        );
        TestApp::spawn_with_config(config, gateway).await
    }

    /// Spawn without an API key configured.
    pub async fn spawn_unavailable() -> TestApp {
        TestApp::spawn(AiGateway::disabled()).await
    }

    pub async fn spawn_with_config(config: ChatConfig, gateway: AiGateway) -> TestApp {
        let state = AppState { config, gateway };
        let app = build_router(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let port = listener.local_addr().expect("No local address").port();

        tokio::spawn(async move {
            axum::serve(
                listener,
                app.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .await
            .expect("Server error");
        });

        TestApp {
            address: format!("http://127.0.0.1:{}", port),
            port,
        }
    }

    pub fn client(&self) -> reqwest::Client {
        reqwest::Client::new()
    }
}

pub fn test_config() -> ChatConfig {
    ChatConfig {
        common: Config {
            port: 0,
            log_level: "info".to_string(),
        },
        environment: Environment::Dev,
        debug: false,
        openai: OpenAiSettings {
            // Providers are injected directly; the key is never read in tests.
            api_key: None,
            api_base: "https://api.openai.com/v1".to_string(),
            chat_model: "gpt-4o-mini".to_string(),
            system_prompt: "You are a helpful assistant.".to_string(),
            max_tokens: 500,
        },
        security: SecuritySettings {
            allowed_origins: vec!["*".to_string()],
        },
    }
}

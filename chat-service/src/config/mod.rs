use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
const DEFAULT_CHAT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant.";
const DEFAULT_MAX_TOKENS: u32 = 500;

#[derive(Debug, Clone)]
pub struct ChatConfig {
    pub common: core_config::Config,
    pub environment: Environment,
    /// Include raw failure detail in 500 responses.
    pub debug: bool,
    pub openai: OpenAiSettings,
    pub security: SecuritySettings,
}

#[derive(Debug, Clone)]
pub struct OpenAiSettings {
    /// Absent key disables the AI endpoints without preventing startup.
    pub api_key: Option<String>,
    pub api_base: String,
    /// Model used when a chat request does not name one.
    pub chat_model: String,
    pub system_prompt: String,
    pub max_tokens: u32,
}

#[derive(Debug, Clone)]
pub struct SecuritySettings {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Dev,
    Prod,
}

impl ChatConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;

        let environment = match env::var("ENVIRONMENT")
            .unwrap_or_else(|_| "dev".to_string())
            .as_str()
        {
            "prod" => Environment::Prod,
            _ => Environment::Dev,
        };
        let is_prod = environment == Environment::Prod;

        Ok(ChatConfig {
            common,
            environment,
            debug: get_env("APP_DEBUG", Some("false"), is_prod)?
                .parse()
                .unwrap_or(false),
            openai: OpenAiSettings {
                api_key: env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty()),
                api_base: get_env("OPENAI_API_BASE", Some(DEFAULT_API_BASE), is_prod)?,
                chat_model: get_env("CHAT_MODEL", Some(DEFAULT_CHAT_MODEL), is_prod)?,
                system_prompt: get_env("CHAT_SYSTEM_PROMPT", Some(DEFAULT_SYSTEM_PROMPT), is_prod)?,
                max_tokens: get_env(
                    "CHAT_MAX_TOKENS",
                    Some(&DEFAULT_MAX_TOKENS.to_string()),
                    is_prod,
                )?
                .parse()
                .unwrap_or(DEFAULT_MAX_TOKENS),
            },
            security: SecuritySettings {
                allowed_origins: get_env("ALLOWED_ORIGINS", Some("*"), is_prod)?
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}

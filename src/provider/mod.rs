// src/provider/mod.rs — Chat-completion provider layer

pub mod openai;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use crate::infra::config::{ModelConfig, ProviderKind};
use crate::infra::errors::ScribeError;

/// The chat-completion capability the generation pipeline depends on.
#[async_trait]
pub trait ModelProvider: Send + Sync {
    fn id(&self) -> &str;
    fn name(&self) -> &str;

    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, ScribeError>;
}

#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone)]
pub struct ChatResponse {
    pub content: String,
    pub usage: TokenUsage,
    pub stop_reason: StopReason,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl TokenUsage {
    pub fn total(&self) -> u32 {
        self.input_tokens + self.output_tokens
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub enum StopReason {
    EndTurn,
    MaxTokens,
    ContentFilter,
    #[default]
    Unknown,
}

/// Build the configured provider. Call `Config::validate` first.
pub fn from_config(config: &ModelConfig) -> Result<Arc<dyn ModelProvider>, ScribeError> {
    let api_key = config.api_key.clone().ok_or(ScribeError::NoProvider)?;
    let timeout = Duration::from_secs(config.request_timeout_seconds);

    let provider = match config.provider {
        ProviderKind::Azure => {
            let endpoint = config.endpoint.clone().ok_or_else(|| {
                ScribeError::Config("Azure provider requires an endpoint".into())
            })?;
            let api_version = config.api_version.clone().ok_or_else(|| {
                ScribeError::Config("Azure provider requires an api_version".into())
            })?;
            openai::OpenAIProvider::azure(api_key, endpoint, api_version, timeout)?
        }
        ProviderKind::OpenAI => {
            openai::OpenAIProvider::new(api_key, config.organization.clone(), timeout)?
        }
    };

    tracing::info!(
        provider = provider.name(),
        model = %config.model,
        "chat-completion provider configured"
    );
    Ok(Arc::new(provider))
}

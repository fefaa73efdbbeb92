// src/provider/openai.rs — OpenAI / Azure OpenAI chat completions provider

use async_trait::async_trait;
use std::time::Duration;

use super::{ChatRequest, ChatResponse, ModelProvider, StopReason, TokenUsage};
use crate::infra::errors::ScribeError;

/// Where requests go and how they authenticate.
#[derive(Debug, Clone)]
enum Flavor {
    OpenAI { organization: Option<String> },
    Azure { api_version: String },
}

pub struct OpenAIProvider {
    api_key: String,
    client: reqwest::Client,
    base_url: String,
    flavor: Flavor,
}

impl OpenAIProvider {
    /// Public OpenAI endpoint.
    pub fn new(
        api_key: String,
        organization: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ScribeError> {
        Self::with_base_url(
            api_key,
            "https://api.openai.com/v1".into(),
            organization,
            timeout,
        )
    }

    pub fn with_base_url(
        api_key: String,
        base_url: String,
        organization: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ScribeError> {
        Ok(Self {
            api_key,
            client: build_client(timeout)?,
            base_url: base_url.trim_end_matches('/').to_string(),
            flavor: Flavor::OpenAI { organization },
        })
    }

    /// Azure OpenAI deployment. The request's `model` is the deployment name.
    pub fn azure(
        api_key: String,
        endpoint: String,
        api_version: String,
        timeout: Duration,
    ) -> Result<Self, ScribeError> {
        Ok(Self {
            api_key,
            client: build_client(timeout)?,
            base_url: endpoint.trim_end_matches('/').to_string(),
            flavor: Flavor::Azure { api_version },
        })
    }

    fn completions_url(&self, model: &str) -> String {
        match &self.flavor {
            Flavor::OpenAI { .. } => format!("{}/chat/completions", self.base_url),
            Flavor::Azure { api_version } => format!(
                "{}/openai/deployments/{}/chat/completions?api-version={}",
                self.base_url, model, api_version
            ),
        }
    }

    fn authorize(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.flavor {
            Flavor::OpenAI { organization } => {
                let builder = builder.header("Authorization", format!("Bearer {}", self.api_key));
                match organization {
                    Some(org) => builder.header("OpenAI-Organization", org),
                    None => builder,
                }
            }
            Flavor::Azure { .. } => builder.header("api-key", &self.api_key),
        }
    }
}

fn build_client(timeout: Duration) -> Result<reqwest::Client, ScribeError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(format!("codescribe/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| ScribeError::Config(format!("Failed to build HTTP client: {e}")))
}

/// Serialize a chat request into the chat-completions JSON body.
pub(crate) fn build_body(request: &ChatRequest) -> serde_json::Value {
    let messages: Vec<serde_json::Value> = request
        .messages
        .iter()
        .map(|m| {
            serde_json::json!({
                "role": m.role.as_str(),
                "content": m.content,
            })
        })
        .collect();

    serde_json::json!({
        "model": request.model,
        "messages": messages,
    })
}

/// Extract the first choice of a chat-completions response.
pub(crate) fn parse_response(resp: &serde_json::Value) -> ChatResponse {
    let choice = &resp["choices"][0];
    let content = choice["message"]["content"]
        .as_str()
        .unwrap_or("")
        .to_string();

    let usage = TokenUsage {
        input_tokens: resp["usage"]["prompt_tokens"].as_u64().unwrap_or(0) as u32,
        output_tokens: resp["usage"]["completion_tokens"].as_u64().unwrap_or(0) as u32,
    };

    let stop_reason = match choice["finish_reason"].as_str() {
        Some("stop") => StopReason::EndTurn,
        Some("length") => StopReason::MaxTokens,
        Some("content_filter") => StopReason::ContentFilter,
        _ => StopReason::Unknown,
    };

    ChatResponse {
        content,
        usage,
        stop_reason,
    }
}

/// Map a non-success HTTP status to an error.
pub(crate) fn status_error(provider: &str, status: reqwest::StatusCode, body: &str) -> ScribeError {
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return ScribeError::RateLimited {
            provider: provider.into(),
        };
    }
    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        return ScribeError::Auth {
            provider: provider.into(),
            message: format!("HTTP {}", status),
        };
    }
    ScribeError::Provider {
        provider: provider.into(),
        message: format!("HTTP {}: {}", status, body),
    }
}

#[async_trait]
impl ModelProvider for OpenAIProvider {
    fn id(&self) -> &str {
        match self.flavor {
            Flavor::OpenAI { .. } => "openai",
            Flavor::Azure { .. } => "azure",
        }
    }

    fn name(&self) -> &str {
        match self.flavor {
            Flavor::OpenAI { .. } => "OpenAI",
            Flavor::Azure { .. } => "Azure OpenAI",
        }
    }

    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, ScribeError> {
        let body = build_body(&request);

        let response = self
            .authorize(self.client.post(self.completions_url(&request.model)))
            .json(&body)
            .send()
            .await
            .map_err(|e| ScribeError::Provider {
                provider: self.id().into(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(status_error(self.id(), status, &error_body));
        }

        let resp: serde_json::Value = response.json().await.map_err(|e| ScribeError::Provider {
            provider: self.id().into(),
            message: format!("Failed to parse response: {}", e),
        })?;

        let parsed = parse_response(&resp);
        tracing::debug!(
            provider = self.id(),
            input_tokens = parsed.usage.input_tokens,
            output_tokens = parsed.usage.output_tokens,
            "chat completion received"
        );
        Ok(parsed)
    }
}

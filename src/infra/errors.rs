// src/infra/errors.rs — Error types for CodeScribe

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScribeError {
    // Upstream chat-completion errors
    #[error("Provider '{provider}' error: {message}")]
    Provider { provider: String, message: String },

    #[error("Rate limited by '{provider}'")]
    RateLimited { provider: String },

    #[error("Provider '{provider}' rejected credentials: {message}")]
    Auth { provider: String, message: String },

    // Startup / infra
    #[error("No provider credentials configured. Set AZURE_OPENAI_API_KEY or OPENAI_SECRET_KEY.")]
    NoProvider,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScribeError {
    /// Errors raised by the chat-completion collaborator.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            ScribeError::Provider { .. }
                | ScribeError::RateLimited { .. }
                | ScribeError::Auth { .. }
        )
    }
}

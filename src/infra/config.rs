// src/infra/config.rs — Configuration loading (TOML + environment)

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::infra::errors::ScribeError;
use crate::infra::paths;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub model: ModelConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub name: String,
    pub version: String,
    pub extension_version: String,
    pub organization: String,
    #[serde(default)]
    pub environment: Option<String>,
    #[serde(default = "default_accepted_versions")]
    pub accepted_versions: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: "CodeScribe".into(),
            version: "0.0.1".into(),
            extension_version: "0.0.1".into(),
            organization: "SNED".into(),
            environment: None,
            accepted_versions: default_accepted_versions(),
        }
    }
}

fn default_accepted_versions() -> Vec<String> {
    vec!["v1".into()]
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Allowed CORS origins. `"*"` allows any origin.
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8000,
            cors_origins: default_cors_origins(),
        }
    }
}

// The editor extension calls from a webview whose origin is not stable.
fn default_cors_origins() -> Vec<String> {
    vec!["*".into()]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Azure,
    OpenAI,
}

impl std::str::FromStr for ProviderKind {
    type Err = ScribeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "azure" => Ok(ProviderKind::Azure),
            "openai" => Ok(ProviderKind::OpenAI),
            other => Err(ScribeError::Config(format!("unknown provider '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub provider: ProviderKind,
    /// Model id (OpenAI) or deployment name (Azure).
    pub model: String,
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub api_version: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
    pub request_timeout_seconds: u64,
    /// Secret; only ever read from the environment.
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::Azure,
            model: "gpt-model-01".into(),
            endpoint: None,
            api_version: None,
            organization: None,
            request_timeout_seconds: 60,
            api_key: None,
        }
    }
}

impl Config {
    /// Load config from file, falling back to defaults.
    pub fn load() -> Result<Self, ScribeError> {
        let path = paths::config_file_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ScribeError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Overlay values from the process environment.
    pub fn apply_env(&mut self) -> Result<(), ScribeError> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Overlay values from an arbitrary lookup. Empty values are ignored.
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<(), ScribeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(provider) = get("CODESCRIBE_PROVIDER") {
            self.model.provider = provider.parse()?;
        }
        if let Some(env) = get("ENVIRONMENT") {
            self.app.environment = Some(env);
        }
        if let Some(model) = get("MODEL_NAME") {
            self.model.model = model;
        }

        match self.model.provider {
            ProviderKind::Azure => {
                if let Some(key) = get("AZURE_OPENAI_API_KEY") {
                    self.model.api_key = Some(key);
                }
                if let Some(endpoint) = get("AZURE_OPENAI_ENDPOINT") {
                    self.model.endpoint = Some(endpoint);
                }
                if let Some(version) = get("OPENAI_API_VERSION") {
                    self.model.api_version = Some(version);
                }
            }
            ProviderKind::OpenAI => {
                if let Some(key) = get("OPENAI_SECRET_KEY") {
                    self.model.api_key = Some(key);
                }
                if let Some(org) = get("OPENAI_ORGANIZATION_ID") {
                    self.model.organization = Some(org);
                }
            }
        }
        Ok(())
    }

    /// Check that the model section is usable before the server starts.
    pub fn validate(&self) -> Result<(), ScribeError> {
        if self.model.model.trim().is_empty() {
            return Err(ScribeError::Config("model name must not be empty".into()));
        }
        if self.model.request_timeout_seconds == 0 {
            return Err(ScribeError::Config(
                "model.request_timeout_seconds must be greater than zero".into(),
            ));
        }
        if self.model.provider == ProviderKind::Azure {
            if self.model.endpoint.is_none() {
                return Err(ScribeError::Config(
                    "Azure provider requires AZURE_OPENAI_ENDPOINT or model.endpoint".into(),
                ));
            }
            if self.model.api_version.is_none() {
                return Err(ScribeError::Config(
                    "Azure provider requires OPENAI_API_VERSION or model.api_version".into(),
                ));
            }
        }
        if self.model.api_key.is_none() {
            return Err(ScribeError::NoProvider);
        }
        Ok(())
    }
}

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::debug;

use crate::application::{TextGenerator, ZodiacHoroscopeUseCase};
use crate::connector::adapter::{OpenAiClient, DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::domain::DomainError;

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";
pub const MODEL_VAR: &str = "OPENAI_MODEL";
pub const TIMEOUT_VAR: &str = "OPENAI_TIMEOUT_SECS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing OpenAI API key. Set OPENAI_API_KEY in the environment or a .env file.")]
    MissingApiKey,

    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Process configuration for the text-generation provider, read once at startup.
///
/// | Variable              | Default                  | Purpose                       |
/// |-----------------------|--------------------------|-------------------------------|
/// | `OPENAI_API_KEY`      | required                 | Bearer credential             |
/// | `OPENAI_BASE_URL`     | `https://api.openai.com` | OpenAI or a compatible server |
/// | `OPENAI_MODEL`        | `gpt-3.5-turbo-instruct` | Completions model             |
/// | `OPENAI_TIMEOUT_SECS` | unset (no timeout)       | Per-request timeout           |
#[derive(Clone)]
pub struct ContainerConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Option<Duration>,
}

impl ContainerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the configuration from any variable source. A blank variable is
    /// treated the same as a missing one.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

        let api_key = non_blank(API_KEY_VAR).ok_or(ConfigError::MissingApiKey)?;
        let base_url = non_blank(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let model = non_blank(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let timeout = match non_blank(TIMEOUT_VAR) {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
                _ => {
                    return Err(ConfigError::InvalidValue {
                        var: TIMEOUT_VAR,
                        value,
                    });
                }
            },
            None => None,
        };

        Ok(Self {
            api_key,
            base_url,
            model,
            timeout,
        })
    }
}

impl std::fmt::Debug for ContainerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContainerConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Owns the long-lived services and hands out use cases wired to them.
pub struct Container {
    generator: Arc<dyn TextGenerator>,
}

impl Container {
    pub fn new(config: &ContainerConfig) -> Result<Self, ConfigError> {
        debug!(
            "Initializing OpenAI client for model {} at {}",
            config.model, config.base_url
        );
        let client = OpenAiClient::new(
            config.api_key.clone(),
            config.model.clone(),
            config.base_url.clone(),
            config.timeout,
        )?;

        Ok(Self::with_generator(Arc::new(client)))
    }

    pub fn with_generator(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub fn zodiac_horoscope_use_case(&self) -> ZodiacHoroscopeUseCase {
        ZodiacHoroscopeUseCase::new(self.generator.clone())
    }
}

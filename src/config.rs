//! Runtime configuration for the completion client.

use std::env;

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::error::ConfigError;

/// Chat completions endpoint used by the CLI.
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Model used when `OPENAI_MODEL` is unset.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Response length cap. Only a short message is expected back.
pub const MAX_TOKENS: u32 = 150;

/// Sampling temperature.
pub const TEMPERATURE: f32 = 0.5;

/// Environment variable holding the bearer credential.
pub const API_KEY_ENV_VAR: &str = "OPENAI_API_KEY";

/// Environment variable overriding the default model.
pub const MODEL_ENV_VAR: &str = "OPENAI_MODEL";

/// Settings passed explicitly into the completion client.
#[derive(Debug)]
pub struct Config {
    api_key: SecretString,
    pub model: String,
    pub endpoint: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Config {
    /// Create a config with the given key and default everything else.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Load from the process environment.
    ///
    /// Call `dotenv` beforehand if `.env` values should be visible here.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup.
    ///
    /// Empty or whitespace-only values count as unset. A missing key is
    /// reported before anything else is touched.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = non_empty(API_KEY_ENV_VAR).ok_or(ConfigError::MissingApiKey)?;
        let mut config = Config::new(api_key.trim());

        if let Some(model) = non_empty(MODEL_ENV_VAR) {
            config.model = model.trim().to_string();
        }

        debug!(model = %config.model, "Loaded configuration");
        Ok(config)
    }

    /// The bearer credential, for building the authorization header.
    pub(crate) fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

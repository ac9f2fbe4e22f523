//! Environment-driven configuration.
//!
//! The only switch that changes behavior is the inference credential: with a
//! usable key the predictor asks the inference service first, without one it
//! runs the heuristic scorer directly.

use std::env;

use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

const PLACEHOLDER_MARKERS: &[&str] = &["your-", "your_", "placeholder", "changeme", "xxx"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

/// Connection settings for the inference service.
#[derive(Debug, Clone)]
pub struct InferenceConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl InferenceConfig {
    /// Settings for `api_key` with default endpoint, model and timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Debug, Clone)]
pub struct PredictorConfig {
    /// `None` when no usable credential is configured.
    pub inference: Option<InferenceConfig>,
    pub log_level: String,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            inference: None,
            log_level: "info".to_string(),
        }
    }
}

impl PredictorConfig {
    /// Load configuration from environment variables.
    /// Loads `.env` file if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Best-effort .env load; ignore if missing
        let _ = dotenvy::dotenv();

        let inference = match env::var("HOTSPOT_INFERENCE_API_KEY").ok() {
            Some(key) if is_usable_credential(&key) => Some(InferenceConfig {
                api_key: key.trim().to_string(),
                base_url: get_var_or("HOTSPOT_INFERENCE_BASE_URL", DEFAULT_BASE_URL),
                model: get_var_or("HOTSPOT_INFERENCE_MODEL", DEFAULT_MODEL),
                timeout_secs: parse_timeout()?,
            }),
            _ => None,
        };

        Ok(Self {
            inference,
            log_level: get_var_or("LOG_LEVEL", "info"),
        })
    }

    pub fn inference_enabled(&self) -> bool {
        self.inference
            .as_ref()
            .is_some_and(|c| is_usable_credential(&c.api_key))
    }
}

/// A credential is usable when it is non-blank and not a template value.
pub fn is_usable_credential(key: &str) -> bool {
    let key = key.trim().to_ascii_lowercase();
    !key.is_empty() && !PLACEHOLDER_MARKERS.iter().any(|m| key.contains(m))
}

fn parse_timeout() -> Result<u64, ConfigError> {
    match env::var("HOTSPOT_INFERENCE_TIMEOUT_SECS") {
        Ok(raw) => raw.trim().parse().map_err(|e| ConfigError::Invalid {
            key: "HOTSPOT_INFERENCE_TIMEOUT_SECS",
            message: format!("{e}"),
        }),
        Err(_) => Ok(DEFAULT_TIMEOUT_SECS),
    }
}

fn get_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

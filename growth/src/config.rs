//! Configuration parsed from environment variables.
//!
//! The Gemini credential is named indirectly: `GEMINI_API_KEY_ENV` holds the
//! name of the variable that holds the key, defaulting to `GEMINI_API_KEY`.
//! The key itself is never printed; `Debug` redacts it.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::fmt;

use crate::modules::Module;
use crate::projection::{self, Multipliers};

pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash-preview-09-2025";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Errors produced while reading configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The variable that should hold the API key is unset or empty.
    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: String },

    /// A multiplier override is not a number.
    #[error("config parse failed: {var}={raw:?} is not a number")]
    Parse { var: &'static str, raw: String },

    /// A multiplier would shrink its funnel stage.
    #[error("invalid {module} multiplier {value}: must be a finite number >= 1.0")]
    InvalidMultiplier { module: &'static str, value: f64 },
}

/// Settings for the remote summary call.
#[derive(Clone, PartialEq, Eq)]
pub struct SummaryConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl fmt::Debug for SummaryConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SummaryConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl SummaryConfig {
    /// Build summary config from environment variables.
    ///
    /// Optional:
    /// - `GEMINI_API_KEY_ENV`: name of the key variable (default `GEMINI_API_KEY`)
    /// - `GEMINI_MODEL`: default `gemini-2.5-flash-preview-09-2025`
    /// - `GEMINI_BASE_URL`: default Generative Language v1beta endpoint
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] when the key variable is unset or blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        let key_var = std::env::var("GEMINI_API_KEY_ENV").unwrap_or_else(|_| DEFAULT_API_KEY_ENV.to_owned());
        let api_key = std::env::var(&key_var)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingApiKey { var: key_var.clone() })?;

        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_owned());
        let base_url = std::env::var("GEMINI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();

        Ok(Self { api_key, model, base_url })
    }

    /// `generateContent` URL for the configured model (without the key).
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

impl Multipliers {
    /// Read explicit multiplier overrides; unset variables keep the defaults.
    ///
    /// - `GROWTH_CHATBOT_MULTIPLIER` (default 1.25)
    /// - `GROWTH_CRM_MULTIPLIER` (default 1.30)
    /// - `GROWTH_SEO_MULTIPLIER` (default 1.50)
    ///
    /// # Errors
    ///
    /// A set-but-malformed or sub-1.0 value is an error rather than a silent
    /// fallback to the default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            chatbot: env_multiplier("GROWTH_CHATBOT_MULTIPLIER", Module::Chatbot, defaults.chatbot)?,
            crm: env_multiplier("GROWTH_CRM_MULTIPLIER", Module::Crm, defaults.crm)?,
            seo: env_multiplier("GROWTH_SEO_MULTIPLIER", Module::Seo, defaults.seo)?,
        })
    }
}

fn env_multiplier(var: &'static str, module: Module, default: f64) -> Result<f64, ConfigError> {
    let Ok(raw) = std::env::var(var) else {
        return Ok(default);
    };
    let value = raw.trim().parse::<f64>().map_err(|_| ConfigError::Parse { var, raw: raw.clone() })?;
    projection::validate(module, value)?;
    Ok(value)
}

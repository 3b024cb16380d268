use std::fmt;

use crate::config::constants::{
    is_supported_model, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
    MAX_OUTPUT_TOKENS, MAX_TEMPERATURE, MIN_OUTPUT_TOKENS, MIN_TEMPERATURE, SUPPORTED_MODELS,
};
use crate::errors::{QandaError, QandaResult};

/// Per-submission generation parameters.
///
/// Constructed fresh for every submission and never stored. The credential
/// is redacted from debug output and must not appear in any log line.
#[derive(Clone)]
pub struct GenerationConfig {
    pub api_key: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl GenerationConfig {
    pub fn new(api_key: String, model: String, temperature: f32, max_tokens: u32) -> Self {
        Self {
            api_key,
            model,
            temperature,
            max_tokens,
        }
    }

    /// Checks every field before the remote call is attempted. Any failure
    /// here means no network I/O happens for this submission.
    pub fn validate(&self) -> QandaResult<()> {
        if self.api_key.trim().is_empty() {
            return Err(QandaError::MissingCredential);
        }

        if !is_supported_model(&self.model) {
            return Err(QandaError::validation_error(
                "model",
                &self.model,
                &format!("must be one of: {}", SUPPORTED_MODELS.join(", ")),
                Some("run 'qanda-cli models' to list the supported models"),
            ));
        }

        if !(MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&self.temperature) {
            return Err(QandaError::validation_error(
                "temperature",
                &self.temperature.to_string(),
                &format!("must be between {} and {}", MIN_TEMPERATURE, MAX_TEMPERATURE),
                None,
            ));
        }

        if !(MIN_OUTPUT_TOKENS..=MAX_OUTPUT_TOKENS).contains(&self.max_tokens) {
            return Err(QandaError::validation_error(
                "max_tokens",
                &self.max_tokens.to_string(),
                &format!("must be between {} and {}", MIN_OUTPUT_TOKENS, MAX_OUTPUT_TOKENS),
                None,
            ));
        }

        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

// Manual impl so the credential can never leak through {:?} formatting.
impl fmt::Debug for GenerationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationConfig")
            .field("api_key", &"***")
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

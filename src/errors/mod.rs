use std::error::Error as StdError;
use std::fmt;

use crate::config::constants::OPENAI_API_KEY_ENV;
use crate::enums::ai_provider_error::AiProviderError;

#[derive(Debug, Clone)]
pub enum QandaError {
    // Guard conditions, checked before any component runs
    MissingCredential,
    MissingInput,

    // Configuration errors
    ValidationError {
        field: String,
        value: String,
        constraint: String,
        suggestion: Option<String>,
    },

    // Remote call errors, surfaced as-is
    ProviderError(AiProviderError),

    // System errors
    SystemError {
        operation: String,
        reason: String,
    },
}

impl QandaError {
    pub fn validation_error(field: &str, value: &str, constraint: &str, suggestion: Option<&str>) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Guard notices end the submission without a remote call; they are
    /// shown to the user instead of being propagated as failures.
    pub fn is_guard_notice(&self) -> bool {
        matches!(self, Self::MissingCredential | Self::MissingInput)
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::MissingCredential => {
                format!(
                    "Please provide your OpenAI API key.\n💡 Set the {} environment variable or pass --api-key",
                    OPENAI_API_KEY_ENV
                )
            }
            Self::MissingInput => "Please provide a question to get started.".to_string(),
            Self::ValidationError { field, value, constraint, suggestion } => {
                let mut msg = format!(
                    "Validation error for field '{}': value '{}' violates constraint '{}'",
                    field, value, constraint
                );
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::ProviderError(error) => error.to_string(),
            Self::SystemError { operation, reason } => {
                format!("System error during {}: {}", operation, reason)
            }
        }
    }
}

impl fmt::Display for QandaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl StdError for QandaError {}

impl From<AiProviderError> for QandaError {
    fn from(error: AiProviderError) -> Self {
        Self::ProviderError(error)
    }
}

impl From<std::io::Error> for QandaError {
    fn from(error: std::io::Error) -> Self {
        Self::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

/// Result type alias for qanda operations
pub type QandaResult<T> = Result<T, QandaError>;

use std::error::Error;
use std::fmt;

#[derive(Debug, Clone)]
pub enum AiProviderError {
    AuthenticationError(String),
    RemoteServiceError(String),
}

impl fmt::Display for AiProviderError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AiProviderError::AuthenticationError(msg) => write!(f, "Authentication Error: {}", msg),
            AiProviderError::RemoteServiceError(msg) => write!(f, "Remote Service Error: {}", msg),
        }
    }
}

impl Error for AiProviderError {}

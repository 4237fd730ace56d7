//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

use super::value_objects::ModelSelector;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("No API key configured for {provider} ({variable})")]
    MissingCredential {
        provider: ModelSelector,
        variable: &'static str,
    },

    #[error("Request to {provider} failed: {message}")]
    Transport {
        provider: ModelSelector,
        message: String,
    },

    #[error("{provider} returned HTTP {status}: {body}")]
    ProviderStatus {
        provider: ModelSelector,
        status: u16,
        body: String,
    },

    #[error("Malformed response from {provider}: {message}")]
    MalformedResponse {
        provider: ModelSelector,
        message: String,
    },

    #[error("Knowledge base error: {0}")]
    KnowledgeBase(String),
}

impl DomainError {
    pub fn missing_credential(provider: ModelSelector) -> Self {
        Self::MissingCredential {
            provider,
            variable: provider.credential_var(),
        }
    }

    pub fn transport<T: ToString>(provider: ModelSelector, err: T) -> Self {
        Self::Transport {
            provider,
            message: err.to_string(),
        }
    }

    pub fn malformed<T: AsRef<str>>(provider: ModelSelector, message: T) -> Self {
        Self::MalformedResponse {
            provider,
            message: message.as_ref().to_string(),
        }
    }
}

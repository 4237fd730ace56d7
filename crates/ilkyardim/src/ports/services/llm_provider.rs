//! LLM Provider Port
//!
//! Abstract interface for LLM invocations. Each provider in the closed
//! [`ModelSelector`] set describes its wire envelope through [`ProviderApi`];
//! an [`LlmGateway`] owns the transport and sends what the envelope builds.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::value_objects::ModelSelector;

/// An HTTP request ready to send to a provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderRequest {
    /// Endpoint URL without a query string
    pub url: String,
    /// Query parameters, percent-encoded by the gateway
    pub query: Vec<(String, String)>,
    /// Sent as `Authorization: Bearer <token>` when present
    pub bearer_token: Option<String>,
    /// JSON request body
    pub body: serde_json::Value,
}

/// What a provider answered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderReply {
    /// Answer text as returned (may be empty)
    Text(String),
    /// The provider returned no candidates/choices at all
    NoCandidates,
}

/// Request/response envelope of one provider
///
/// # Example
///
/// ```rust,ignore
/// use ilkyardim::ports::ProviderApi;
///
/// struct GeminiApi { /* ... */ }
///
/// impl ProviderApi for GeminiApi {
///     fn selector(&self) -> ModelSelector { ModelSelector::Gemini }
///     fn build_request(&self, api_key: &str, prompt: &str) -> ProviderRequest { /* ... */ }
///     fn parse_response(&self, body: &serde_json::Value) -> Result<ProviderReply, DomainError> { /* ... */ }
/// }
/// ```
pub trait ProviderApi: Send + Sync {
    /// Which selector this envelope serves
    fn selector(&self) -> ModelSelector;

    /// Model ID sent to (or addressed at) the provider
    fn model_id(&self) -> &str;

    /// Build the completion request for a single-prompt question
    fn build_request(&self, api_key: &str, prompt: &str) -> ProviderRequest;

    /// Extract the answer text from a successful response body
    fn parse_response(&self, body: &serde_json::Value) -> Result<ProviderReply, DomainError>;
}

/// Sends a prompt to the provider named by a selector
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// One attempt, no retries. Every failure (missing credential,
    /// transport, non-2xx status, malformed body) is returned as an error.
    async fn complete(
        &self,
        selector: ModelSelector,
        prompt: &str,
    ) -> Result<ProviderReply, DomainError>;
}

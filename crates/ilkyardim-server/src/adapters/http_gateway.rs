//! HTTP LLM Gateway
//!
//! Sends provider requests with reqwest: one attempt, bounded by the
//! configured timeout.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use ilkyardim::{DomainError, LlmGateway, ModelSelector, ProviderReply};

use super::providers::ProviderSet;
use crate::config::{ProviderCredentials, ProviderEndpoints};

/// reqwest implementation of LlmGateway
pub struct HttpLlmGateway {
    client: Client,
    credentials: ProviderCredentials,
    providers: ProviderSet,
}

impl HttpLlmGateway {
    pub fn new(
        credentials: ProviderCredentials,
        endpoints: &ProviderEndpoints,
        timeout: Duration,
    ) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("ilkyardim/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            credentials,
            providers: ProviderSet::new(endpoints),
        })
    }
}

#[async_trait]
impl LlmGateway for HttpLlmGateway {
    async fn complete(
        &self,
        selector: ModelSelector,
        prompt: &str,
    ) -> Result<ProviderReply, DomainError> {
        let api = self.providers.api(selector);
        let api_key = self
            .credentials
            .get(selector)
            .ok_or_else(|| DomainError::missing_credential(selector))?;

        let request = api.build_request(api_key, prompt);
        let mut builder = self
            .client
            .post(&request.url)
            .query(&request.query)
            .json(&request.body);
        if let Some(token) = &request.bearer_token {
            builder = builder.bearer_auth(token);
        }

        tracing::info!(provider = %selector, model = api.model_id(), "Calling provider");

        // Errors may carry the URL, which holds the Gemini key
        let response = builder
            .send()
            .await
            .map_err(|e| DomainError::transport(selector, e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(DomainError::ProviderStatus {
                provider: selector,
                status: status.as_u16(),
                body,
            });
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| DomainError::malformed(selector, e.without_url().to_string()))?;

        tracing::debug!(provider = %selector, "Provider response: {}", body);

        api.parse_response(&body)
    }
}

//! Provider Dispatcher
//!
//! Turns a question and a `model` field value into a displayable answer.
//! Every provider failure collapses into the disclaimer here; nothing
//! escapes to the caller.

use std::sync::Arc;

use super::{build_prompt, format_response, DISCLAIMER, INVALID_MODEL_MESSAGE, REPLY_NOT_RETRIEVED};
use crate::domain::value_objects::ModelSelector;
use crate::ports::{LlmGateway, ProviderReply};

/// Routes questions to the selected external provider
#[derive(Clone)]
pub struct ProviderDispatcher {
    gateway: Arc<dyn LlmGateway>,
}

impl ProviderDispatcher {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self { gateway }
    }

    /// Ask the provider named by `model`
    pub async fn answer(&self, question: &str, model: &str) -> String {
        let selector: ModelSelector = match model.parse() {
            Ok(selector) => selector,
            Err(e) => {
                tracing::warn!("{}", e);
                return INVALID_MODEL_MESSAGE.to_string();
            }
        };

        self.answer_with(question, selector).await
    }

    /// Ask a specific provider
    pub async fn answer_with(&self, question: &str, selector: ModelSelector) -> String {
        let prompt = build_prompt(question);

        match self.gateway.complete(selector, &prompt).await {
            Ok(ProviderReply::Text(text)) => {
                tracing::debug!(provider = %selector, "Provider reply: {:?}", text);
                if text.trim().is_empty() {
                    format_response(REPLY_NOT_RETRIEVED)
                } else {
                    format_response(&text)
                }
            }
            Ok(ProviderReply::NoCandidates) => {
                tracing::warn!(provider = %selector, "Provider returned no candidates");
                DISCLAIMER.to_string()
            }
            Err(e) => {
                tracing::warn!(provider = %selector, "Provider call failed: {}", e);
                DISCLAIMER.to_string()
            }
        }
    }
}

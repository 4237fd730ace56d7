//! Provider envelopes
//!
//! One [`ProviderApi`] per [`ModelSelector`] variant. The set is closed:
//! [`ProviderSet::api`] is an exhaustive match.

mod gemini;
mod openai;

pub use gemini::GeminiApi;
pub use openai::OpenAiCompatibleApi;

use ilkyardim::{ModelSelector, ProviderApi};

use crate::config::ProviderEndpoints;

/// Envelopes of every supported provider
pub struct ProviderSet {
    gemini: GeminiApi,
    deepseek: OpenAiCompatibleApi,
    chatgpt: OpenAiCompatibleApi,
}

impl ProviderSet {
    pub fn new(endpoints: &ProviderEndpoints) -> Self {
        Self {
            gemini: GeminiApi::new(&endpoints.gemini),
            deepseek: OpenAiCompatibleApi::deepseek(&endpoints.deepseek),
            chatgpt: OpenAiCompatibleApi::chatgpt(&endpoints.openai),
        }
    }

    pub fn api(&self, selector: ModelSelector) -> &dyn ProviderApi {
        match selector {
            ModelSelector::Gemini => &self.gemini,
            ModelSelector::DeepSeek => &self.deepseek,
            ModelSelector::ChatGpt => &self.chatgpt,
        }
    }
}

impl Default for ProviderSet {
    fn default() -> Self {
        Self::new(&ProviderEndpoints::default())
    }
}

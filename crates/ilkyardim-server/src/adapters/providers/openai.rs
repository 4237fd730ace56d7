//! OpenAI-style `chat/completions` envelope (OpenAI and DeepSeek)

use serde::Deserialize;
use serde_json::json;

use ilkyardim::{DomainError, ModelSelector, ProviderApi, ProviderReply, ProviderRequest};

/// Chat-messages-array envelope with bearer auth
#[derive(Debug, Clone)]
pub struct OpenAiCompatibleApi {
    selector: ModelSelector,
    url: String,
    model: String,
}

impl OpenAiCompatibleApi {
    pub fn new(
        selector: ModelSelector,
        base_url: &str,
        path: &str,
        model: impl Into<String>,
    ) -> Self {
        Self {
            selector,
            url: format!("{}{}", base_url.trim_end_matches('/'), path),
            model: model.into(),
        }
    }

    pub fn deepseek(base_url: &str) -> Self {
        Self::new(
            ModelSelector::DeepSeek,
            base_url,
            "/chat/completions",
            "deepseek-chat",
        )
    }

    pub fn chatgpt(base_url: &str) -> Self {
        Self::new(
            ModelSelector::ChatGpt,
            base_url,
            "/v1/chat/completions",
            "gpt-3.5-turbo",
        )
    }
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<Message>,
}

#[derive(Deserialize)]
struct Message {
    content: Option<String>,
}

impl ProviderApi for OpenAiCompatibleApi {
    fn selector(&self) -> ModelSelector {
        self.selector
    }

    fn model_id(&self) -> &str {
        &self.model
    }

    fn build_request(&self, api_key: &str, prompt: &str) -> ProviderRequest {
        ProviderRequest {
            url: self.url.clone(),
            query: Vec::new(),
            bearer_token: Some(api_key.to_string()),
            body: json!({
                "model": self.model,
                "messages": [{ "role": "user", "content": prompt }]
            }),
        }
    }

    fn parse_response(&self, body: &serde_json::Value) -> Result<ProviderReply, DomainError> {
        let response = ChatCompletionResponse::deserialize(body)
            .map_err(|e| DomainError::malformed(self.selector, e.to_string()))?;

        let Some(choice) = response.choices.into_iter().next() else {
            return Ok(ProviderReply::NoCandidates);
        };

        let message = choice
            .message
            .ok_or_else(|| DomainError::malformed(self.selector, "choice has no message"))?;

        Ok(ProviderReply::Text(message.content.unwrap_or_default()))
    }
}

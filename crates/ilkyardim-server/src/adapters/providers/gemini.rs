//! Google Gemini `generateContent` envelope

use serde::Deserialize;
use serde_json::json;

use ilkyardim::{DomainError, ModelSelector, ProviderApi, ProviderReply, ProviderRequest};

const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";

/// Gemini: single content part in, candidates out. The key travels in the
/// query string.
#[derive(Debug, Clone)]
pub struct GeminiApi {
    base_url: String,
    model: String,
}

impl GeminiApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

impl ProviderApi for GeminiApi {
    fn selector(&self) -> ModelSelector {
        ModelSelector::Gemini
    }

    fn model_id(&self) -> &str {
        &self.model
    }

    fn build_request(&self, api_key: &str, prompt: &str) -> ProviderRequest {
        ProviderRequest {
            url: format!(
                "{}/v1beta/models/{}:generateContent",
                self.base_url, self.model
            ),
            query: vec![("key".to_string(), api_key.to_string())],
            bearer_token: None,
            body: json!({
                "contents": [{ "parts": [{ "text": prompt }] }]
            }),
        }
    }

    fn parse_response(&self, body: &serde_json::Value) -> Result<ProviderReply, DomainError> {
        let response = GenerateContentResponse::deserialize(body)
            .map_err(|e| DomainError::malformed(ModelSelector::Gemini, e.to_string()))?;

        let Some(candidate) = response.candidates.into_iter().next() else {
            return Ok(ProviderReply::NoCandidates);
        };

        let part = candidate
            .content
            .and_then(|content| content.parts.into_iter().next())
            .ok_or_else(|| DomainError::malformed(ModelSelector::Gemini, "candidate has no content parts"))?;

        Ok(ProviderReply::Text(part.text.unwrap_or_default()))
    }
}

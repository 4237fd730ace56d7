//! Chat request/response bodies

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Question form posted to `/`
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct AskForm {
    /// The question; required, non-empty after trimming
    #[serde(default)]
    pub soru: Option<String>,
    /// Provider: `gemini` (default), `deepseek` or `chatgpt`
    #[serde(default)]
    pub model: Option<String>,
}

/// Answer to a question
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnswerResponse {
    pub cevap: String,
}

/// Error body for 4xx/5xx responses
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// One `<option>` of the model picker
#[derive(Debug, Clone)]
pub struct ModelOption {
    pub value: String,
    pub label: &'static str,
    pub selected: bool,
}

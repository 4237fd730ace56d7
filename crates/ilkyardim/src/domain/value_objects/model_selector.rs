//! ModelSelector - which external LLM provider answers a question

use serde::{Deserialize, Serialize};

/// External LLM provider selected by the `model` form field
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ModelSelector {
    #[default]
    Gemini,
    DeepSeek,
    ChatGpt,
}

impl ModelSelector {
    /// Every selectable provider, in UI order
    pub const ALL: [ModelSelector; 3] = [
        ModelSelector::Gemini,
        ModelSelector::DeepSeek,
        ModelSelector::ChatGpt,
    ];

    /// Name of the process variable holding this provider's API key
    pub fn credential_var(&self) -> &'static str {
        match self {
            ModelSelector::Gemini => "GEMINI_API_KEY",
            ModelSelector::DeepSeek => "DEEPSEEK_API_KEY",
            ModelSelector::ChatGpt => "OPENAI_API_KEY",
        }
    }

    /// Human readable provider name (for the chat UI)
    pub fn label(&self) -> &'static str {
        match self {
            ModelSelector::Gemini => "Gemini",
            ModelSelector::DeepSeek => "DeepSeek",
            ModelSelector::ChatGpt => "ChatGPT",
        }
    }
}

impl std::fmt::Display for ModelSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelSelector::Gemini => write!(f, "gemini"),
            ModelSelector::DeepSeek => write!(f, "deepseek"),
            ModelSelector::ChatGpt => write!(f, "chatgpt"),
        }
    }
}

impl std::str::FromStr for ModelSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gemini" => Ok(ModelSelector::Gemini),
            "deepseek" => Ok(ModelSelector::DeepSeek),
            "chatgpt" => Ok(ModelSelector::ChatGpt),
            _ => Err(format!("Unknown model: {:?}", s)),
        }
    }
}

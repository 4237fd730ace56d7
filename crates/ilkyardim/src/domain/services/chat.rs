//! Chat Service
//!
//! Answers a question from the local knowledge table when a keyword
//! matches, otherwise from the selected provider.

use std::sync::Arc;

use super::ProviderDispatcher;
use crate::ports::{KnowledgeBase, LlmGateway};

/// Where an answer came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerSource {
    Local,
    Provider,
}

/// An answer and its origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub text: String,
    pub source: AnswerSource,
}

/// Local lookup → provider fallback
#[derive(Clone)]
pub struct ChatService {
    knowledge: Arc<dyn KnowledgeBase>,
    dispatcher: ProviderDispatcher,
}

impl ChatService {
    pub fn new(knowledge: Arc<dyn KnowledgeBase>, gateway: Arc<dyn LlmGateway>) -> Self {
        Self {
            knowledge,
            dispatcher: ProviderDispatcher::new(gateway),
        }
    }

    /// Answer `question`; `model` is only consulted on a local miss
    pub async fn answer(&self, question: &str, model: &str) -> Answer {
        if let Some(text) = self.knowledge.lookup(question).await {
            tracing::info!("Answered from local knowledge");
            return Answer {
                text,
                source: AnswerSource::Local,
            };
        }

        tracing::info!("No local match, asking provider '{}'", model);
        Answer {
            text: self.dispatcher.answer(question, model).await,
            source: AnswerSource::Provider,
        }
    }
}

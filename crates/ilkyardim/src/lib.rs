//! İlk Yardım Domain Library
//!
//! Core domain types and interfaces for the first-aid chat service.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (ChatTurn, ChatHistory, KnowledgeEntry)
//!   - `value_objects/`: Immutable value types (ModelSelector, TurnRole)
//!   - `services/`: Prompt building, reply formatting, provider dispatch, chat orchestration
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `services/`: Knowledge base and LLM gateway interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use ilkyardim::{ChatService, KnowledgeBase, LlmGateway};
//!
//! let chat = ChatService::new(knowledge, gateway);
//! let answer = chat.answer("Başım ağrıyor", "gemini").await;
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    build_prompt, find_response, format_response, Answer, AnswerSource, ChatHistory,
    ChatService, ChatTurn, DomainError, KnowledgeEntry, ModelSelector, ProviderDispatcher,
    TurnRole, DEFAULT_HISTORY_LIMIT, DISCLAIMER, INVALID_MODEL_MESSAGE, REPLY_NOT_RETRIEVED,
};
pub use ports::{KnowledgeBase, LlmGateway, ProviderApi, ProviderReply, ProviderRequest};

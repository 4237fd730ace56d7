//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - ChatTurn: One role-tagged, timestamped message
//! - ChatHistory: A session's ordered, capped list of turns
//! - KnowledgeEntry: One keyword → stored response row

mod chat_history;
mod chat_turn;
mod knowledge_entry;

pub use chat_history::*;
pub use chat_turn::*;
pub use knowledge_entry::*;

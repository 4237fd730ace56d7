//! İlk Yardım HTTP Models
//!
//! - Chat: question form, answer and error bodies

mod chat;

pub use chat::*;

//! İlk Yardım Routes
//!
//! - / - Chat page (GET) and question submission (POST)
//! - /new_chat - Clear the session's history
//! - /swagger-ui - OpenAPI documentation

pub mod chat;
pub mod swagger;

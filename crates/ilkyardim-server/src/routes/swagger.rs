//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{AnswerResponse, AskForm, ErrorResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::chat::show_chat,
        super::chat::ask,
        super::chat::new_chat,
    ),
    components(schemas(AskForm, AnswerResponse, ErrorResponse)),
    tags(
        (name = "Chat", description = "First-aid questions and session history")
    ),
    info(
        title = "İlk Yardım API",
        description = "Answers first-aid questions from a local table or an external LLM"
    )
)]
pub struct ApiDoc;

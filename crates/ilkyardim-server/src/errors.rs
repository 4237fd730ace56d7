//! HTTP error mapping
//!
//! Only two failures are visible to clients: an empty question (400) and a
//! generic internal error (500). Internal details are logged, never sent.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::any::Any;
use thiserror::Error;

use crate::models::ErrorResponse;

pub const EMPTY_QUESTION_MESSAGE: &str = "Boş soru gönderilemez";
pub const GENERIC_ERROR_MESSAGE: &str = "Bir hata oluştu. Lütfen tekrar deneyin.";

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("empty question")]
    EmptyQuestion,

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<tower_sessions::session::Error> for ChatError {
    fn from(err: tower_sessions::session::Error) -> Self {
        ChatError::Internal(format!("session store: {err}"))
    }
}

impl From<askama::Error> for ChatError {
    fn from(err: askama::Error) -> Self {
        ChatError::Internal(format!("template: {err}"))
    }
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ChatError::EmptyQuestion => (StatusCode::BAD_REQUEST, EMPTY_QUESTION_MESSAGE),
            ChatError::Internal(detail) => {
                tracing::error!("Request failed: {}", detail);
                (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_ERROR_MESSAGE)
            }
        };

        (
            status,
            Json(ErrorResponse {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

/// Response for a handler that panicked (used with `CatchPanicLayer`)
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    ChatError::Internal(format!("handler panicked: {detail}")).into_response()
}

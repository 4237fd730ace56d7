//! Chat Routes - Question answering and session history
//!
//! HTTP handlers that delegate to ChatService for the answer and keep the
//! session's history.

use askama::Template;
use axum::{
    extract::{rejection::FormRejection, State},
    response::{Html, Redirect},
    routing::get,
    Form, Json, Router,
};
use tower_sessions::Session;

use ilkyardim::{ChatHistory, ModelSelector};

use crate::errors::ChatError;
use crate::models::{AnswerResponse, AskForm, ErrorResponse, ModelOption};
use crate::session::{load_history, save_history};
use crate::AppState;

/// A rendered history row
struct TurnView {
    role: String,
    is_user: bool,
    content: String,
    time: String,
}

#[derive(Template)]
#[template(path = "index.html")]
struct ChatPage {
    turns: Vec<TurnView>,
    models: Vec<ModelOption>,
}

impl ChatPage {
    fn new(history: &ChatHistory) -> Self {
        let turns = history
            .turns()
            .iter()
            .map(|turn| TurnView {
                role: turn.role.to_string(),
                is_user: turn.is_user(),
                content: turn.content.clone(),
                time: turn.timestamp.format("%H:%M").to_string(),
            })
            .collect();

        let models = ModelSelector::ALL
            .into_iter()
            .map(|selector| ModelOption {
                value: selector.to_string(),
                label: selector.label(),
                selected: selector == ModelSelector::default(),
            })
            .collect();

        Self { turns, models }
    }
}

/// HTML-escape text the way it is stored in history
fn escape_html(text: &str) -> String {
    askama_escape::escape(text, askama_escape::Html).to_string()
}

/// Render the chat page with the session's history
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Chat page", body = String, content_type = "text/html"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Chat"
)]
pub async fn show_chat(session: Session) -> Result<Html<String>, ChatError> {
    let history = load_history(&session).await?;
    let page = ChatPage::new(&history);
    Ok(Html(page.render()?))
}

/// Answer a question and record the exchange
#[utoipa::path(
    post,
    path = "/",
    request_body(content = AskForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Answer", body = AnswerResponse),
        (status = 400, description = "Empty question", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Chat"
)]
pub async fn ask(
    State(state): State<AppState>,
    session: Session,
    form: Result<Form<AskForm>, FormRejection>,
) -> Result<Json<AnswerResponse>, ChatError> {
    let Form(form) = form.map_err(|e| {
        tracing::warn!("Unreadable question form: {}", e);
        ChatError::EmptyQuestion
    })?;

    let question = form.soru.as_deref().map(str::trim).unwrap_or_default();
    if question.is_empty() {
        return Err(ChatError::EmptyQuestion);
    }

    // Only an absent field falls back; `model=` is an invalid selection
    let default_model = ModelSelector::default().to_string();
    let model = form.model.as_deref().unwrap_or(default_model.as_str());

    let answer = state.chat.answer(question, model).await;

    let mut history = load_history(&session).await?;
    history.record_exchange(escape_html(question), answer.text.clone(), state.history_limit);
    save_history(&session, &history).await?;

    Ok(Json(AnswerResponse { cevap: answer.text }))
}

/// Start over with an empty history
#[utoipa::path(
    get,
    path = "/new_chat",
    responses(
        (status = 303, description = "History cleared, redirect to /"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Chat"
)]
pub async fn new_chat(session: Session) -> Result<Redirect, ChatError> {
    save_history(&session, &ChatHistory::new()).await?;
    Ok(Redirect::to("/"))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(show_chat).post(ask))
        .route("/new_chat", get(new_chat))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use std::sync::{Arc, Mutex};
    use tower::util::ServiceExt;
    use tower_sessions::Expiry;
    use tower_sessions_moka_store::MokaStore;

    use ilkyardim::{
        ChatService, DomainError, KnowledgeBase, KnowledgeEntry, LlmGateway, ProviderReply,
        DISCLAIMER, INVALID_MODEL_MESSAGE,
    };

    use crate::errors::EMPTY_QUESTION_MESSAGE;

    struct Table;

    #[async_trait]
    impl KnowledgeBase for Table {
        async fn entries(&self) -> Result<Vec<KnowledgeEntry>, DomainError> {
            Ok(vec![KnowledgeEntry::new(
                "headache",
                "STAY CALM:\n1. Rest\n\nNote: see a doctor if it persists",
            )])
        }
    }

    /// Records which provider was asked; fails with a timeout when told to
    #[derive(Default)]
    struct RecordingGateway {
        asked: Mutex<Vec<ModelSelector>>,
        time_out: bool,
    }

    #[async_trait]
    impl LlmGateway for RecordingGateway {
        async fn complete(
            &self,
            selector: ModelSelector,
            _prompt: &str,
        ) -> Result<ProviderReply, DomainError> {
            self.asked.lock().unwrap().push(selector);
            if self.time_out {
                return Err(DomainError::transport(selector, "operation timed out"));
            }
            Ok(ProviderReply::Text(format!(
                "{}:\n1. Sakin olun",
                selector.label().to_uppercase()
            )))
        }
    }

    fn app(gateway: Arc<RecordingGateway>) -> Router {
        let state = AppState {
            chat: ChatService::new(Arc::new(Table), gateway),
            history_limit: 50,
        };
        crate::build_router(state, MokaStore::new(Some(100)), Expiry::OnSessionEnd)
    }

    fn post_form(body: &str, cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    fn get(uri: &str, cookie: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .header(header::COOKIE, cookie)
            .body(Body::empty())
            .unwrap()
    }

    fn session_cookie(response: &Response) -> String {
        response
            .headers()
            .get(header::SET_COOKIE)
            .expect("session cookie")
            .to_str()
            .unwrap()
            .split(';')
            .next()
            .unwrap()
            .to_string()
    }

    async fn json_body(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn html_body(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_local_hit_answers_without_provider() {
        let gateway = Arc::new(RecordingGateway::default());
        let app = app(gateway.clone());

        let response = app
            .oneshot(post_form("soru=I+have+a+headache&model=chatgpt", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await["cevap"],
            "STAY CALM:\n1. Rest\n\nNote: see a doctor if it persists"
        );
        assert!(gateway.asked.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_miss_asks_named_provider() {
        let gateway = Arc::new(RecordingGateway::default());
        let app = app(gateway.clone());

        let response = app
            .oneshot(post_form("soru=Ar%C4%B1+soktu&model=deepseek", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["cevap"], "DEEPSEEK:\n1. Sakin olun");
        assert_eq!(*gateway.asked.lock().unwrap(), vec![ModelSelector::DeepSeek]);
    }

    #[tokio::test]
    async fn test_missing_model_defaults_to_gemini() {
        let gateway = Arc::new(RecordingGateway::default());
        let app = app(gateway.clone());

        app.oneshot(post_form("soru=Ar%C4%B1+soktu", None))
            .await
            .unwrap();

        assert_eq!(*gateway.asked.lock().unwrap(), vec![ModelSelector::Gemini]);
    }

    #[tokio::test]
    async fn test_unknown_model_answers_invalid_selection() {
        let gateway = Arc::new(RecordingGateway::default());
        let app = app(gateway.clone());

        let response = app
            .oneshot(post_form("soru=Ar%C4%B1+soktu&model=llama", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["cevap"], INVALID_MODEL_MESSAGE);
        assert!(gateway.asked.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_blank_or_miscased_model_is_invalid() {
        for body in [
            "soru=Ar%C4%B1+soktu&model=",
            "soru=Ar%C4%B1+soktu&model=GEMINI",
            "soru=Ar%C4%B1+soktu&model=+chatgpt+",
        ] {
            let gateway = Arc::new(RecordingGateway::default());
            let app = app(gateway.clone());

            let response = app.oneshot(post_form(body, None)).await.unwrap();

            assert_eq!(response.status(), StatusCode::OK, "{body}");
            assert_eq!(json_body(response).await["cevap"], INVALID_MODEL_MESSAGE, "{body}");
            assert!(gateway.asked.lock().unwrap().is_empty(), "{body}");
        }
    }

    #[tokio::test]
    async fn test_blank_question_is_rejected_and_not_recorded() {
        let gateway = Arc::new(RecordingGateway::default());
        let app = app(gateway.clone());

        let first = app
            .clone()
            .oneshot(post_form("soru=headache", None))
            .await
            .unwrap();
        let cookie = session_cookie(&first);

        let response = app
            .clone()
            .oneshot(post_form("soru=+++&model=gemini", Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"], EMPTY_QUESTION_MESSAGE);

        let page = html_body(app.oneshot(get("/", &cookie)).await.unwrap()).await;
        assert_eq!(page.matches("data-role=\"user\"").count(), 1);
        assert_eq!(page.matches("data-role=\"bot\"").count(), 1);
        assert!(gateway.asked.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_question_field_is_rejected() {
        let app = app(Arc::new(RecordingGateway::default()));

        let response = app.oneshot(post_form("model=gemini", None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_non_form_body_is_rejected() {
        let app = app(Arc::new(RecordingGateway::default()));

        let request = Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"soru":"headache"}"#))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_history_records_escaped_question_then_answer() {
        let app = app(Arc::new(RecordingGateway::default()));

        let first = app
            .clone()
            .oneshot(post_form("soru=%3Cb%3Eheadache%3C%2Fb%3E", None))
            .await
            .unwrap();
        let cookie = session_cookie(&first);

        let page = html_body(app.oneshot(get("/", &cookie)).await.unwrap()).await;

        let user_at = page.find("data-role=\"user\"").unwrap();
        let bot_at = page.find("data-role=\"bot\"").unwrap();
        assert!(user_at < bot_at);
        assert!(page.contains("&lt;b&gt;headache&lt;/b&gt;"));
        assert!(!page.contains("<b>headache"));
        assert!(page.contains("STAY CALM:"));
    }

    #[tokio::test]
    async fn test_provider_timeout_records_disclaimer() {
        let gateway = Arc::new(RecordingGateway {
            time_out: true,
            ..Default::default()
        });
        let app = app(gateway);

        let response = app
            .clone()
            .oneshot(post_form("soru=Bay%C4%B1ld%C4%B1m&model=gemini", None))
            .await
            .unwrap();
        let cookie = session_cookie(&response);
        assert_eq!(json_body(response).await["cevap"], DISCLAIMER);

        let page = html_body(app.oneshot(get("/", &cookie)).await.unwrap()).await;
        assert_eq!(page.matches("data-role=\"user\"").count(), 1);
        assert_eq!(page.matches("data-role=\"bot\"").count(), 1);
        assert!(page.contains("Bayıldım"));
        assert!(page.contains("yeterli bilgim yok"));
    }

    #[tokio::test]
    async fn test_new_chat_clears_history() {
        let app = app(Arc::new(RecordingGateway::default()));

        let first = app
            .clone()
            .oneshot(post_form("soru=headache", None))
            .await
            .unwrap();
        let cookie = session_cookie(&first);
        app.clone()
            .oneshot(post_form("soru=Ar%C4%B1+soktu", Some(&cookie)))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(get("/new_chat", &cookie))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");

        let page = html_body(app.oneshot(get("/", &cookie)).await.unwrap()).await;
        assert!(!page.contains("data-role=\"user\""));
        assert!(!page.contains("data-role=\"bot\""));
    }

    #[tokio::test]
    async fn test_fresh_session_renders_empty_page() {
        let app = app(Arc::new(RecordingGateway::default()));

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let page = html_body(response).await;
        assert!(page.contains("<form"));
        assert!(!page.contains("data-role=\"user\""));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
    }
}

use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_moka_store::MokaStore;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod config;
mod errors;
mod models;
mod routes;
mod session;

use adapters::{CsvKnowledgeBase, HttpLlmGateway};
use config::AppConfig;
use ilkyardim::{ChatService, ModelSelector};

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub chat: ChatService,
    /// Exchanges kept per session, 0 = unbounded
    pub history_limit: usize,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "İlk Yardım API is running - call 112 in an emergency".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the full router: chat routes, docs, sessions and middleware
pub fn build_router(state: AppState, session_store: MokaStore, session_expiry: Expiry) -> Router {
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(session_expiry);

    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::chat::router())
        .layer(session_layer)
        .layer(CatchPanicLayer::custom(errors::panic_response))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    tracing::info!("🩹 İlk Yardım API initializing...");

    let config = AppConfig::from_env()?;

    for selector in ModelSelector::ALL {
        if config.credentials.get(selector).is_some() {
            tracing::info!("🔑 {} provider configured", selector.label());
        } else {
            tracing::warn!(
                "⚠️  No {} set - {} questions will get the disclaimer",
                selector.credential_var(),
                selector.label()
            );
        }
    }

    let knowledge = Arc::new(CsvKnowledgeBase::new(&config.knowledge_file));
    if tokio::fs::metadata(knowledge.path()).await.is_ok() {
        tracing::info!("📚 Local knowledge: {}", knowledge.path().display());
    } else {
        tracing::warn!(
            "⚠️  Knowledge file {} not found - every question goes to a provider",
            knowledge.path().display()
        );
    }

    let gateway = Arc::new(HttpLlmGateway::new(
        config.credentials.clone(),
        &config.endpoints,
        config.provider_timeout,
    )?);

    if config.history_limit == 0 {
        tracing::warn!("⚠️  HISTORY_LIMIT=0 - session history is unbounded");
    }

    let state = AppState {
        chat: ChatService::new(knowledge, gateway),
        history_limit: config.history_limit,
    };

    // Expired sessions are evicted; past capacity the least used go first
    let session_store = MokaStore::new(Some(config.session_store_capacity));
    tracing::info!(
        "🗂️  Session store: up to {} sessions, {} idle",
        config.session_store_capacity,
        config.session_ttl
    );

    let router = build_router(
        state,
        session_store,
        Expiry::OnInactivity(config.session_ttl),
    );

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ İlk Yardım API ready on {}", config.bind_addr);

    axum::serve(listener, router).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::{body::Body, http::Request, http::StatusCode};
    use ilkyardim::{DomainError, KnowledgeBase, KnowledgeEntry, LlmGateway, ProviderReply};
    use tower::util::ServiceExt;

    struct Empty;

    #[async_trait]
    impl KnowledgeBase for Empty {
        async fn entries(&self) -> Result<Vec<KnowledgeEntry>, DomainError> {
            Ok(Vec::new())
        }
    }

    #[async_trait]
    impl LlmGateway for Empty {
        async fn complete(
            &self,
            selector: ModelSelector,
            _prompt: &str,
        ) -> Result<ProviderReply, DomainError> {
            Err(DomainError::missing_credential(selector))
        }
    }

    #[tokio::test]
    async fn test_health_check() {
        let state = AppState {
            chat: ChatService::new(Arc::new(Empty), Arc::new(Empty)),
            history_limit: 50,
        };
        let app = build_router(state, MokaStore::new(Some(10)), Expiry::OnSessionEnd);

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }
}

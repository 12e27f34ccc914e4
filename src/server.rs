//! HTTP Server
//!
//! Chat endpoint and product listing for the storefront page.

use crate::config::Config;
use crate::core::{LookupService, QueryReply};
use anyhow::Result;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

/// Shared handler state
pub struct AppState {
    pub service: LookupService,
}

/// Chat request body
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub message: String,
}

/// Build the router; unmatched paths fall back to `static_dir` when set
pub fn build_router(service: LookupService, static_dir: Option<&str>) -> Router {
    let state = Arc::new(AppState { service });

    let router = Router::new()
        .route("/ask", post(ask))
        .route("/api/products", get(products))
        .route("/health", get(health))
        .with_state(state);

    let router = match static_dir {
        Some(dir) => {
            info!("📁 Serving static files from {}", dir);
            router.fallback_service(ServeDir::new(dir))
        }
        None => router,
    };

    router
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn ask(State(state): State<Arc<AppState>>, Json(request): Json<AskRequest>) -> Response {
    let message = request.message.trim();
    if message.is_empty() {
        return (StatusCode::BAD_REQUEST, Json(json!({"error": "No message"}))).into_response();
    }

    debug!("📨 Ask: '{}'", message);
    match state.service.handle_query(message).await {
        QueryReply::Reply { text } => Json(json!({"reply": text})).into_response(),
        QueryReply::Error { detail } => {
            (StatusCode::BAD_GATEWAY, Json(json!({"error": detail}))).into_response()
        }
    }
}

async fn products(State(state): State<Arc<AppState>>) -> Response {
    match state.service.products().await {
        Ok(rows) => Json(rows).into_response(),
        Err(e) => (
            StatusCode::BAD_GATEWAY,
            Json(json!({"error": format!("catalog fetch failed: {}", e)})),
        )
            .into_response(),
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({"status": "ok", "version": env!("CARGO_PKG_VERSION")}))
}

/// Bind and serve until Ctrl-C
pub async fn serve(config: &Config, service: LookupService) -> Result<()> {
    let router = build_router(service, config.static_dir.as_deref());
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;

    info!("🔌 Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("🔌 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

// Handlers HTTP do classificador
pub mod email;
pub mod health;
pub mod page;

pub use email::*;
pub use health::*;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::AppState;

/// Monta o router completo da aplicação
pub fn app_router(state: Arc<AppState>) -> Router {
    let max_upload_bytes = state.settings.server.max_upload_bytes;

    Router::new()
        .route("/", get(show_form).post(submit_form))
        .route("/api/classify", post(classify_api))
        .route("/health", get(health_check))
        .route("/status", get(status_check))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

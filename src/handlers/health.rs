use axum::{extract::State, response::Json};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::utils::logging::*;
use crate::AppState;

pub async fn health_check() -> Json<Value> {
    log_health_check();

    Json(json!({
        "status": "healthy",
        "service": "classificador-emails",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Configuração efetiva (sem segredos)
pub async fn status_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    log_health_check();

    let ia = state.completion.get_config();

    Json(json!({
        "service": "classificador-emails",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "environment": std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string()),
        "completion": {
            "model": ia.model,
            "endpoint": ia.endpoint,
            "timeout_seconds": ia.timeout_secs,
            "token_configured": !ia.api_key.is_empty()
        },
        "normalizer": {
            "language": state.normalizer.language(),
            "custom_stopwords": state.settings.normalizer.stopwords_path.is_some()
        },
        "max_upload_bytes": state.settings.server.max_upload_bytes
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::state_for;
    use httpmock::MockServer;

    #[tokio::test]
    async fn test_health_check() {
        let Json(body) = health_check().await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "classificador-emails");
    }

    #[tokio::test]
    async fn test_status_check_hides_token() {
        let server = MockServer::start_async().await;
        let state = Arc::new(state_for(&server));

        let Json(body) = status_check(State(state)).await;

        assert_eq!(body["completion"]["model"], "gpt-4o");
        assert_eq!(body["completion"]["token_configured"], true);
        assert_eq!(body["normalizer"]["language"], "english");
        assert!(!body.to_string().contains("test-token"));
    }
}

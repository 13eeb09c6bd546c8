//! Classificação do email usando o modelo
//!
//! Envia o prompt de classificação com temperatura 0.0 e lê apenas a primeira
//! linha da resposta. O rótulo precisa ser exatamente PRODUTIVO ou IMPRODUTIVO.

use ia_service::{CompletionClient, CompletionRequest};
use tracing::{info, warn};

use super::prompts::{
    classification_prompt, CLASSIFICATION_MAX_TOKENS, CLASSIFICATION_TEMPERATURE,
};
use crate::models::EmailCategory;
use crate::utils::{AppError, AppResult};

/// Monta a requisição de classificação
pub fn classification_request(email_text: &str) -> CompletionRequest {
    CompletionRequest::new(classification_prompt(email_text))
        .with_temperature(CLASSIFICATION_TEMPERATURE)
        .with_max_tokens(CLASSIFICATION_MAX_TOKENS)
        .first_line_only()
}

/// Classifica o email (texto já normalizado)
pub async fn classify_email(client: &CompletionClient, email_text: &str) -> AppResult<EmailCategory> {
    let label = client.complete(&classification_request(email_text)).await?;

    match EmailCategory::from_label(&label) {
        Some(category) => {
            info!("✅ Rótulo do modelo: '{}' -> {}", label, category);
            Ok(category)
        }
        None => {
            warn!("❌ Rótulo inesperado do modelo: '{}'", label);
            Err(AppError::UnrecognizedCategory(label))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use ia_service::IaServiceConfig;
    use serde_json::json;

    fn client_for(server: &MockServer) -> CompletionClient {
        CompletionClient::new(
            IaServiceConfig::new("token").with_endpoint(server.url("/chat/completions")),
        )
        .unwrap()
    }

    async fn mock_reply<'a>(server: &'a MockServer, content: &str) -> httpmock::Mock<'a> {
        let body = json!({ "choices": [ { "message": { "role": "assistant", "content": content } } ] });
        server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(200).json_body(body);
            })
            .await
    }

    #[test]
    fn test_classification_request_parameters() {
        let request = classification_request("texto");
        assert_eq!(request.temperature, 0.0);
        assert_eq!(request.max_tokens, 60);
        assert!(request.first_line_only);
        assert!(request.prompt.contains("\"texto\""));
    }

    #[tokio::test]
    async fn test_classify_produtivo() {
        let server = MockServer::start_async().await;
        let mock = mock_reply(&server, "PRODUTIVO").await;

        let category = classify_email(&client_for(&server), "preciso relatorio").await.unwrap();

        assert_eq!(category, EmailCategory::Produtivo);
        assert_eq!(category.as_str(), "PRODUTIVO");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_classify_uses_first_line_only() {
        let server = MockServer::start_async().await;
        mock_reply(&server, "IMPRODUTIVO\nTrata-se de uma newsletter.").await;

        let category = classify_email(&client_for(&server), "newsletter").await.unwrap();

        assert_eq!(category, EmailCategory::Improdutivo);
    }

    #[tokio::test]
    async fn test_classify_sends_deterministic_sampling() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/chat/completions")
                    .json_body_partial(r#"{"temperature":0.0,"max_tokens":60}"#);
                then.status(200)
                    .json_body(json!({ "choices": [ { "message": { "content": "PRODUTIVO" } } ] }));
            })
            .await;

        classify_email(&client_for(&server), "x").await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_classify_unrecognized_label() {
        let server = MockServer::start_async().await;
        mock_reply(&server, "Talvez seja produtivo").await;

        let err = classify_email(&client_for(&server), "x").await.unwrap_err();

        match err {
            AppError::UnrecognizedCategory(label) => assert_eq!(label, "Talvez seja produtivo"),
            other => panic!("erro inesperado: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_classify_upstream_failure() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(500).body("erro interno");
            })
            .await;

        let err = classify_email(&client_for(&server), "x").await.unwrap_err();
        assert!(matches!(err, AppError::CompletionError(_)));
    }
}

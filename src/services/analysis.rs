//! Pipeline completo: normalização → classificação → resposta sugerida
//!
//! As duas chamadas ao modelo são sequenciais: a resposta depende da categoria.

use tokio::time::Instant;
use uuid::Uuid;

use super::classifier::classify_email;
use super::reply_generator::generate_reply;
use crate::models::EmailAnalysis;
use crate::utils::logging::*;
use crate::utils::{preview, AppResult};
use crate::AppState;

const LOG_PREVIEW_CHARS: usize = 80;

/// Analisa o texto bruto do email
pub async fn analyze_email(state: &AppState, raw_text: &str) -> AppResult<EmailAnalysis> {
    let analysis_id = Uuid::new_v4().to_string();
    let started = Instant::now();

    log_text_extracted(&analysis_id, "entrada", raw_text.chars().count());

    let normalized_text = state.normalizer.normalize(raw_text);
    log_text_normalized(&analysis_id, &preview(&normalized_text, LOG_PREVIEW_CHARS));

    let category = classify_email(&state.completion, &normalized_text)
        .await
        .map_err(|e| {
            log_completion_error("classification", &e.to_string());
            e
        })?;
    log_email_classified(&analysis_id, category.as_str());

    let suggestion = generate_reply(&state.completion, category, &normalized_text)
        .await
        .map_err(|e| {
            log_completion_error("reply", &e.to_string());
            e
        })?;
    log_reply_generated(&analysis_id, suggestion.chars().count());

    log_info(&format!(
        "✅ [{}] Análise concluída em {}ms",
        analysis_id,
        started.elapsed().as_millis()
    ));

    Ok(EmailAnalysis {
        category,
        suggestion,
        normalized_text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmailCategory;
    use crate::services::prompts::UNPRODUCTIVE_REPLY;
    use crate::test_support::state_for;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_productive_email_makes_two_sequential_calls() {
        let server = MockServer::start_async().await;
        let classify = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/chat/completions")
                    .body_contains("classifica emails")
                    .body_contains("email report run");
                then.status(200)
                    .json_body(json!({ "choices": [ { "message": { "content": "PRODUTIVO" } } ] }));
            })
            .await;
        let reply = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/chat/completions")
                    .body_contains("respostas profissionais");
                then.status(200).json_body(json!({
                    "choices": [ { "message": { "content": "Recebido, retorno ainda hoje." } } ]
                }));
            })
            .await;

        let state = state_for(&server);
        let analysis = analyze_email(&state, "Emails and reports are running!").await.unwrap();

        assert_eq!(analysis.category, EmailCategory::Produtivo);
        assert_eq!(analysis.suggestion, "Recebido, retorno ainda hoje.");
        assert_eq!(analysis.normalized_text, "email report run");
        classify.assert_async().await;
        reply.assert_async().await;
    }

    #[tokio::test]
    async fn test_unproductive_email_makes_single_call() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(200)
                    .json_body(json!({ "choices": [ { "message": { "content": "IMPRODUTIVO" } } ] }));
            })
            .await;

        let state = state_for(&server);
        let analysis = analyze_email(&state, "Weekly newsletter").await.unwrap();

        assert_eq!(analysis.category, EmailCategory::Improdutivo);
        assert_eq!(analysis.suggestion, UNPRODUCTIVE_REPLY);
        assert_eq!(mock.hits_async().await, 1);
    }
}

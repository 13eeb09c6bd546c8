//! Geração da resposta sugerida
//!
//! Emails improdutivos recebem a resposta fixa sem nenhuma chamada ao modelo.

use ia_service::{CompletionClient, CompletionRequest};

use super::prompts::{reply_prompt, REPLY_MAX_TOKENS, REPLY_TEMPERATURE, UNPRODUCTIVE_REPLY};
use crate::models::EmailCategory;
use crate::utils::AppResult;

pub fn reply_request(email_text: &str) -> CompletionRequest {
    CompletionRequest::new(reply_prompt(email_text))
        .with_temperature(REPLY_TEMPERATURE)
        .with_max_tokens(REPLY_MAX_TOKENS)
}

pub async fn generate_reply(
    client: &CompletionClient,
    category: EmailCategory,
    email_text: &str,
) -> AppResult<String> {
    if category == EmailCategory::Improdutivo {
        return Ok(UNPRODUCTIVE_REPLY.to_string());
    }

    let reply = client.complete(&reply_request(email_text)).await?;
    Ok(reply)
}

/// Variante para rótulos crus: qualquer rótulo contendo "improdutivo" (ignorando caixa)
/// devolve a resposta fixa
pub async fn generate_reply_for_label(
    client: &CompletionClient,
    label: &str,
    email_text: &str,
) -> AppResult<String> {
    generate_reply(client, EmailCategory::from_label_lenient(label), email_text).await
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

    #[test]
    fn test_reply_request_parameters() {
        let request = reply_request("texto");
        assert_eq!(request.temperature, 0.3);
        assert_eq!(request.max_tokens, 140);
        assert!(!request.first_line_only);
    }

    #[tokio::test]
    async fn test_unproductive_short_circuits() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(200).json_body(json!({ "choices": [] }));
            })
            .await;
        let client = client_for(&server);

        let reply = generate_reply(&client, EmailCategory::Improdutivo, "newsletter").await.unwrap();
        assert_eq!(reply, "Não é necessária ação imediata.");

        for label in ["IMPRODUTIVO", "improdutivo", "Categoria: ImProdutivo."] {
            let reply = generate_reply_for_label(&client, label, "x").await.unwrap();
            assert_eq!(reply, UNPRODUCTIVE_REPLY);
        }

        assert_eq!(mock.hits_async().await, 0);
    }

    #[tokio::test]
    async fn test_productive_calls_model_with_full_response() {
        let server = MockServer::start_async().await;
        let content = "Olá, obrigado pelo contato.\nEnviarei o relatório até sexta-feira.";
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/chat/completions")
                    .json_body_partial(r#"{"temperature":0.3,"max_tokens":140}"#);
                then.status(200).json_body(json!({
                    "choices": [ { "message": { "role": "assistant", "content": content } } ]
                }));
            })
            .await;

        let reply = generate_reply(&client_for(&server), EmailCategory::Produtivo, "relatorio")
            .await
            .unwrap();

        assert_eq!(reply, content);
        mock.assert_async().await;
    }
}

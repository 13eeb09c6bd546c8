//! Serviço de IA para chat-completion
//!
//! Este crate fornece o cliente usado pelo classificador de emails para falar
//! com um endpoint de chat-completion compatível com OpenAI (GitHub Models):
//! - Classificação do email (PRODUTIVO / IMPRODUTIVO)
//! - Geração da resposta sugerida
//!
//! Cada chamada é independente: sem sessão, sem retry, timeout fixo.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Endpoint padrão do GitHub Models
pub const DEFAULT_ENDPOINT: &str = "https://models.inference.ai.azure.com/chat/completions";
/// Modelo padrão quando `GITHUB_MODEL` não está definido
pub const DEFAULT_MODEL: &str = "gpt-4o";
/// Timeout padrão das chamadas (segundos)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Erros do serviço de IA
#[derive(Debug, Error)]
pub enum IaServiceError {
    /// Falha de rede, timeout ou erro de transporte
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Endpoint respondeu com status não-2xx
    #[error("Completion API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Corpo da resposta sem o formato esperado
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Config error: {0}")]
    ConfigError(String),
}

pub type IaResult<T> = Result<T, IaServiceError>;

/// Configuração do cliente de chat-completion
#[derive(Clone)]
pub struct IaServiceConfig {
    /// Token bearer (GITHUB_TOKEN)
    pub api_key: String,
    /// Identificador do modelo (padrão: gpt-4o)
    pub model: String,
    /// URL completa do endpoint de chat/completions
    pub endpoint: String,
    /// Timeout de cada requisição em segundos (padrão: 60)
    pub timeout_secs: u64,
}

impl IaServiceConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

// O token nunca aparece em logs
impl std::fmt::Debug for IaServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IaServiceConfig")
            .field("api_key", &if self.api_key.is_empty() { "<empty>" } else { "<redacted>" })
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Parâmetros de uma chamada única ao modelo
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub prompt: String,
    pub temperature: f64,
    pub max_tokens: u32,
    /// Mantém apenas a primeira linha da resposta
    pub first_line_only: bool,
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            temperature: 0.7,
            max_tokens: 200,
            first_line_only: false,
        }
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn first_line_only(mut self) -> Self {
        self.first_line_only = true;
        self
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Cliente de chat-completion
#[derive(Clone)]
pub struct CompletionClient {
    http_client: reqwest::Client,
    config: IaServiceConfig,
}

impl CompletionClient {
    /// Cria novo cliente com timeout fixo
    pub fn new(config: IaServiceConfig) -> IaResult<Self> {
        if config.endpoint.trim().is_empty() {
            return Err(IaServiceError::ConfigError("Completion endpoint is empty".to_string()));
        }

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| IaServiceError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        tracing::info!(
            "✅ CompletionClient inicializado: modelo={}, endpoint={}, timeout={}s",
            config.model,
            config.endpoint,
            config.timeout_secs
        );

        Ok(Self { http_client, config })
    }

    /// Envia um prompt de turno único e devolve o conteúdo da primeira escolha
    ///
    /// O texto volta sem espaços nas pontas; com `first_line_only` apenas a
    /// primeira linha é mantida.
    pub async fn complete(&self, request: &CompletionRequest) -> IaResult<String> {
        tracing::debug!(
            "🔍 Chat-completion: temperature={}, max_tokens={}, first_line_only={}",
            request.temperature,
            request.max_tokens,
            request.first_line_only
        );

        let body = ChatCompletionBody {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &request.prompt,
            }],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let response = self
            .http_client
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let raw = response.text().await?;

        if !status.is_success() {
            tracing::error!("❌ Completion API retornou {}: {}", status, raw);
            return Err(IaServiceError::ApiError {
                status: status.as_u16(),
                message: raw,
            });
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&raw).map_err(|e| {
            IaServiceError::ParseError(format!("Failed to parse JSON: {}. Content: {}", e, raw))
        })?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| IaServiceError::ParseError("No choices in response".to_string()))?
            .message
            .content
            .ok_or_else(|| IaServiceError::ParseError("No content in response".to_string()))?;

        let content = content.trim();
        let text = if request.first_line_only {
            first_line(content)
        } else {
            content.to_string()
        };

        tracing::debug!("📋 Resposta do modelo: {} chars", text.len());

        Ok(text)
    }

    /// Obtém informações sobre a configuração atual
    pub fn get_config(&self) -> &IaServiceConfig {
        &self.config
    }
}

fn first_line(text: &str) -> String {
    text.lines().next().unwrap_or_default().to_string()
}

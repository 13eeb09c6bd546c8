// Biblioteca do classificador de emails
// Expõe módulos para uso nos binários e nos testes

pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

use std::sync::Arc;

use ia_service::{CompletionClient, IaServiceConfig};

use crate::config::Settings;
use crate::utils::{AppError, AppResult, TextNormalizer};

// AppState é definido aqui para ser compartilhado
#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub normalizer: Arc<TextNormalizer>,
    pub completion: CompletionClient,
}

impl AppState {
    /// Constrói normalizador e cliente de IA uma única vez, na inicialização
    pub fn from_settings(settings: Settings) -> AppResult<Self> {
        let normalizer = TextNormalizer::from_settings(&settings.normalizer)?;

        let ia_config = IaServiceConfig::new(settings.github_models.token.clone())
            .with_model(settings.github_models.model.clone())
            .with_endpoint(settings.github_models.endpoint.clone())
            .with_timeout_secs(settings.github_models.timeout_seconds);

        let completion = CompletionClient::new(ia_config)
            .map_err(|e| AppError::ConfigError(format!("Failed to create completion client: {}", e)))?;

        Ok(Self {
            settings,
            normalizer: Arc::new(normalizer),
            completion,
        })
    }
}

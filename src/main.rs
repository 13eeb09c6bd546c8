/// Servidor HTTP do classificador de emails
///
/// Fluxo por requisição:
/// - Formulário recebe texto e/ou arquivo (.txt / .pdf)
/// - Texto é normalizado (stopwords + stemming)
/// - GitHub Models classifica em PRODUTIVO / IMPRODUTIVO
/// - Resposta sugerida é gerada apenas para emails produtivos

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use classificador_emails::config::Settings;
use classificador_emails::utils::{AppError, logging::*};
use classificador_emails::{handlers, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 🔧 Carregar variáveis de ambiente do arquivo .env (se existir)
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    // Inicializar tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if dotenv_loaded {
        log_info("✅ Arquivo .env carregado com sucesso");
    } else {
        tracing::debug!("Arquivo .env não encontrado - usando variáveis de ambiente do sistema");
    }

    // Carregar configurações
    let settings = Settings::new()
        .map_err(|e| AppError::ConfigError(format!("Failed to load settings: {}", e)))?;

    log_config_loaded(&std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string()));

    if settings.github_models.token.is_empty() {
        log_warning("⚠️ GITHUB_TOKEN não configurado. Chamadas ao modelo serão rejeitadas.");
    }

    // Normalizador e cliente de IA são criados uma única vez
    let app_state = Arc::new(AppState::from_settings(settings.clone())?);
    log_info(&format!(
        "✅ Normalizador pronto ({:?}), modelo: {}",
        app_state.normalizer.language(),
        settings.github_models.model
    ));

    let app = handlers::app_router(app_state);

    let port = settings.server.port;
    let listener = TcpListener::bind(format!("{}:{}", settings.server.host, port)).await?;

    log_server_startup(port);
    log_server_ready(&settings.server.host, port);

    // Graceful shutdown com signal handling
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log_info("🛑 Server shut down gracefully");
    Ok(())
}

/// Signal handler para graceful shutdown
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            log_info("🛑 Received Ctrl+C, shutting down gracefully...");
        },
        _ = terminate => {
            log_info("🛑 Received SIGTERM, shutting down gracefully...");
        }
    }
}

use tracing::{info, warn, error, debug};

pub fn log_request_received(endpoint: &str, method: &str) {
    info!("Request received: {} {}", method, endpoint);
}

pub fn log_request_processed(endpoint: &str, status: u16, duration_ms: u64) {
    info!("Request processed: {} - Status: {} - Duration: {}ms",
          endpoint, status, duration_ms);
}

pub fn log_text_extracted(analysis_id: &str, source: &str, chars: usize) {
    info!("📄 [{}] Texto extraído de {}: {} caracteres", analysis_id, source, chars);
}

pub fn log_text_normalized(analysis_id: &str, preview: &str) {
    debug!("🧹 [{}] Texto normalizado: {}", analysis_id, preview);
}

pub fn log_email_classified(analysis_id: &str, category: &str) {
    info!("🏷️ [{}] Email classificado como {}", analysis_id, category);
}

pub fn log_reply_generated(analysis_id: &str, chars: usize) {
    info!("✉️ [{}] Resposta sugerida gerada: {} caracteres", analysis_id, chars);
}

pub fn log_completion_error(stage: &str, error: &str) {
    error!("Completion API error: {} - Error: {}", stage, error);
}

pub fn log_config_loaded(env: &str) {
    info!("Configuration loaded successfully for environment: {}", env);
}

pub fn log_server_startup(port: u16) {
    info!("🚀 Classificador de emails starting on port {}", port);
}

pub fn log_server_ready(host: &str, port: u16) {
    info!("✅ Server ready and listening on http://{}:{}", host, port);
}

pub fn log_health_check() {
    debug!("Health check requested");
}

pub fn log_validation_error(field: &str, message: &str) {
    warn!("Validation error: {} - {}", field, message);
}

pub fn log_info(message: &str) {
    info!("{}", message);
}

pub fn log_warning(message: &str) {
    warn!("{}", message);
}

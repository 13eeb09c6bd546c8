use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::fmt;

use crate::services::extraction::ExtractionError;

#[derive(Debug)]
pub enum AppError {
    ConfigError(String),
    ValidationError(String),
    ExtractionError(ExtractionError),
    CompletionError(ia_service::IaServiceError),
    /// Modelo respondeu algo diferente de PRODUTIVO/IMPRODUTIVO
    UnrecognizedCategory(String),
    /// Upload acima do limite configurado
    PayloadTooLarge(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppError::ExtractionError(err) => write!(f, "Extraction error: {}", err),
            AppError::CompletionError(err) => write!(f, "Completion error: {}", err),
            AppError::UnrecognizedCategory(label) => {
                write!(f, "Unrecognized category label from model: {:?}", label)
            }
            AppError::PayloadTooLarge(msg) => write!(f, "Payload too large: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ia_service::IaServiceError> for AppError {
    fn from(err: ia_service::IaServiceError) -> Self {
        AppError::CompletionError(err)
    }
}

impl From<ExtractionError> for AppError {
    fn from(err: ExtractionError) -> Self {
        AppError::ExtractionError(err)
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::ExtractionError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::CompletionError(_) => StatusCode::BAD_GATEWAY,
            AppError::UnrecognizedCategory(_) => StatusCode::BAD_GATEWAY,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_message = match self {
            AppError::ExtractionError(err) => err.to_string(),
            AppError::CompletionError(err) => err.to_string(),
            AppError::UnrecognizedCategory(label) => {
                format!("Unrecognized category label: {}", label)
            }
            AppError::ConfigError(msg)
            | AppError::ValidationError(msg)
            | AppError::PayloadTooLarge(msg) => msg,
        };

        let body = json!({
            "error": error_message,
            "status": status.as_u16()
        });

        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::ValidationError("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::UnrecognizedCategory("TALVEZ".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::PayloadTooLarge("x".into()).status_code(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            AppError::from(ExtractionError::InvalidUtf8).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::from(ia_service::IaServiceError::ParseError("x".into())).status_code(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[tokio::test]
    async fn test_into_response_body() {
        let response = AppError::ValidationError("campo ausente".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "campo ausente");
        assert_eq!(body["status"], 400);
    }
}

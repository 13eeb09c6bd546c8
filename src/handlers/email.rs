use axum::{
    extract::{FromRequest, Multipart, Request, State},
    http::{header::CONTENT_TYPE, StatusCode},
    response::{Html, Json},
    Form,
};
use serde::Deserialize;
use std::sync::Arc;
use tokio::time::Instant;

use super::page::{render_page, PageView, EMPTY_SUBMISSION_MESSAGE};
use crate::models::{EmailAnalysis, EmailSubmission, UploadedFile};
use crate::services::{analyze_email, extract_email_text};
use crate::utils::logging::*;
use crate::utils::{AppError, AppResult};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct EmailForm {
    #[serde(default)]
    pub email_text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    #[serde(default)]
    pub email_text: String,
}

/// GET /: formulário vazio
pub async fn show_form() -> Html<String> {
    log_request_received("/", "GET");
    render_page(&PageView::form())
}

/// POST /: extrai, classifica e sugere resposta
pub async fn submit_form(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<Html<String>, AppError> {
    let start_time = Instant::now();
    log_request_received("/", "POST");

    let submission = read_submission(request).await?;
    let text = extract_email_text(submission).await?;

    if text.trim().is_empty() {
        log_validation_error("email_text", "nenhum texto ou arquivo enviado");
        return Ok(render_page(&PageView::error(EMPTY_SUBMISSION_MESSAGE)));
    }

    let analysis = analyze_email(&state, &text).await?;

    let processing_time = start_time.elapsed().as_millis() as u64;
    log_request_processed("/", 200, processing_time);

    Ok(render_page(&PageView::result(&analysis)))
}

/// POST /api/classify: mesma análise em JSON
pub async fn classify_api(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ClassifyRequest>,
) -> Result<Json<EmailAnalysis>, AppError> {
    let start_time = Instant::now();
    log_request_received("/api/classify", "POST");

    if body.email_text.trim().is_empty() {
        log_validation_error("email_text", "campo vazio");
        return Err(AppError::ValidationError(EMPTY_SUBMISSION_MESSAGE.to_string()));
    }

    let analysis = analyze_email(&state, &body.email_text).await?;

    let processing_time = start_time.elapsed().as_millis() as u64;
    log_request_processed("/api/classify", 200, processing_time);

    Ok(Json(analysis))
}

/// Corpo acima de `max_upload_bytes` vira 413, o resto é 400
fn rejection_error(status: StatusCode, message: String) -> AppError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(message)
    } else {
        AppError::ValidationError(message)
    }
}

/// Lê o formulário em multipart (com upload) ou urlencoded (só texto)
async fn read_submission(request: Request) -> AppResult<EmailSubmission> {
    let content_type = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_lowercase();

    if content_type.starts_with("multipart/form-data") {
        let multipart = Multipart::from_request(request, &())
            .await
            .map_err(|e| rejection_error(e.status(), e.body_text()))?;
        return read_multipart(multipart).await;
    }

    if content_type.starts_with("application/x-www-form-urlencoded") {
        let Form(form) = Form::<EmailForm>::from_request(request, &())
            .await
            .map_err(|e| rejection_error(e.status(), e.body_text()))?;
        return Ok(EmailSubmission {
            email_text: form.email_text,
            email_file: None,
        });
    }

    log_warning(&format!("⚠️ Content-Type sem formulário: '{}'", content_type));
    Ok(EmailSubmission::default())
}

async fn read_multipart(mut multipart: Multipart) -> AppResult<EmailSubmission> {
    let mut submission = EmailSubmission::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| rejection_error(e.status(), e.body_text()))?
    {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            "email_text" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| rejection_error(e.status(), e.body_text()))?;
                submission.email_text = Some(text);
            }
            "email_file" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| rejection_error(e.status(), e.body_text()))?;
                // input de arquivo vazio chega sem nome
                if !filename.is_empty() {
                    submission.email_file = Some(UploadedFile::new(filename, bytes.to_vec()));
                }
            }
            other => log_warning(&format!("Campo de formulário ignorado: '{}'", other)),
        }
    }

    Ok(submission)
}

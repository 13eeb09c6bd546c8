//! Extração do texto do email a partir do formulário
//!
//! Ordem de resolução:
//! 1. upload `.txt` → bytes decodificados como UTF-8
//! 2. upload `.pdf` → texto de cada página (string vazia para páginas sem texto),
//!    unido com `\n`
//! 3. campo `email_text` do formulário
//! 4. string vazia

use lopdf::Document;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

use crate::models::{EmailSubmission, UploadedFile};
use crate::utils::logging::*;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("O arquivo .txt não está em UTF-8 válido")]
    InvalidUtf8,

    #[error("Falha ao preparar arquivo temporário: {0}")]
    TempFile(#[from] std::io::Error),

    #[error("Falha ao ler o PDF: {0}")]
    Pdf(String),

    #[error("Extração interrompida: {0}")]
    TaskFailed(String),
}

/// Resolve o texto efetivo do email
pub async fn extract_email_text(submission: EmailSubmission) -> Result<String, ExtractionError> {
    if let Some(file) = submission.email_file.filter(|f| !f.filename.is_empty()) {
        if file.is_txt() {
            let text = decode_txt(file)?;
            log_info(&format!("📄 Upload .txt decodificado: {} caracteres", text.chars().count()));
            return Ok(text);
        }

        if file.is_pdf() {
            let filename = file.filename;
            let bytes = file.bytes;
            let text = tokio::task::spawn_blocking(move || extract_pdf_text(&bytes))
                .await
                .map_err(|e| ExtractionError::TaskFailed(e.to_string()))??;
            log_info(&format!("📄 PDF '{}' extraído: {} caracteres", filename, text.chars().count()));
            return Ok(text);
        }

        log_warning(&format!(
            "⚠️ Upload '{}' ignorado: apenas .txt e .pdf são suportados",
            file.filename
        ));
    }

    Ok(submission.email_text.unwrap_or_default())
}

fn decode_txt(file: UploadedFile) -> Result<String, ExtractionError> {
    String::from_utf8(file.bytes).map_err(|_| ExtractionError::InvalidUtf8)
}

/// Extrai o texto de um PDF passando por um arquivo temporário no diretório padrão
pub fn extract_pdf_text(pdf_bytes: &[u8]) -> Result<String, ExtractionError> {
    extract_pdf_text_in(&std::env::temp_dir(), pdf_bytes)
}

/// Igual a [`extract_pdf_text`], com o arquivo temporário criado em `dir`
///
/// O arquivo é removido quando o guard sai de escopo, com sucesso ou erro.
pub fn extract_pdf_text_in(dir: &Path, pdf_bytes: &[u8]) -> Result<String, ExtractionError> {
    let mut tmp = tempfile::Builder::new()
        .prefix("email-")
        .suffix(".pdf")
        .tempfile_in(dir)?;

    tmp.write_all(pdf_bytes)?;
    tmp.flush()?;

    let document = Document::load(tmp.path())
        .map_err(|e| ExtractionError::Pdf(e.to_string()))?;

    Ok(pages_text(&document))
}

fn pages_text(document: &Document) -> String {
    let pages = document.get_pages();
    if pages.is_empty() {
        log_warning("⚠️ PDF sem páginas");
    }

    pages
        .keys()
        .map(|page_number| {
            document
                .extract_text(&[*page_number])
                .map(|text| text.trim_end().to_string())
                .unwrap_or_default()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Categoria do email devolvida pelo classificador
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmailCategory {
    /// Exige ação ou resposta
    #[serde(rename = "PRODUTIVO")]
    Produtivo,
    /// Não exige ação
    #[serde(rename = "IMPRODUTIVO")]
    Improdutivo,
}

impl EmailCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmailCategory::Produtivo => "PRODUTIVO",
            EmailCategory::Improdutivo => "IMPRODUTIVO",
        }
    }

    /// Interpreta o rótulo do modelo por igualdade exata
    ///
    /// Ignora caixa, espaços e pontuação/aspas nas pontas ("Produtivo.", "**IMPRODUTIVO**").
    /// Qualquer outro texto devolve `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        let cleaned = label
            .trim()
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_uppercase();

        match cleaned.as_str() {
            "PRODUTIVO" => Some(EmailCategory::Produtivo),
            "IMPRODUTIVO" => Some(EmailCategory::Improdutivo),
            _ => None,
        }
    }

    /// Regra antiga por substring: qualquer rótulo contendo "improdutivo" é improdutivo,
    /// todo o resto é tratado como produtivo
    pub fn from_label_lenient(label: &str) -> Self {
        if label.to_lowercase().contains("improdutivo") {
            EmailCategory::Improdutivo
        } else {
            EmailCategory::Produtivo
        }
    }
}

impl fmt::Display for EmailCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Arquivo enviado no campo `email_file`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(filename: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            bytes: bytes.into(),
        }
    }

    fn has_extension(&self, extension: &str) -> bool {
        self.filename.to_lowercase().ends_with(extension)
    }

    pub fn is_txt(&self) -> bool {
        self.has_extension(".txt")
    }

    pub fn is_pdf(&self) -> bool {
        self.has_extension(".pdf")
    }
}

/// Dados recebidos do formulário
#[derive(Debug, Clone, Default)]
pub struct EmailSubmission {
    pub email_text: Option<String>,
    pub email_file: Option<UploadedFile>,
}

/// Resultado completo de uma análise
#[derive(Debug, Clone, Serialize)]
pub struct EmailAnalysis {
    pub category: EmailCategory,
    pub suggestion: String,
    pub normalized_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_exact() {
        assert_eq!(EmailCategory::from_label("PRODUTIVO"), Some(EmailCategory::Produtivo));
        assert_eq!(EmailCategory::from_label("IMPRODUTIVO"), Some(EmailCategory::Improdutivo));
        assert_eq!(EmailCategory::from_label(" improdutivo. "), Some(EmailCategory::Improdutivo));
        assert_eq!(EmailCategory::from_label("\"Produtivo\""), Some(EmailCategory::Produtivo));
        assert_eq!(EmailCategory::from_label("**IMPRODUTIVO**"), Some(EmailCategory::Improdutivo));
    }

    #[test]
    fn test_from_label_rejects_unknown() {
        assert_eq!(EmailCategory::from_label(""), None);
        assert_eq!(EmailCategory::from_label("TALVEZ"), None);
        assert_eq!(EmailCategory::from_label("PRODUTIVO OU IMPRODUTIVO"), None);
        assert_eq!(EmailCategory::from_label("Categoria: PRODUTIVO"), None);
    }

    #[test]
    fn test_from_label_lenient() {
        assert_eq!(EmailCategory::from_label_lenient("Improdutivo"), EmailCategory::Improdutivo);
        assert_eq!(
            EmailCategory::from_label_lenient("categoria: IMPRODUTIVO."),
            EmailCategory::Improdutivo
        );
        assert_eq!(EmailCategory::from_label_lenient("PRODUTIVO"), EmailCategory::Produtivo);
        assert_eq!(EmailCategory::from_label_lenient("???"), EmailCategory::Produtivo);
    }

    #[test]
    fn test_category_serialization() {
        let json = serde_json::to_string(&EmailCategory::Improdutivo).unwrap();
        assert_eq!(json, "\"IMPRODUTIVO\"");
        assert_eq!(EmailCategory::Produtivo.to_string(), "PRODUTIVO");
    }

    #[test]
    fn test_uploaded_file_extension() {
        assert!(UploadedFile::new("email.TXT", b"oi".to_vec()).is_txt());
        assert!(UploadedFile::new("anexo.pdf", Vec::new()).is_pdf());
        assert!(!UploadedFile::new("foto.png", Vec::new()).is_pdf());
        assert!(!UploadedFile::new("pdf", Vec::new()).is_pdf());
    }
}

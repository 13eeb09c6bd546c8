//! Página HTML do classificador (formulário + resultado)

use axum::response::Html;

use crate::models::EmailAnalysis;

/// Mensagem exibida quando não há texto nem arquivo
pub const EMPTY_SUBMISSION_MESSAGE: &str = "Por favor, insira um email ou faça upload de um arquivo";

/// O que a página deve exibir abaixo do formulário
#[derive(Debug, Default)]
pub struct PageView {
    pub error: Option<String>,
    pub category: Option<String>,
    pub suggestion: Option<String>,
}

impl PageView {
    pub fn form() -> Self {
        Self::default()
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn result(analysis: &EmailAnalysis) -> Self {
        Self {
            category: Some(analysis.category.as_str().to_string()),
            suggestion: Some(analysis.suggestion.clone()),
            ..Self::default()
        }
    }
}

/// Escapa texto para inclusão segura em HTML
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_page(view: &PageView) -> Html<String> {
    let error_html = view
        .error
        .as_deref()
        .map(|msg| format!(r#"<div class="error">{}</div>"#, escape_html(msg)))
        .unwrap_or_default();

    let result_html = match (&view.category, &view.suggestion) {
        (Some(category), Some(suggestion)) => {
            let badge = if category == "IMPRODUTIVO" { "improdutivo" } else { "produtivo" };
            format!(
                r#"
                <div class="result">
                    <h2>Categoria: <span class="badge {}">{}</span></h2>
                    <h3>Resposta sugerida</h3>
                    <textarea id="suggestion" rows="5" readonly>{}</textarea>
                </div>
                "#,
                badge,
                escape_html(category),
                escape_html(suggestion)
            )
        }
        _ => String::new(),
    };

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
    <title>Classificador de Emails</title>
    <meta charset="UTF-8">
    <style>
        body {{ font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Arial, sans-serif;
               max-width: 800px; margin: 40px auto; padding: 20px; background: #f5f5f5; }}
        .container {{ background: white; padding: 30px; border-radius: 12px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }}
        textarea {{ width: 100%; padding: 12px; border: 1px solid #ddd; border-radius: 4px; resize: vertical; }}
        button {{ background: #0366d6; color: white; padding: 12px 24px; border: none;
                 border-radius: 6px; cursor: pointer; font-size: 14px; font-weight: bold; }}
        .error {{ background: #f8d7da; border: 2px solid #dc3545; padding: 15px; border-radius: 8px; margin-top: 20px; }}
        .result {{ background: #eef6ff; border: 2px solid #0366d6; padding: 20px; border-radius: 8px; margin-top: 20px; }}
        .badge {{ padding: 4px 10px; border-radius: 4px; color: white; }}
        .badge.produtivo {{ background: #28a745; }}
        .badge.improdutivo {{ background: #6c757d; }}
    </style>
</head>
<body>
    <div class="container">
        <h1>Classificador de Emails</h1>
        <form method="post" action="/" enctype="multipart/form-data">
            <label for="email_text">Texto do email</label>
            <textarea id="email_text" name="email_text" rows="10"></textarea>
            <p>
                <label for="email_file">Ou envie um arquivo (.txt ou .pdf)</label>
                <input type="file" id="email_file" name="email_file" accept=".txt,.pdf">
            </p>
            <button type="submit">Classificar</button>
        </form>
        {}
        {}
    </div>
</body>
</html>
"#,
        error_html, result_html
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmailCategory;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<script>alert("x") & 'y'</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;) &amp; &#39;y&#39;&lt;/script&gt;"
        );
    }

    #[test]
    fn test_render_form_only() {
        let Html(html) = render_page(&PageView::form());
        assert!(html.contains(r#"name="email_text""#));
        assert!(html.contains(r#"name="email_file""#));
        assert!(!html.contains(r#"class="error""#));
        assert!(!html.contains(r#"class="result""#));
    }

    #[test]
    fn test_render_error() {
        let Html(html) = render_page(&PageView::error(EMPTY_SUBMISSION_MESSAGE));
        assert!(html.contains("Por favor, insira um email ou faça upload de um arquivo"));
        assert!(html.contains(r#"class="error""#));
    }

    #[test]
    fn test_render_result_escapes_suggestion() {
        let analysis = EmailAnalysis {
            category: EmailCategory::Produtivo,
            suggestion: "Segue <b>anexo</b>".to_string(),
            normalized_text: String::new(),
        };
        let Html(html) = render_page(&PageView::result(&analysis));
        assert!(html.contains("PRODUTIVO"));
        assert!(html.contains("Segue &lt;b&gt;anexo&lt;/b&gt;"));
        assert!(!html.contains("<b>anexo</b>"));
    }
}

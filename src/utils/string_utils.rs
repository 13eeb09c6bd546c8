/// Utilitários de texto para logs e exibição

/// Gera uma prévia de uma linha do texto, limitada a `max_chars` caracteres
///
/// Quebras de linha e espaços repetidos viram um único espaço. Quando o texto
/// é cortado, `…` é acrescentado. O corte respeita limites de caractere UTF-8.
///
/// # Exemplo
/// ```
/// use classificador_emails::utils::string_utils::preview;
///
/// assert_eq!(preview("Olá,\n\n  preciso do relatório", 12), "Olá, preciso…");
/// assert_eq!(preview("curto", 50), "curto");
/// ```
pub fn preview(text: &str, max_chars: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }

    let cut: String = collapsed.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_collapses_whitespace() {
        assert_eq!(preview("  Bom\tdia\n\nequipe  ", 100), "Bom dia equipe");
    }

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        let text = "Ação imediata 🌍 necessária";
        let result = preview(text, 4);
        assert_eq!(result, "Ação…");
    }

    #[test]
    fn test_preview_emoji_not_split() {
        let result = preview("Olá 🌍 mundo", 5);
        assert_eq!(result, "Olá 🌍…");
    }

    #[test]
    fn test_preview_empty() {
        assert_eq!(preview("", 10), "");
        assert_eq!(preview("   \n ", 10), "");
    }
}

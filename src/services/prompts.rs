//! Prompts enviados ao modelo
//!
//! Os dois prompts são determinísticos: o único trecho variável é o texto do email.

/// Temperatura da classificação (amostragem determinística)
pub const CLASSIFICATION_TEMPERATURE: f64 = 0.0;
pub const CLASSIFICATION_MAX_TOKENS: u32 = 60;

pub const REPLY_TEMPERATURE: f64 = 0.3;
pub const REPLY_MAX_TOKENS: u32 = 140;

/// Resposta fixa para emails improdutivos (sem chamada ao modelo)
pub const UNPRODUCTIVE_REPLY: &str = "Não é necessária ação imediata.";

/// Prompt de classificação: exige UMA palavra, PRODUTIVO ou IMPRODUTIVO
pub fn classification_prompt(email_text: &str) -> String {
    format!(
        r#"Você é um assistente que classifica emails. Responda APENAS com UMA palavra: PRODUTIVO ou IMPRODUTIVO (tudo em maiúsculas), sem explicações adicionais.

Critérios rápidos:
- PRODUTIVO: contém pedido de ação, pergunta que exige resposta, tarefa, prazo, decisão, solicitação de reunião, pedido de confirmação, ou informações que exigem follow-up.
- IMPRODUTIVO: anúncios, newsletters, marketing, confirmação informal sem ação, agradecimento sem pedido de ação.

Se o conteúdo estiver ambíguo mas houver qualquer indicação de ação, marque PRODUTIVO.

Email:
"{}"
"#,
        email_text
    )
}

/// Prompt da resposta sugerida (português brasileiro, 2-3 frases, sem assinatura)
pub fn reply_prompt(email_text: &str) -> String {
    format!(
        r#"Você é um assistente que escreve respostas profissionais e concisas por e-mail. Com base no email abaixo, escreva UMA resposta pronta para envio (máx. 2-3 frases, 1 parágrafo) em português brasileiro, tom profissional, objetiva e direta. Inclua um próximo passo claro quando pertinente. Não invente informações.

Email:
"{}"

Responda APENAS com o texto da resposta, sem introduções, sem explicações e sem assinatura."#,
        email_text
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_prompt_embeds_text() {
        let prompt = classification_prompt("preciso relatorio mensal");
        assert!(prompt.contains("\"preciso relatorio mensal\""));
        assert!(prompt.contains("PRODUTIVO ou IMPRODUTIVO"));
        assert!(prompt.starts_with("Você é um assistente que classifica emails."));
    }

    #[test]
    fn test_reply_prompt_embeds_text() {
        let prompt = reply_prompt("reuniao amanha");
        assert!(prompt.contains("Email:\n\"reuniao amanha\""));
        assert!(prompt.ends_with("sem assinatura."));
        assert!(prompt.contains("português brasileiro"));
    }

    #[test]
    fn test_prompts_are_deterministic() {
        assert_eq!(classification_prompt("abc"), classification_prompt("abc"));
        assert_eq!(reply_prompt("abc"), reply_prompt("abc"));
    }
}

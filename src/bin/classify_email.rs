/// Executa o pipeline de classificação fora do servidor
///
/// Uso:
///   cargo run --bin classify_email -- caminho/email.pdf
///   cargo run --bin classify_email -- --text "Preciso do relatório até sexta"
///   cargo run --bin classify_email -- --dry-run caminho/email.txt   (só mostra os prompts)

use anyhow::{bail, Context};
use std::path::Path;

use classificador_emails::config::Settings;
use classificador_emails::models::{EmailSubmission, UploadedFile};
use classificador_emails::services::{analyze_email, extract_email_text, prompts};
use classificador_emails::AppState;

struct CliArgs {
    dry_run: bool,
    text: Option<String>,
    file: Option<String>,
}

fn parse_args() -> anyhow::Result<CliArgs> {
    let mut args = CliArgs { dry_run: false, text: None, file: None };
    let mut iter = std::env::args().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--dry-run" => args.dry_run = true,
            "--text" => args.text = Some(iter.next().context("--text exige um valor")?),
            other if other.starts_with("--") => bail!("opção desconhecida: {}", other),
            path => args.file = Some(path.to_string()),
        }
    }

    if args.text.is_none() && args.file.is_none() {
        bail!("uso: classify_email [--dry-run] (--text \"...\" | <arquivo.txt|arquivo.pdf>)");
    }

    Ok(args)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = parse_args()?;

    let email_file = match &args.file {
        Some(path) => {
            let bytes = std::fs::read(path).with_context(|| format!("falha ao ler {}", path))?;
            let filename = Path::new(path)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.clone());
            Some(UploadedFile::new(filename, bytes))
        }
        None => None,
    };

    let text = extract_email_text(EmailSubmission {
        email_text: args.text.clone(),
        email_file,
    })
    .await?;

    if text.trim().is_empty() {
        bail!("nenhum texto encontrado na entrada");
    }

    let settings = Settings::new().context("falha ao carregar configuração")?;
    let state = AppState::from_settings(settings)?;

    println!("\n{}", "=".repeat(80));
    println!("📝 TEXTO EXTRAÍDO ({} caracteres)", text.chars().count());
    println!("{}", "=".repeat(80));
    println!("{}\n", text);

    let normalized = state.normalizer.normalize(&text);
    println!("🧹 TEXTO NORMALIZADO:");
    println!("{}\n", normalized);

    if args.dry_run {
        println!("🤖 PROMPT DE CLASSIFICAÇÃO:");
        println!("{}", "-".repeat(80));
        println!("{}", prompts::classification_prompt(&normalized));
        println!("{}\n", "-".repeat(80));
        println!("🤖 PROMPT DE RESPOSTA:");
        println!("{}", "-".repeat(80));
        println!("{}", prompts::reply_prompt(&normalized));
        println!("{}", "-".repeat(80));
        return Ok(());
    }

    let analysis = analyze_email(&state, &text).await?;

    println!("🏷️  CATEGORIA: {}", analysis.category);
    println!("✉️  RESPOSTA SUGERIDA:");
    println!("{}", analysis.suggestion);
    println!("{}\n", "=".repeat(80));

    Ok(())
}

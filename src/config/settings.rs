use serde::{Deserialize, Serialize};
use config::{Config, ConfigError, Environment, File};

/// Variáveis de ambiente legadas mapeadas para chaves da configuração
const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("GITHUB_TOKEN", "github_models.token"),
    ("GITHUB_MODEL", "github_models.model"),
    ("GITHUB_MODELS_URL", "github_models.endpoint"),
    // No Cloud Run a porta vem de PORT
    ("PORT", "server.port"),
];

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub github_models: GithubModelsSettings,
    pub normalizer: NormalizerSettings,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Limite do corpo das requisições (uploads incluídos)
    pub max_upload_bytes: usize,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct GithubModelsSettings {
    #[serde(default)]
    pub token: String,
    pub model: String,
    pub endpoint: String,
    pub timeout_seconds: u64,
}

impl std::fmt::Debug for GithubModelsSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubModelsSettings")
            .field("token_configured", &!self.token.is_empty())
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NormalizerSettings {
    pub language: NormalizerLanguage,
    /// Arquivo de stopwords (uma por linha) que substitui a lista embutida
    #[serde(default)]
    pub stopwords_path: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NormalizerLanguage {
    English,
    Portuguese,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let overrides: Vec<(&str, String)> = ENV_OVERRIDES
            .iter()
            .filter_map(|(var, key)| std::env::var(var).ok().map(|value| (*key, value)))
            .collect();

        Self::load("config", &run_mode, &overrides)
    }

    /// Monta a configuração: defaults, arquivos em `config_dir`, overrides explícitos
    /// e variáveis `CLASSIFICADOR_*` (separador `__`)
    pub fn load(
        config_dir: &str,
        run_mode: &str,
        overrides: &[(&str, String)],
    ) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000_i64)?
            .set_default("server.max_upload_bytes", 10_i64 * 1024 * 1024)?
            .set_default("github_models.token", "")?
            .set_default("github_models.model", ia_service::DEFAULT_MODEL)?
            .set_default("github_models.endpoint", ia_service::DEFAULT_ENDPOINT)?
            .set_default("github_models.timeout_seconds", ia_service::DEFAULT_TIMEOUT_SECS as i64)?
            .set_default("normalizer.language", "english")?
            // Arquivo de configuração base
            .add_source(File::with_name(&format!("{}/default", config_dir)).required(false))
            // Arquivo específico do ambiente
            .add_source(File::with_name(&format!("{}/{}", config_dir, run_mode)).required(false));

        for (key, value) in overrides {
            builder = builder.set_override(*key, value.clone())?;
        }

        builder = builder.add_source(Environment::with_prefix("CLASSIFICADOR").separator("__"));

        let s = builder.build()?;

        s.try_deserialize()
    }
}

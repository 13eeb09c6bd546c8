//! Normalização de texto antes da classificação
//!
//! O `TextNormalizer` é construído uma única vez na inicialização (lista de
//! stopwords + stemmer) e compartilhado somente-leitura entre as requisições.
//!
//! Pipeline: lowercase → sequências de caracteres não-palavra viram um espaço →
//! tokens separados por espaço → remoção de stopwords → stemming → junção com
//! espaço simples.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;
use std::fmt;

use crate::config::settings::{NormalizerLanguage, NormalizerSettings};
use crate::utils::{AppError, AppResult};

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\W+").expect("regex \\W+ é válida"));

/// Limite de passadas do stemmer sobre o mesmo token
const MAX_STEM_PASSES: usize = 3;

const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

const PORTUGUESE_STOPWORDS: &[&str] = &[
    "a", "à", "ao", "aos", "aquela", "aquelas", "aquele", "aqueles", "aquilo", "as", "às", "até",
    "com", "como", "da", "das", "de", "dela", "delas", "dele", "deles", "depois", "do", "dos",
    "e", "é", "ela", "elas", "ele", "eles", "em", "entre", "era", "eram", "éramos", "essa",
    "essas", "esse", "esses", "esta", "está", "estamos", "estão", "estas", "estava", "estavam",
    "estávamos", "este", "esteja", "estejam", "estejamos", "estes", "esteve", "estive",
    "estivemos", "estiver", "estivera", "estiveram", "estivéramos", "estiverem", "estivermos",
    "estivesse", "estivessem", "estivéssemos", "estou", "eu", "foi", "fomos", "for", "fora",
    "foram", "fôramos", "forem", "formos", "fosse", "fossem", "fôssemos", "fui", "há", "haja",
    "hajam", "hajamos", "hão", "havemos", "havia", "hei", "houve", "houvemos", "houver",
    "houvera", "houverá", "houveram", "houvéramos", "houverão", "houverei", "houverem",
    "houveremos", "houveria", "houveriam", "houveríamos", "houvermos", "houvesse", "houvessem",
    "houvéssemos", "isso", "isto", "já", "lhe", "lhes", "mais", "mas", "me", "mesmo", "meu",
    "meus", "minha", "minhas", "muito", "na", "não", "nas", "nem", "no", "nos", "nós", "nossa",
    "nossas", "nosso", "nossos", "num", "numa", "o", "os", "ou", "para", "pela", "pelas", "pelo",
    "pelos", "por", "qual", "quando", "que", "quem", "são", "se", "seja", "sejam", "sejamos",
    "sem", "ser", "será", "serão", "serei", "seremos", "seria", "seriam", "seríamos", "seu",
    "seus", "só", "somos", "sou", "sua", "suas", "também", "te", "tem", "tém", "temos", "tenha",
    "tenham", "tenhamos", "tenho", "terá", "terão", "terei", "teremos", "teria", "teriam",
    "teríamos", "teu", "teus", "teve", "tinha", "tinham", "tínhamos", "tive", "tivemos",
    "tiver", "tivera", "tiveram", "tivéramos", "tiverem", "tivermos", "tivesse", "tivessem",
    "tivéssemos", "tu", "tua", "tuas", "um", "uma", "você", "vocês", "vos",
];

impl NormalizerLanguage {
    fn algorithm(self) -> Algorithm {
        match self {
            NormalizerLanguage::English => Algorithm::English,
            NormalizerLanguage::Portuguese => Algorithm::Portuguese,
        }
    }

    fn builtin_stopwords(self) -> &'static [&'static str] {
        match self {
            NormalizerLanguage::English => ENGLISH_STOPWORDS,
            NormalizerLanguage::Portuguese => PORTUGUESE_STOPWORDS,
        }
    }
}

/// Normalizador compartilhado (somente leitura após a construção)
pub struct TextNormalizer {
    language: NormalizerLanguage,
    stopwords: HashSet<String>,
    stemmer: Stemmer,
}

impl fmt::Debug for TextNormalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextNormalizer")
            .field("language", &self.language)
            .field("stopwords", &self.stopwords.len())
            .finish()
    }
}

impl TextNormalizer {
    /// Normalizador com a lista de stopwords embutida do idioma
    pub fn new(language: NormalizerLanguage) -> Self {
        Self::with_stopwords(language, language.builtin_stopwords().iter().copied())
    }

    pub fn with_stopwords<I, S>(language: NormalizerLanguage, stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            language,
            stopwords: stopwords
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
            stemmer: Stemmer::create(language.algorithm()),
        }
    }

    /// Constrói a partir da configuração; `stopwords_path` substitui a lista embutida
    pub fn from_settings(settings: &NormalizerSettings) -> AppResult<Self> {
        match settings.stopwords_path.as_deref() {
            Some(path) => {
                let contents = std::fs::read_to_string(path).map_err(|e| {
                    AppError::ConfigError(format!("Failed to read stopwords file '{}': {}", path, e))
                })?;
                let words = parse_stopwords(&contents);
                tracing::info!("📚 {} stopwords carregadas de {}", words.len(), path);
                Ok(Self::with_stopwords(settings.language, words))
            }
            None => Ok(Self::new(settings.language)),
        }
    }

    pub fn language(&self) -> NormalizerLanguage {
        self.language
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    /// Normaliza o texto; nunca falha, pode devolver string vazia
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let cleaned = NON_WORD.replace_all(&lowered, " ");

        cleaned
            .split_whitespace()
            .filter(|token| !self.is_stopword(token))
            .map(|token| self.stem(token))
            // o radical pode coincidir com uma stopword ("wills" -> "will")
            .filter(|stem| !stem.is_empty() && !self.is_stopword(stem))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Aplica o stemmer até estabilizar, para que normalizar duas vezes não mude o resultado
    fn stem(&self, token: &str) -> String {
        let mut current = self.stemmer.stem(token).into_owned();
        for _ in 1..MAX_STEM_PASSES {
            let next = self.stemmer.stem(&current).into_owned();
            if next == current {
                break;
            }
            current = next;
        }
        current
    }
}

/// Uma stopword por linha; linhas vazias e comentários (`#`) são ignorados
fn parse_stopwords(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect()
}

use anyhow::{Context, Result};

/// Which translation provider the pipeline tries first; the other becomes
/// the fallback. A per-process setting, never mutated after startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationEngine {
    Google,
    Libre,
}

impl TranslationEngine {
    fn parse(raw: &str) -> Result<Self> {
        match raw.to_lowercase().as_str() {
            "google" => Ok(TranslationEngine::Google),
            "libre" => Ok(TranslationEngine::Libre),
            other => anyhow::bail!(
                "Unknown TRANSLATION_ENGINE '{other}' (expected 'google' or 'libre')"
            ),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Every variable has a usable default; the service needs no secrets.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub translation_engine: TranslationEngine,
    pub libretranslate_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            translation_engine: TranslationEngine::parse(
                &std::env::var("TRANSLATION_ENGINE").unwrap_or_else(|_| "google".to_string()),
            )?,
            libretranslate_url: std::env::var("LIBRETRANSLATE_URL")
                .unwrap_or_else(|_| "https://libretranslate.com".to_string()),
        })
    }
}

use anyhow::{Context, Result};

/// Largest `cv_text` accepted by the parse endpoints unless overridden.
const DEFAULT_MAX_CV_TEXT_BYTES: usize = 256 * 1024;

/// Application configuration loaded from environment variables.
/// Every setting has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub max_cv_text_bytes: usize,
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
            max_cv_text_bytes: optional_env("MAX_CV_TEXT_BYTES")
                .map(|v| {
                    v.parse::<usize>()
                        .with_context(|| format!("MAX_CV_TEXT_BYTES must be a byte count, got '{v}'"))
                })
                .transpose()?
                .unwrap_or(DEFAULT_MAX_CV_TEXT_BYTES),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

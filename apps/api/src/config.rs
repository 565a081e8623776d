use anyhow::{Context, Result};

use crate::matching::fit::DEFAULT_REJECTION_THRESHOLD;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    /// Hugging Face router token for model inference. Required.
    pub hf_token: String,
    /// SerpAPI key. Optional — without it the job source serves bundled samples.
    pub serpapi_key: Option<String>,
    /// Fit score below which candidates are rejected.
    pub rejection_threshold: u32,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            hf_token: require_env("HF_TOKEN")?,
            serpapi_key: std::env::var("SERPAPI_KEY").ok().filter(|k| !k.is_empty()),
            rejection_threshold: match std::env::var("REJECTION_THRESHOLD") {
                Ok(raw) => raw
                    .parse::<u32>()
                    .context("REJECTION_THRESHOLD must be an integer between 0 and 100")?,
                Err(_) => DEFAULT_REJECTION_THRESHOLD,
            },
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

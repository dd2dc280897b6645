use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};

const DEFAULT_MAX_INPUT_BYTES: usize = 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    /// Classifier artifact (JSON linear model).
    pub model_path: PathBuf,
    /// Vectorizer artifact (JSON vocabulary + idf).
    pub vectorizer_path: PathBuf,
    pub port: u16,
    pub rust_log: String,
    /// Upper bound on one classification call. `None` waits indefinitely.
    pub classify_timeout: Option<Duration>,
    /// HTML-escape candidate text in the portfolio website.
    pub escape_portfolio_html: bool,
    /// Request body limit for the JSON endpoints.
    pub max_input_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup (the process environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let require = |key: &str| {
            lookup(key).with_context(|| format!("Required environment variable '{key}' is not set"))
        };

        Ok(Config {
            model_path: PathBuf::from(require("MODEL_PATH")?),
            vectorizer_path: PathBuf::from(require("VECTORIZER_PATH")?),
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            classify_timeout: lookup("CLASSIFY_TIMEOUT_MS")
                .map(|v| v.parse::<u64>())
                .transpose()
                .context("CLASSIFY_TIMEOUT_MS must be a whole number of milliseconds")?
                .filter(|ms| *ms > 0)
                .map(Duration::from_millis),
            escape_portfolio_html: lookup("ESCAPE_PORTFOLIO_HTML")
                .map(|v| parse_bool("ESCAPE_PORTFOLIO_HTML", &v))
                .transpose()?
                .unwrap_or(true),
            max_input_bytes: lookup("MAX_INPUT_BYTES")
                .map(|v| v.parse::<usize>())
                .transpose()
                .context("MAX_INPUT_BYTES must be a byte count")?
                .unwrap_or(DEFAULT_MAX_INPUT_BYTES),
        })
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("{key} must be a boolean, got '{other}'"),
    }
}

use std::time::Duration;

use anyhow::{Context, Result};

use crate::llm_client::{huggingface, together, ProviderConfig};

/// Origins allowed to call the API from a browser.
pub const CORS_ALLOWED_ORIGINS: &[&str] = &[
    "https://portfolio-nu-khaki-37.vercel.app",
    "http://localhost:5173",
    "http://localhost:3000",
];

/// Application configuration loaded from environment variables.
/// Provider credentials are optional: a missing one only disables that provider.
#[derive(Debug, Clone)]
pub struct Config {
    pub huggingface: ProviderConfig,
    pub together: ProviderConfig,
    pub together_model: String,
    pub chat_timeout: Duration,
    pub provider_timeout: Duration,
    pub conversation_capacity: usize,
    /// `None` disables idle expiry.
    pub conversation_ttl: Option<chrono::Duration>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let ttl_secs: u64 = parse_env("CONVERSATION_TTL_SECS", 86_400)?;

        Ok(Config {
            huggingface: ProviderConfig::new(
                "huggingface",
                env_or("HF_API_URL", huggingface::DEFAULT_ENDPOINT),
                optional_env("HF_API_TOKEN"),
            ),
            together: ProviderConfig::new(
                "together",
                env_or("TOGETHER_API_URL", together::DEFAULT_ENDPOINT),
                optional_env("TOGETHER_API_TOKEN"),
            ),
            together_model: env_or("TOGETHER_MODEL", together::DEFAULT_MODEL),
            chat_timeout: Duration::from_secs(parse_env("CHAT_TIMEOUT_SECS", 30)?),
            provider_timeout: Duration::from_secs(parse_env("PROVIDER_TIMEOUT_SECS", 30)?),
            conversation_capacity: parse_env("CONVERSATION_CAPACITY", 1000)?,
            conversation_ttl: ttl_from_secs(ttl_secs)?,
            port: parse_env("PORT", 8000)?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_or(key: &str, default: &str) -> String {
    optional_env(key).unwrap_or_else(|| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}

fn ttl_from_secs(secs: u64) -> Result<Option<chrono::Duration>> {
    if secs == 0 {
        return Ok(None);
    }
    let secs = i64::try_from(secs).context("CONVERSATION_TTL_SECS is too large")?;
    chrono::Duration::try_seconds(secs)
        .map(Some)
        .context("CONVERSATION_TTL_SECS is too large")
}

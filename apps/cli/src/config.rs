use anyhow::Result;

/// Used when `VITAE_API_BASE` is not set, matching the backend's default
/// local port.
pub const DEFAULT_API_BASE: &str = "http://localhost:8080";

/// Application configuration loaded from environment variables.
/// Every field has a fallback; startup never fails on missing env.
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend base URL without a trailing slash.
    pub api_base: String,
    /// Default log level, overridable per-run with `-v`.
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env if present; ignore if missing.
        dotenvy::dotenv().ok();

        let api_base = std::env::var("VITAE_API_BASE")
            .unwrap_or_else(|_| DEFAULT_API_BASE.to_string())
            .trim_end_matches('/')
            .to_string();
        let rust_log = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Ok(Config { api_base, rust_log })
    }
}

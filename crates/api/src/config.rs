use std::str::FromStr;
use std::time::Duration;

use aethera_chain::ChainConfig;
use anyhow::Context;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// SQLite database holding the key-value blobs.
    pub database_url: String,
    /// Simulated chain confirmation delays.
    pub chain: ChainConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                  |
    /// |--------------------------|--------------------------|
    /// | `HOST`                   | `0.0.0.0`                |
    /// | `PORT`                   | `3000`                   |
    /// | `CORS_ORIGINS`           | `http://localhost:5173`  |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`                     |
    /// | `DATABASE_URL`           | `sqlite://aethera.db`    |
    /// | `CHAIN_CONNECT_DELAY_MS` | `1000`                   |
    /// | `CHAIN_MINT_DELAY_MS`    | `2000`                   |
    /// | `CHAIN_INVEST_DELAY_MS`  | `1500`                   |
    /// | `CHAIN_RELEASE_DELAY_MS` | `2000`                   |
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env_or("HOST", "0.0.0.0");
        let port = parse_env("PORT", 3000u16)?;

        let cors_origins: Vec<String> = env_or("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = parse_env("REQUEST_TIMEOUT_SECS", 30u64)?;
        let database_url = env_or("DATABASE_URL", "sqlite://aethera.db");

        let defaults = ChainConfig::default();
        let chain = ChainConfig {
            connect_delay: parse_delay("CHAIN_CONNECT_DELAY_MS", defaults.connect_delay)?,
            mint_delay: parse_delay("CHAIN_MINT_DELAY_MS", defaults.mint_delay)?,
            invest_delay: parse_delay("CHAIN_INVEST_DELAY_MS", defaults.invest_delay)?,
            release_delay: parse_delay("CHAIN_RELEASE_DELAY_MS", defaults.release_delay)?,
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_url,
            chain,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.into())
}

fn parse_env<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} must be a valid {}", std::any::type_name::<T>())),
        Err(_) => Ok(default),
    }
}

fn parse_delay(key: &str, default: Duration) -> anyhow::Result<Duration> {
    let millis = parse_env(key, default.as_millis() as u64)?;
    Ok(Duration::from_millis(millis))
}

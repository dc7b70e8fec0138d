//! Configuration Loader - Environment Reading and Parsing
//!
//! Reads all settings from the process environment (after loading a
//! `.env` file when present) and reports malformed numeric values with
//! clear error messages. Missing values fall back to defaults.

use anyhow::{Context, Result};
use tracing::info;

use super::{ApiConfig, AppConfig, ServerConfig};

/// Default HTTP bind port.
const DEFAULT_PORT: u16 = 3000;

/// Default odds provider base URL.
const DEFAULT_BASE_URL: &str = "https://api.the-odds-api.com/v4";

/// Default upstream request timeout.
const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Load configuration from the process environment.
///
/// # Errors
/// Returns an error only when a numeric variable is present but
/// unparseable. Absent variables always fall back to defaults — the
/// API key in particular is never required at startup.
pub fn load_config() -> Result<AppConfig> {
  // Best-effort: a missing .env file is the normal production case.
  dotenvy::dotenv().ok();

  let port = match std::env::var("PORT") {
    Ok(raw) => raw
      .parse::<u16>()
      .with_context(|| format!("Invalid PORT value: {raw}"))?,
    Err(_) => DEFAULT_PORT,
  };

  let timeout_ms = match std::env::var("ODDS_API_TIMEOUT_MS") {
    Ok(raw) => raw
      .parse::<u64>()
      .with_context(|| format!("Invalid ODDS_API_TIMEOUT_MS value: {raw}"))?,
    Err(_) => DEFAULT_TIMEOUT_MS,
  };

  let config = AppConfig {
    server: ServerConfig { port },
    api: ApiConfig {
      base_url: std::env::var("ODDS_API_BASE_URL")
        .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
      api_key: std::env::var("ODDS_API_KEY").unwrap_or_default(),
      timeout_ms,
    },
    log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
  };

  info!(
    port = config.server.port,
    base_url = %config.api.base_url,
    api_key_set = !config.api.api_key.is_empty(),
    timeout_ms = config.api.timeout_ms,
    "Configuration loaded"
  );

  Ok(config)
}

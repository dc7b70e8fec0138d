//! Configuration Module - Environment-based Backend Configuration
//!
//! Loads configuration from the process environment once at startup,
//! with `.env` support via dotenvy for local development. The provider
//! API key is deliberately NOT validated here: a missing or wrong key
//! surfaces as an upstream failure at request time, never at startup.

pub mod loader;

pub use loader::load_config;

use std::time::Duration;

/// Top-level backend configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
  /// HTTP server settings.
  pub server: ServerConfig,
  /// Upstream odds provider settings.
  pub api: ApiConfig,
  /// Log level fallback when RUST_LOG is unset (trace..error).
  pub log_level: String,
}

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
  /// Bind port (`PORT`, default 3000).
  pub port: u16,
}

/// Upstream odds provider configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  /// Provider base URL (`ODDS_API_BASE_URL`).
  pub base_url: String,
  /// Provider API key (`ODDS_API_KEY`). May be absent; see module docs.
  pub api_key: String,
  /// Request timeout in milliseconds (`ODDS_API_TIMEOUT_MS`).
  pub timeout_ms: u64,
}

impl ApiConfig {
  /// Request timeout as a `Duration`.
  pub fn timeout(&self) -> Duration {
    Duration::from_millis(self.timeout_ms)
  }
}

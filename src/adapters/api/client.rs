//! Odds API HTTP Client
//!
//! Wraps reqwest for all the-odds-api.com interactions. Each request is
//! a single attempt bounded by the client timeout: the backend proxies
//! failures straight through, so there is no retry or backoff here.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::domain::feed::Game;
use crate::ports::odds_feed::{FeedError, OddsFeed};

/// Region forwarded to the provider on every call.
const REGIONS: &str = "us";

/// Date format forwarded to the provider on every call.
const DATE_FORMAT: &str = "iso";

/// Configuration for the odds API client.
#[derive(Debug, Clone)]
pub struct OddsApiConfig {
  /// Base URL for the provider, e.g. `https://api.the-odds-api.com/v4`.
  pub base_url: String,
  /// Provider API key. An empty or wrong key surfaces as an upstream
  /// 4xx at request time, never as a startup failure.
  pub api_key: String,
  /// Request timeout.
  pub timeout: Duration,
}

impl Default for OddsApiConfig {
  fn default() -> Self {
    Self {
      base_url: "https://api.the-odds-api.com/v4".to_string(),
      api_key: String::new(),
      timeout: Duration::from_secs(10),
    }
  }
}

/// HTTP client for the-odds-api.com, implementing the `OddsFeed` port.
pub struct OddsApiClient {
  /// Underlying HTTP client.
  http: Client,
  /// Client configuration.
  config: OddsApiConfig,
}

impl OddsApiClient {
  /// Create a new odds API client.
  pub fn new(config: OddsApiConfig) -> Result<Self> {
    let http = Client::builder()
      .timeout(config.timeout)
      .pool_max_idle_per_host(5)
      .build()
      .context("Failed to build HTTP client")?;

    Ok(Self { http, config })
  }
}

#[async_trait]
impl OddsFeed for OddsApiClient {
  /// Fetch the odds feed for a sport.
  ///
  /// Calls GET /sports/{sport}/odds with the configured API key and the
  /// per-endpoint market list, and parses the response into `Game`s.
  async fn fetch_odds(&self, sport: &str, markets: &str) -> Result<Vec<Game>, FeedError> {
    let url = format!("{}/sports/{}/odds", self.config.base_url, sport);

    let response = self
      .http
      .get(&url)
      .query(&[
        ("apiKey", self.config.api_key.as_str()),
        ("regions", REGIONS),
        ("markets", markets),
        ("dateFormat", DATE_FORMAT),
      ])
      .send()
      .await?;

    let status = response.status();
    if !status.is_success() {
      return Err(FeedError::Status {
        status: status.as_u16(),
      });
    }

    let games: Vec<Game> = response
      .json()
      .await
      .map_err(|e| FeedError::Decode(e.to_string()))?;

    debug!(sport, markets, games = games.len(), "Odds feed fetched");

    Ok(games)
  }
}

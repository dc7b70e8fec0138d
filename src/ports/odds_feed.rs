//! Odds Feed Port - Upstream Provider Interface
//!
//! Defines the trait for fetching odds data from a sports-odds provider.
//! The HTTP adapter implements it against the-odds-api.com; tests mock it.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::feed::Game;

/// Failure of an outbound odds-feed call.
///
/// The variants are distinguishable for logging only. At the handler
/// boundary every variant collapses into the same opaque 500 response,
/// so callers cannot tell a network failure from a bad API key from a
/// malformed body.
#[derive(Error, Debug)]
pub enum FeedError {
  #[error("transport error: {0}")]
  Transport(#[from] reqwest::Error),

  #[error("upstream returned status {status}")]
  Status { status: u16 },

  #[error("failed to decode upstream body: {0}")]
  Decode(String),
}

/// Trait for sports-odds data providers.
///
/// One call per request, no retry, no caching: the transport timeout is
/// the only bound on the call. `markets` is the comma-separated market
/// list forwarded to the provider.
#[async_trait]
pub trait OddsFeed: Send + Sync + 'static {
  /// Fetch the current odds feed for a sport.
  async fn fetch_odds(&self, sport: &str, markets: &str) -> Result<Vec<Game>, FeedError>;
}

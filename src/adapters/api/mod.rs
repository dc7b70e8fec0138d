//! Odds API Adapter
//!
//! Implements the HTTP client for the-odds-api.com v4. Builds the
//! provider query (API key, region, market list, date format) and
//! deserializes the response into the domain feed types.
//!
//! Sub-modules:
//! - `client`: reqwest-based client implementing the `OddsFeed` port

pub mod client;

pub use client::{OddsApiClient, OddsApiConfig};

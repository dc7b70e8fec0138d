//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces (traits) that the request handlers require
//! from the outside world. Adapters implement these traits.
//!
//! Port categories:
//! - `OddsFeed`: outbound calls to the sports-odds provider

pub mod odds_feed;

pub use odds_feed::{FeedError, OddsFeed};

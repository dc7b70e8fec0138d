//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits defined in `crate::ports` and hosts the
//! inbound HTTP surface. Each sub-module groups adapters by
//! infrastructure concern.
//!
//! Adapter categories:
//! - `api`: the-odds-api.com REST client (implements `OddsFeed`)
//! - `server`: axum HTTP server exposing the backend routes

pub mod api;
pub mod server;

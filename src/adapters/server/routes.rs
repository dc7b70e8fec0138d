//! Request routing and handlers.
//!
//! Three JSON endpoints plus a liveness banner. The two feed-backed
//! handlers make exactly one upstream call each and reshape the result;
//! any upstream failure collapses into a fixed, non-descriptive 500 body
//! so callers never learn whether the network, the API key, or the body
//! shape was at fault.

use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::normalize::NormalizedGame;
use crate::domain::parlay::{CANDIDATE_BOARD, DEFAULT_TIER, ParlayResult};
use crate::domain::picks::Pick;
use crate::domain::{compose_parlay, generate_picks, normalize};
use crate::ports::odds_feed::OddsFeed;

/// Market list requested for the odds endpoint.
const ODDS_MARKETS: &str = "moneyline,spreads,totals";

/// Market list requested for the pick-generation endpoint.
const PICK_MARKETS: &str = "moneyline,spreads";

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Upstream odds provider (mocked in tests).
    pub feed: Arc<dyn OddsFeed>,
}

/// Response envelope for `GET /odds/:sport`.
#[derive(Debug, Serialize, Deserialize)]
pub struct OddsResponse {
    pub sport: String,
    pub games: Vec<NormalizedGame>,
}

/// Response envelope for `GET /generate-picks/:sport`.
#[derive(Debug, Serialize, Deserialize)]
pub struct PicksResponse {
    pub sport: String,
    pub picks: Vec<Pick>,
}

/// Fixed opaque error body for upstream failures.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Query parameters for `GET /compose-parlay`.
#[derive(Debug, Deserialize)]
pub struct ParlayQuery {
    pub tier: Option<String>,
}

/// Build the backend router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/odds/:sport", get(odds))
        .route("/generate-picks/:sport", get(picks))
        .route("/compose-parlay", get(parlay))
        .with_state(state)
}

/// Liveness banner.
async fn root() -> &'static str {
    "Backend is live"
}

/// `GET /odds/:sport` — normalized per-game odds view.
async fn odds(State(state): State<AppState>, Path(sport): Path<String>) -> Response {
    match state.feed.fetch_odds(&sport, ODDS_MARKETS).await {
        Ok(games) => Json(OddsResponse {
            games: normalize(&games),
            sport,
        })
        .into_response(),
        Err(e) => {
            error!(sport, error = %e, "Odds fetch failed");
            opaque_failure("Failed to fetch odds")
        }
    }
}

/// `GET /generate-picks/:sport` — one recommended side per game.
async fn picks(State(state): State<AppState>, Path(sport): Path<String>) -> Response {
    match state.feed.fetch_odds(&sport, PICK_MARKETS).await {
        Ok(games) => Json(PicksResponse {
            picks: generate_picks(&games),
            sport,
        })
        .into_response(),
        Err(e) => {
            error!(sport, error = %e, "Pick generation failed");
            opaque_failure("Failed to generate picks")
        }
    }
}

/// `GET /compose-parlay?tier=<s>` — tier-filtered parlay off the fixed
/// candidate board. No upstream call, no failure path.
async fn parlay(Query(query): Query<ParlayQuery>) -> Json<ParlayResult> {
    let tier = query.tier.as_deref().unwrap_or(DEFAULT_TIER);
    Json(compose_parlay(tier, CANDIDATE_BOARD))
}

fn opaque_failure(message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
        .into_response()
}

//! Odds normalization.
//!
//! Reshapes the raw upstream feed into the simplified per-game view the
//! backend serves: a matchup label, the start time, and per-bookmaker
//! market listings with `title` renamed to `name` and `key` renamed to
//! `type`. Outcomes pass through verbatim — no filtering, no validation.

use serde::{Deserialize, Serialize};

use super::feed::{Game, Outcome};

/// Simplified per-game view served by `GET /odds/:sport`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedGame {
    /// `"{home_team} vs {away_team}"`.
    pub matchup: String,
    /// Start time, passed through from the feed unchanged.
    pub commence_time: String,
    /// Bookmaker listings in feed order.
    pub bookmakers: Vec<NormalizedBookmaker>,
}

/// One bookmaker's listings in the normalized view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedBookmaker {
    /// Bookmaker display name (the feed's `title`).
    pub name: String,
    /// Markets in feed order.
    pub markets: Vec<NormalizedMarket>,
}

/// One market in the normalized view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedMarket {
    /// Market type key (the feed's `key`).
    #[serde(rename = "type")]
    pub market_type: String,
    /// Outcomes, verbatim from the feed.
    pub outcomes: Vec<Outcome>,
}

/// Produce the simplified view of a feed response.
///
/// Order of games, bookmakers, and markets is preserved exactly as
/// received. Absent sub-sequences are already empty at this point
/// (the feed types default them), so there is no failure path.
pub fn normalize(games: &[Game]) -> Vec<NormalizedGame> {
    games
        .iter()
        .map(|game| NormalizedGame {
            matchup: format!("{} vs {}", game.home_team, game.away_team),
            commence_time: game.commence_time.clone(),
            bookmakers: game
                .bookmakers
                .iter()
                .map(|book| NormalizedBookmaker {
                    name: book.title.clone(),
                    markets: book
                        .markets
                        .iter()
                        .map(|market| NormalizedMarket {
                            market_type: market.key.clone(),
                            outcomes: market.outcomes.clone(),
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect()
}

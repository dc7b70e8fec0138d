//! Upstream odds-feed data model.
//!
//! Mirrors the JSON shape returned by the-odds-api.com v4 odds endpoint.
//! These types are read-only inputs to the domain: the normalizer and the
//! pick generator consume them, nothing in the crate mutates them.
//!
//! Every sub-sequence is `#[serde(default)]` — a game with no bookmakers
//! (or a bookmaker with no markets) deserializes to an empty list rather
//! than failing the whole response.

use serde::{Deserialize, Serialize};

/// Market key for outright-winner (moneyline) markets.
pub const MARKET_MONEYLINE: &str = "moneyline";

/// Market key for point-spread markets.
pub const MARKET_SPREADS: &str = "spreads";

/// A single upcoming game with per-bookmaker market listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    /// Home team name, as reported by the feed.
    pub home_team: String,
    /// Away team name.
    pub away_team: String,
    /// Scheduled start time as an ISO-8601 string.
    ///
    /// Kept as a raw `String` so the value passes through to responses
    /// byte-exact; nothing in the backend reparses timestamps.
    pub commence_time: String,
    /// Bookmakers quoting this game, in feed order.
    #[serde(default)]
    pub bookmakers: Vec<Bookmaker>,
}

/// One bookmaker's market listings for a game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bookmaker {
    /// Display name of the bookmaker.
    pub title: String,
    /// Markets quoted by this bookmaker, in feed order.
    #[serde(default)]
    pub markets: Vec<Market>,
}

/// A single market (moneyline, spreads, totals, ...) with its outcomes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Market {
    /// Market type key, e.g. `"moneyline"` or `"spreads"`.
    pub key: String,
    /// Outcomes in feed order.
    #[serde(default)]
    pub outcomes: Vec<Outcome>,
}

/// One side of a market: a team (or line label) and its price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    /// Team name or line label.
    pub name: String,
    /// Price in American odds (negative = favorite).
    pub price: i64,
    /// Spread/total line value, absent for moneyline outcomes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_deserializes_from_feed_json() {
        let json = r#"{
            "home_team": "Denver Broncos",
            "away_team": "Las Vegas Raiders",
            "commence_time": "2026-09-13T20:25:00Z",
            "bookmakers": [{
                "title": "DraftKings",
                "markets": [{
                    "key": "moneyline",
                    "outcomes": [
                        {"name": "Denver Broncos", "price": -150},
                        {"name": "Las Vegas Raiders", "price": 130}
                    ]
                }]
            }]
        }"#;

        let game: Game = serde_json::from_str(json).unwrap();
        assert_eq!(game.home_team, "Denver Broncos");
        assert_eq!(game.bookmakers.len(), 1);
        assert_eq!(game.bookmakers[0].markets[0].key, MARKET_MONEYLINE);
        assert_eq!(game.bookmakers[0].markets[0].outcomes[0].price, -150);
        assert_eq!(game.bookmakers[0].markets[0].outcomes[0].point, None);
    }

    #[test]
    fn test_missing_bookmakers_defaults_to_empty() {
        let json = r#"{
            "home_team": "A",
            "away_team": "B",
            "commence_time": "2026-01-01T00:00:00Z"
        }"#;

        let game: Game = serde_json::from_str(json).unwrap();
        assert!(game.bookmakers.is_empty());
    }

    #[test]
    fn test_outcome_point_omitted_when_absent() {
        let outcome = Outcome {
            name: "Denver Broncos".to_string(),
            price: -150,
            point: None,
        };
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(!json.contains("point"));

        let with_point = Outcome {
            name: "Denver Broncos".to_string(),
            price: -110,
            point: Some(-3.5),
        };
        let json = serde_json::to_string(&with_point).unwrap();
        assert!(json.contains("\"point\":-3.5"));
    }
}

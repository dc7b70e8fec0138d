//! Pick generation.
//!
//! Derives one recommended side per game from the first bookmaker's
//! moneyline prices, plus a qualitative confidence label. Lower American
//! odds mean the more favored side; the comparison is strict, so equal
//! prices resolve to the away team.
//!
//! Missing structures (no bookmakers, no moneyline market, no matching
//! outcome) are never errors — each absent value substitutes its
//! documented default (price 0, spread 0.0).

use serde::{Deserialize, Serialize};

use super::feed::{Game, MARKET_MONEYLINE, MARKET_SPREADS, Market};

/// Moneyline gap above which a pick is labeled `High`.
const HIGH_CONFIDENCE_GAP: i64 = 50;

/// Qualitative confidence label for a pick or parlay leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    High,
    Moderate,
}

/// A recommended side for one game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pick {
    /// `"{home_team} vs {away_team}"`.
    pub matchup: String,
    /// Chosen side with an `" ML"` suffix, e.g. `"Denver Broncos ML"`.
    pub pick: String,
    /// Home-team spread line from the first bookmaker, 0.0 if unavailable.
    pub spread: f64,
    /// `High` when the moneyline gap exceeds 50, `Moderate` otherwise.
    pub confidence: Confidence,
}

/// Derive one pick per game, preserving game order.
pub fn generate_picks(games: &[Game]) -> Vec<Pick> {
    games.iter().map(pick_for_game).collect()
}

fn pick_for_game(game: &Game) -> Pick {
    let first_book = game.bookmakers.first();
    let ml_market = first_book.and_then(|b| find_market(&b.markets, MARKET_MONEYLINE));
    let spread_market = first_book.and_then(|b| find_market(&b.markets, MARKET_SPREADS));

    let home_ml = ml_market
        .and_then(|m| outcome_price(m, &game.home_team))
        .unwrap_or(0);
    let away_ml = ml_market
        .and_then(|m| outcome_price(m, &game.away_team))
        .unwrap_or(0);
    let spread = spread_market
        .and_then(|m| outcome_point(m, &game.home_team))
        .unwrap_or(0.0);

    // Strict comparison: equal moneylines resolve to the away side.
    let pick = if home_ml < away_ml {
        format!("{} ML", game.home_team)
    } else {
        format!("{} ML", game.away_team)
    };

    let confidence = if (home_ml - away_ml).abs() > HIGH_CONFIDENCE_GAP {
        Confidence::High
    } else {
        Confidence::Moderate
    };

    Pick {
        matchup: format!("{} vs {}", game.home_team, game.away_team),
        pick,
        spread,
        confidence,
    }
}

fn find_market<'a>(markets: &'a [Market], key: &str) -> Option<&'a Market> {
    markets.iter().find(|m| m.key == key)
}

fn outcome_price(market: &Market, team: &str) -> Option<i64> {
    market.outcomes.iter().find(|o| o.name == team).map(|o| o.price)
}

fn outcome_point(market: &Market, team: &str) -> Option<f64> {
    market
        .outcomes
        .iter()
        .find(|o| o.name == team)
        .and_then(|o| o.point)
}

//! Parlay composition.
//!
//! Filters a fixed candidate board by risk tier, caps the selection at
//! four legs, and compounds the American odds into an estimated payout
//! percentage. Operates only on static input and a free-form tier
//! string, so there is no failure path.

use serde::{Deserialize, Serialize};

use super::picks::Confidence;

/// Tier used when the caller supplies none.
pub const DEFAULT_TIER: &str = "moderate";

/// Maximum number of legs in a composed parlay.
const MAX_LEGS: usize = 4;

/// Odds boundary between the safe and moderate tiers.
const SAFE_ODDS_CEILING: i64 = -110;

/// Odds boundary between the moderate and high tiers.
const HIGH_ODDS_FLOOR: i64 = 110;

/// One candidate selection on the parlay board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParlayLeg {
    /// Display label, e.g. `"Broncos ML"`.
    pub leg: &'static str,
    /// Price in American odds.
    pub odds: i64,
    /// Confidence carried for display; never used for selection.
    pub confidence: Confidence,
}

/// The fixed candidate board. Not sourced from any feed.
pub const CANDIDATE_BOARD: &[ParlayLeg] = &[
    ParlayLeg {
        leg: "Broncos ML",
        odds: -150,
        confidence: Confidence::High,
    },
    ParlayLeg {
        leg: "Raiders +3.5",
        odds: 110,
        confidence: Confidence::Moderate,
    },
    ParlayLeg {
        leg: "Wilson Over 249.5 yards",
        odds: 125,
        confidence: Confidence::High,
    },
    ParlayLeg {
        leg: "Adams Over 5.5 receptions",
        odds: 105,
        confidence: Confidence::Moderate,
    },
    ParlayLeg {
        leg: "USC -21.5",
        odds: -110,
        confidence: Confidence::High,
    },
];

/// A composed parlay served by `GET /compose-parlay`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParlayResult {
    /// The requested tier, echoed back unvalidated.
    pub tier: String,
    /// Selected leg labels, at most four, in board order.
    pub legs: Vec<String>,
    /// Compounded payout percentage, rendered as `"+<integer>"`.
    pub estimated_payout: String,
}

/// Compose a parlay from `candidates` for the requested risk tier.
///
/// An unrecognized tier keeps every leg. Selection is the first four
/// survivors in board order — no sorting, no randomization, and the
/// confidence labels play no part.
pub fn compose_parlay(tier: &str, candidates: &[ParlayLeg]) -> ParlayResult {
    let legs: Vec<&ParlayLeg> = candidates
        .iter()
        .filter(|leg| matches_tier(tier, leg.odds))
        .take(MAX_LEGS)
        .collect();

    let payout: f64 = legs
        .iter()
        .fold(1.0, |acc, leg| acc * decimal_multiplier(leg.odds));

    ParlayResult {
        tier: tier.to_string(),
        legs: legs.iter().map(|l| l.leg.to_string()).collect(),
        estimated_payout: format_payout(payout),
    }
}

fn matches_tier(tier: &str, odds: i64) -> bool {
    match tier {
        "safe" => odds < SAFE_ODDS_CEILING,
        "moderate" => (SAFE_ODDS_CEILING..=HIGH_ODDS_FLOOR).contains(&odds),
        "high" => odds > HIGH_ODDS_FLOOR,
        _ => true,
    }
}

/// Convert American odds to a decimal payout multiplier.
///
/// `+125` pays 1.25x the stake on top (multiplier 2.25); `-150` requires
/// 150 to win 100 (multiplier ~1.6667).
fn decimal_multiplier(odds: i64) -> f64 {
    if odds > 0 {
        odds as f64 / 100.0 + 1.0
    } else {
        100.0 / (odds as f64).abs() + 1.0
    }
}

/// Render the compounded multiplier as a payout percentage string.
///
/// The `+` prefix is unconditional: a sub-1.0 accumulator would still
/// render with a leading `+`. Kept as-is for parity with the serving
/// frontend, which expects this exact format.
fn format_payout(accumulator: f64) -> String {
    format!("+{}", ((accumulator - 1.0) * 100.0).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_tier_keeps_only_strong_favorites() {
        // -110 is not < -110, so only the Broncos leg survives.
        let result = compose_parlay("safe", CANDIDATE_BOARD);
        assert_eq!(result.legs, vec!["Broncos ML"]);
        assert_eq!(result.estimated_payout, "+67");
    }

    #[test]
    fn test_moderate_tier_is_inclusive_at_both_bounds() {
        // +110, +105, and -110 all sit inside [-110, 110].
        let result = compose_parlay("moderate", CANDIDATE_BOARD);
        assert_eq!(
            result.legs,
            vec!["Raiders +3.5", "Adams Over 5.5 receptions", "USC -21.5"]
        );
        // 2.10 * 2.05 * 1.9090... = 8.21863... → +722
        assert_eq!(result.estimated_payout, "+722");
    }

    #[test]
    fn test_high_tier_keeps_underdogs_only() {
        let result = compose_parlay("high", CANDIDATE_BOARD);
        assert_eq!(result.legs, vec!["Wilson Over 249.5 yards"]);
        // +125 → multiplier 2.25 → +125%
        assert_eq!(result.estimated_payout, "+125");
    }

    #[test]
    fn test_unknown_tier_keeps_all_capped_at_four() {
        let result = compose_parlay("yolo", CANDIDATE_BOARD);
        assert_eq!(result.legs.len(), 4);
        assert_eq!(result.tier, "yolo");
        assert_eq!(
            result.legs,
            vec![
                "Broncos ML",
                "Raiders +3.5",
                "Wilson Over 249.5 yards",
                "Adams Over 5.5 receptions",
            ]
        );
    }

    #[test]
    fn test_single_negative_leg_payout_worked_example() {
        // -150 → 100/150 + 1 ≈ 1.6667 → round((1.6667-1)*100) = 67.
        let legs = [ParlayLeg {
            leg: "Broncos ML",
            odds: -150,
            confidence: Confidence::High,
        }];
        let result = compose_parlay("other", &legs);
        assert_eq!(result.estimated_payout, "+67");
    }

    #[test]
    fn test_payout_compounds_in_order() {
        // 2.10 * 1.909090... = 4.009090..., minus 1 → 300.909% → "+301".
        let legs = [
            ParlayLeg {
                leg: "A",
                odds: 110,
                confidence: Confidence::Moderate,
            },
            ParlayLeg {
                leg: "B",
                odds: -110,
                confidence: Confidence::Moderate,
            },
        ];
        let result = compose_parlay("weird", &legs);
        assert_eq!(result.estimated_payout, "+301");
    }

    #[test]
    fn test_empty_selection_renders_plus_zero() {
        let result = compose_parlay("safe", &[]);
        assert!(result.legs.is_empty());
        assert_eq!(result.estimated_payout, "+0");
    }

    #[test]
    fn test_plus_prefix_is_unconditional() {
        assert_eq!(format_payout(0.5), "+-50");
        assert_eq!(format_payout(1.0), "+0");
    }

    #[test]
    fn test_selection_ignores_confidence() {
        let result = compose_parlay("moderate", CANDIDATE_BOARD);
        // Both Moderate- and High-confidence legs survive the filter.
        assert!(result.legs.contains(&"USC -21.5".to_string()));
        assert!(result.legs.contains(&"Raiders +3.5".to_string()));
    }
}

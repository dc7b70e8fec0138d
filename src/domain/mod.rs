//! Domain layer - Core odds logic and models.
//!
//! Pure data reshaping and arithmetic over the upstream feed shape.
//! No I/O happens here (hexagonal architecture inner ring); every
//! function is deterministic given its inputs and testable in isolation.

pub mod feed;
pub mod normalize;
pub mod parlay;
pub mod picks;

// Re-export core types for convenience
pub use feed::{Bookmaker, Game, Market, Outcome};
pub use normalize::{NormalizedGame, normalize};
pub use parlay::{CANDIDATE_BOARD, ParlayLeg, ParlayResult, compose_parlay};
pub use picks::{Confidence, Pick, generate_picks};

//! Statistics calculation engine.
//!
//! Pure, synchronous computation over already-fetched records:
//! - Per-rarity upgrade costs and collection progression
//! - Best-32 war deck strength estimation
//! - River race fame/repair aggregation
//!
//! Nothing here does I/O or holds state; every function can be called
//! repeatedly with the same inputs and returns identical results.

use thiserror::Error;

mod cards;
mod costs;
mod war;

pub use cards::compute_card_stats;
pub use costs::{gold_costs, remaining_cards_to_max, remaining_gold_to_max};
pub use war::{compute_war_stats, estimate_deck_strength};

/// Errors from the stats engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatsError {
    /// A card's `maxLevel` is outside {13, 11, 8, 5}. Fatal to the one
    /// report being computed; the caller decides whether to refetch.
    #[error("invalid card tier: max level {max_level} is not one of 13, 11, 8 or 5")]
    InvalidTier { max_level: u32 },
}

/// Ladder win rate as a fraction in [0, 1]. `None` before the first game,
/// so a zero denominator surfaces as "unavailable" instead of a panic.
pub fn win_rate(wins: u32, losses: u32) -> Option<f64> {
    let total = wins + losses;
    if total == 0 {
        None
    } else {
        Some(f64::from(wins) / f64::from(total))
    }
}

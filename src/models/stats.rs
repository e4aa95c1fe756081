//! Derived statistics models.
//!
//! These are the immutable reports the stats engine returns. Degenerate
//! aggregates (a mean over zero samples) are `None` rather than an error so
//! a partial report still carries every other field.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Rarity;

/// Per-rarity collection progression.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TierStats {
    /// Card copies still needed to max every card in the tier, net of
    /// copies already held. Surplus duplicates contribute negatively and
    /// are summed as-is.
    pub remaining_cards: i64,

    /// Gold needed to perform every remaining upgrade in the tier.
    pub remaining_gold: u64,

    /// One level per catalog card of this rarity, owned or not.
    pub levels: Vec<u32>,

    /// Mean level as a fraction of the tier cap, in [0, 100].
    /// `None` when the tier has no cards.
    pub progress_percent: Option<f64>,

    /// Mean level shifted onto the global 1-13 scale.
    /// `None` when the tier has no cards.
    pub average_level_normalized: Option<f64>,
}

/// How much of the catalog the player owns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionSummary {
    /// Distinct card names held at one copy or more
    pub owned_count: usize,

    /// Catalog size
    pub total_count: usize,
}

impl CollectionSummary {
    /// Owned share of the catalog, in [0, 100]. `None` for an empty catalog.
    pub fn completion_percent(&self) -> Option<f64> {
        if self.total_count == 0 {
            None
        } else {
            Some(100.0 * self.owned_count as f64 / self.total_count as f64)
        }
    }
}

/// The full card progression report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardStatsReport {
    /// Per-rarity progression, all four rarities always present
    pub tiers: BTreeMap<Rarity, TierStats>,

    pub collection: CollectionSummary,

    /// The 32 highest normalized levels among owned cards, descending.
    /// Shorter when the player owns fewer than 32 cards, never padded.
    pub best32: Vec<u32>,
}

/// One race's fame and repair contribution for the tracked player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarPointsSample {
    pub fame: u32,
    pub repair_points: u32,
}

impl WarPointsSample {
    /// Total war points. Always derived so fame and repair cannot drift.
    pub fn war_points(&self) -> u32 {
        self.fame + self.repair_points
    }
}

/// The in-progress contribution from the live race, kept separate from the
/// historical sums.
pub type CurrentWarSample = WarPointsSample;

/// War performance aggregated over the full river race log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WarReport {
    /// Races the player actually appeared in. A race without the player
    /// contributes no sample, not a zero sample.
    pub sample_count: usize,

    pub total_fame: u64,

    pub total_repair_points: u64,

    /// Mean war points per participated race. `None` with zero samples.
    pub average_war_points: Option<f64>,

    /// The live race contribution, absent when the player is not in it.
    pub current: Option<CurrentWarSample>,
}

impl WarReport {
    /// Total war points over the log. Derived from the two sums.
    pub fn total_war_points(&self) -> u64 {
        self.total_fame + self.total_repair_points
    }
}

/// War-deck strength estimate from the best-32 card levels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckEstimate {
    /// Sum of the best-32 normalized levels
    pub base_fight_points: u64,

    /// Daily war points floor (every battle lost)
    pub daily_min: u64,

    /// Daily war points ceiling (every battle won)
    pub daily_max: u64,

    /// Weekly floor
    pub weekly_min: u64,

    /// Weekly ceiling
    pub weekly_max: u64,

    /// Win-rate-weighted daily estimate. `None` without a win rate.
    pub estimated_daily: Option<u64>,

    /// Seven days of the daily estimate. `None` without a win rate.
    pub estimated_weekly: Option<u64>,
}

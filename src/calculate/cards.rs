//! Card collection progression.

use std::collections::{BTreeMap, HashSet};

use crate::models::{
    CardStatsReport, CatalogCard, CollectionSummary, PlayerCard, Rarity, TierStats,
};

use super::StatsError;

/// How many normalized levels feed the war-deck estimate.
const BEST_DECK_SIZE: usize = 32;

/// Compute per-rarity progression, collection completion, and the best-32
/// normalized levels from a player's collection and the full card catalog.
///
/// Catalog cards the player does not own are folded in at level 0 with no
/// copies, so they count toward tier populations and drag the tier means
/// down. Any card with a `max_level` outside {13, 11, 8, 5} fails the whole
/// report with [`StatsError::InvalidTier`].
pub fn compute_card_stats(
    player_cards: &[PlayerCard],
    catalog: &[CatalogCard],
) -> Result<CardStatsReport, StatsError> {
    let mut tiers: BTreeMap<Rarity, TierStats> = Rarity::ALL
        .into_iter()
        .map(|rarity| (rarity, TierStats::default()))
        .collect();

    let mut collected: HashSet<&str> = HashSet::new();
    let mut normalized: Vec<u32> = Vec::with_capacity(player_cards.len());

    for card in player_cards {
        let rarity = rarity_of(card.max_level)?;
        collected.insert(card.name.as_str());

        let tier = tiers.entry(rarity).or_default();
        tier.remaining_cards += super::remaining_cards_to_max(card.level, rarity, card.count);
        tier.remaining_gold += super::remaining_gold_to_max(card.level, rarity);
        tier.levels.push(card.level);

        normalized.push(card.level + rarity.level_offset());
    }

    for card in catalog {
        if collected.contains(card.name.as_str()) {
            continue;
        }
        let rarity = rarity_of(card.max_level)?;

        let tier = tiers.entry(rarity).or_default();
        tier.remaining_cards += super::remaining_cards_to_max(0, rarity, 0);
        tier.remaining_gold += super::remaining_gold_to_max(0, rarity);
        tier.levels.push(0);
    }

    for (rarity, tier) in tiers.iter_mut() {
        if let Some(mean) = mean(&tier.levels) {
            tier.progress_percent = Some(mean * 100.0 / f64::from(rarity.max_level()));
            tier.average_level_normalized = Some(mean + f64::from(rarity.level_offset()));
        }
    }

    normalized.sort_unstable_by(|a, b| b.cmp(a));
    normalized.truncate(BEST_DECK_SIZE);

    Ok(CardStatsReport {
        tiers,
        collection: CollectionSummary {
            owned_count: collected.len(),
            total_count: catalog.len(),
        },
        best32: normalized,
    })
}

fn rarity_of(max_level: u32) -> Result<Rarity, StatsError> {
    Rarity::from_max_level(max_level).ok_or(StatsError::InvalidTier { max_level })
}

fn mean(levels: &[u32]) -> Option<f64> {
    if levels.is_empty() {
        return None;
    }
    let sum: u64 = levels.iter().map(|&l| u64::from(l)).sum();
    Some(sum as f64 / levels.len() as f64)
}

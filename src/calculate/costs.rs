//! Upgrade cost lookup tables.
//!
//! Both tables live on the global 1-13 level scale. The card table is
//! indexed by the level being left (entry 0 = copies for the 0→1 step);
//! the gold tables run from the most expensive upgrade at the cap downward,
//! so a card's remaining gold is the sum of the first `max_level - level`
//! entries. The two tables are deliberately sliced from opposite ends;
//! changing either slice changes every reported total.

use crate::models::Rarity;

/// Copies needed per upgrade, indexed by the level being left.
const CARD_COST: [u32; 13] = [
    1, 2, 4, 10, 20, 50, 100, 200, 400, 800, 1000, 2000, 5000,
];

/// Gold per upgrade from the cap downward, one table per rarity. Each table
/// holds the rarity's `max_level - 1` upgrades; the cheapest (last) entry is
/// rarity-specific.
const GOLD_COST_COMMON: [u32; 12] = [
    100_000, 50_000, 20_000, 8_000, 4_000, 2_000, 1_000, 400, 150, 50, 20, 5,
];
const GOLD_COST_RARE: [u32; 10] = [
    100_000, 50_000, 20_000, 8_000, 4_000, 2_000, 1_000, 400, 150, 50,
];
const GOLD_COST_EPIC: [u32; 7] = [100_000, 50_000, 20_000, 8_000, 4_000, 2_000, 400];
const GOLD_COST_LEGENDARY: [u32; 4] = [100_000, 50_000, 20_000, 5_000];

/// The gold cost curve for a rarity, most expensive upgrade first.
pub fn gold_costs(rarity: Rarity) -> &'static [u32] {
    match rarity {
        Rarity::Common => &GOLD_COST_COMMON,
        Rarity::Rare => &GOLD_COST_RARE,
        Rarity::Epic => &GOLD_COST_EPIC,
        Rarity::Legendary => &GOLD_COST_LEGENDARY,
    }
}

/// Card copies still needed to take a card from `level` to its rarity cap,
/// net of the `count` copies already held.
///
/// A maxed card needs nothing regardless of held copies. Below the cap the
/// subtraction is raw: holding more duplicates than the remaining upgrades
/// consume yields a negative result, which tier totals sum as-is.
pub fn remaining_cards_to_max(level: u32, rarity: Rarity, count: u32) -> i64 {
    let max_level = rarity.max_level();
    if level >= max_level {
        return 0;
    }

    let needed: u32 = CARD_COST[level as usize..max_level as usize].iter().sum();
    i64::from(needed) - i64::from(count)
}

/// Gold still needed to take a card from `level` to its rarity cap.
///
/// Sums the first `max_level - level` entries of the rarity's cost curve.
/// The sum saturates at the table length, so an unowned card (level 0)
/// costs the same gold as a level-1 card: the first copy is gold-free.
pub fn remaining_gold_to_max(level: u32, rarity: Rarity) -> u64 {
    let max_level = rarity.max_level();
    if level >= max_level {
        return 0;
    }

    let upgrades = (max_level - level) as usize;
    gold_costs(rarity)
        .iter()
        .take(upgrades)
        .map(|&g| u64::from(g))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maxed_card_needs_nothing() {
        for rarity in Rarity::ALL {
            let cap = rarity.max_level();
            assert_eq!(remaining_cards_to_max(cap, rarity, 0), 0);
            assert_eq!(remaining_cards_to_max(cap, rarity, 4000), 0);
            assert_eq!(remaining_gold_to_max(cap, rarity), 0);
        }
    }

    #[test]
    fn test_remaining_cards_common_level_10() {
        // 1000 + 2000 + 5000 for the three remaining upgrades
        assert_eq!(remaining_cards_to_max(10, Rarity::Common, 0), 8000);
    }

    #[test]
    fn test_remaining_cards_counts_held_copies() {
        assert_eq!(remaining_cards_to_max(10, Rarity::Common, 800), 7200);
    }

    #[test]
    fn test_remaining_cards_surplus_goes_negative() {
        // Legendary at level 4 needs 20 copies but holds 25
        assert_eq!(remaining_cards_to_max(4, Rarity::Legendary, 25), -5);
    }

    #[test]
    fn test_remaining_cards_unowned_legendary() {
        // 1 + 2 + 4 + 10 + 20
        assert_eq!(remaining_cards_to_max(0, Rarity::Legendary, 0), 37);
    }

    #[test]
    fn test_remaining_gold_common_from_zero() {
        assert_eq!(remaining_gold_to_max(0, Rarity::Common), 185_625);
    }

    #[test]
    fn test_remaining_gold_legendary_from_zero() {
        // Saturates at the four legendary upgrades
        assert_eq!(remaining_gold_to_max(0, Rarity::Legendary), 175_000);
    }

    #[test]
    fn test_remaining_gold_level_zero_matches_level_one() {
        for rarity in Rarity::ALL {
            assert_eq!(
                remaining_gold_to_max(0, rarity),
                remaining_gold_to_max(1, rarity)
            );
        }
    }

    #[test]
    fn test_remaining_gold_epic_terminal_upgrade() {
        // The last epic upgrade table entry is 400, not the common 1000
        assert_eq!(remaining_gold_to_max(7, Rarity::Epic), 100_000);
        assert_eq!(
            remaining_gold_to_max(1, Rarity::Epic),
            100_000 + 50_000 + 20_000 + 8_000 + 4_000 + 2_000 + 400
        );
    }

    #[test]
    fn test_remaining_gold_sums_from_top_of_curve() {
        // One upgrade left always costs the 100k cap step
        for rarity in Rarity::ALL {
            assert_eq!(remaining_gold_to_max(rarity.max_level() - 1, rarity), 100_000);
        }
    }

    #[test]
    fn test_gold_table_lengths_match_upgrade_counts() {
        for rarity in Rarity::ALL {
            assert_eq!(gold_costs(rarity).len(), (rarity.max_level() - 1) as usize);
        }
    }
}

//! War performance aggregation.

use crate::models::{CurrentRiverRace, DeckEstimate, RiverRaceLogEntry, WarPointsSample, WarReport};

/// Days in a river race week.
const WAR_DAYS_PER_WEEK: u64 = 7;

/// Aggregate a player's war points over a clan's river race log, plus the
/// in-progress contribution from the live race.
///
/// Only standings of the tracked clan are scanned; a race the player did not
/// fight in contributes no sample, so the average is over participated races
/// only. Tags are compared ignoring the `#` prefix and ASCII case.
pub fn compute_war_stats(
    player_tag: &str,
    clan_tag: &str,
    war_log: &[RiverRaceLogEntry],
    current_race: Option<&CurrentRiverRace>,
) -> WarReport {
    let mut samples: Vec<WarPointsSample> = Vec::new();

    for entry in war_log {
        for standing in &entry.standings {
            if !tags_equal(&standing.clan.tag, clan_tag) {
                continue;
            }
            for participant in &standing.clan.participants {
                if tags_equal(&participant.tag, player_tag) {
                    samples.push(WarPointsSample {
                        fame: participant.fame,
                        repair_points: participant.repair_points,
                    });
                }
            }
        }
    }

    let total_fame: u64 = samples.iter().map(|s| u64::from(s.fame)).sum();
    let total_repair_points: u64 = samples.iter().map(|s| u64::from(s.repair_points)).sum();

    let average_war_points = if samples.is_empty() {
        None
    } else {
        Some((total_fame + total_repair_points) as f64 / samples.len() as f64)
    };

    let current = current_race.and_then(|race| {
        race.clan
            .participants
            .iter()
            .find(|p| tags_equal(&p.tag, player_tag))
            .map(|p| WarPointsSample {
                fame: p.fame,
                repair_points: p.repair_points,
            })
    });

    WarReport {
        sample_count: samples.len(),
        total_fame,
        total_repair_points,
        average_war_points,
        current,
    }
}

/// Estimate daily and weekly war points from the best-32 normalized card
/// levels and a ladder win rate.
///
/// A won battle is worth twice the base fight points, a lost one the base,
/// so the daily estimate interpolates between `base` and `2 * base` by the
/// win rate. Without a win rate only the bounds are filled in.
pub fn estimate_deck_strength(best32: &[u32], win_rate: Option<f64>) -> DeckEstimate {
    let base: u64 = best32.iter().map(|&l| u64::from(l)).sum();

    let estimated_daily = win_rate.map(|rate| {
        let daily = rate * (2 * base) as f64 + (1.0 - rate) * base as f64;
        daily.round() as u64
    });

    DeckEstimate {
        base_fight_points: base,
        daily_min: base,
        daily_max: 2 * base,
        weekly_min: WAR_DAYS_PER_WEEK * base,
        weekly_max: WAR_DAYS_PER_WEEK * 2 * base,
        estimated_daily,
        estimated_weekly: estimated_daily.map(|daily| WAR_DAYS_PER_WEEK * daily),
    }
}

/// Compare player/clan tags ignoring the leading `#` and ASCII case.
fn tags_equal(a: &str, b: &str) -> bool {
    a.trim_start_matches('#')
        .eq_ignore_ascii_case(b.trim_start_matches('#'))
}

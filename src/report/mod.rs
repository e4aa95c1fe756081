//! Text rendering of reports.
//!
//! Every numeric that can be degenerate (zero games, empty tier, zero war
//! samples) arrives as an `Option` and renders as the `n/a` sentinel; the
//! rest of the report always renders.

use std::fmt::Write;

use crate::calculate::win_rate;
use crate::models::{
    CardStatsReport, DeckEstimate, LeagueStatistics, PlayerProfile, Rarity, SeasonResult,
    UpcomingChest, WarReport,
};

/// Display marker for values that are not available.
const UNAVAILABLE: &str = "n/a";

fn fmt_percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}%", v),
        None => UNAVAILABLE.to_string(),
    }
}

fn fmt_float(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => UNAVAILABLE.to_string(),
    }
}

fn fmt_count(value: Option<u32>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => UNAVAILABLE.to_string(),
    }
}

fn fmt_u64(value: Option<u64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => UNAVAILABLE.to_string(),
    }
}

fn fmt_season(season: Option<&SeasonResult>) -> String {
    match season {
        Some(s) => format!(
            "trophies {}, best {}",
            fmt_count(s.trophies),
            fmt_count(s.best_trophies)
        ),
        None => UNAVAILABLE.to_string(),
    }
}

/// Render a player profile summary.
pub fn render_player(profile: &PlayerProfile) -> String {
    let mut out = String::new();

    writeln!(out, "{} ({})", profile.name, profile.tag).ok();
    let arena = profile
        .arena
        .as_ref()
        .map_or(UNAVAILABLE.to_string(), |a| a.name.clone());
    writeln!(out, "Arena: {}", arena).ok();
    writeln!(
        out,
        "Winrate: {}",
        fmt_percent(win_rate(profile.wins, profile.losses).map(|r| 100.0 * r))
    )
    .ok();
    writeln!(out, "War day wins: {}", fmt_count(profile.war_day_wins)).ok();
    writeln!(
        out,
        "Challenge max wins: {}",
        fmt_count(profile.challenge_max_wins)
    )
    .ok();

    match &profile.clan {
        Some(clan) => {
            let role = profile.role.as_deref().unwrap_or("member");
            writeln!(out, "Clan: {} in {}", role, clan.name).ok();
        }
        None => {
            writeln!(out, "Clan: none").ok();
        }
    }
    writeln!(out, "Donations given: {}", fmt_count(profile.donations)).ok();
    writeln!(
        out,
        "Donations received: {}",
        fmt_count(profile.donations_received)
    )
    .ok();

    let league = profile.league_statistics.as_ref();
    let default_league = LeagueStatistics::default();
    let league = league.unwrap_or(&default_league);
    writeln!(
        out,
        "Current season: {}",
        fmt_season(league.current_season.as_ref())
    )
    .ok();
    writeln!(
        out,
        "Previous season: {}",
        fmt_season(league.previous_season.as_ref())
    )
    .ok();
    writeln!(
        out,
        "Best season: {}",
        fmt_season(league.best_season.as_ref())
    )
    .ok();

    out
}

/// Render the card progression report as a per-rarity table.
pub fn render_card_report(report: &CardStatsReport) -> String {
    let mut out = String::new();

    writeln!(
        out,
        "Collection: {}/{} cards ({})",
        report.collection.owned_count,
        report.collection.total_count,
        fmt_percent(report.collection.completion_percent())
    )
    .ok();
    writeln!(out).ok();
    writeln!(
        out,
        "{:<10} {:>10} {:>12} {:>10} {:>10}",
        "Rarity", "Cards", "Gold", "Progress", "Avg lvl"
    )
    .ok();

    for rarity in Rarity::ALL {
        if let Some(tier) = report.tiers.get(&rarity) {
            writeln!(
                out,
                "{:<10} {:>10} {:>12} {:>10} {:>10}",
                rarity.to_string(),
                tier.remaining_cards,
                tier.remaining_gold,
                fmt_percent(tier.progress_percent),
                fmt_float(tier.average_level_normalized)
            )
            .ok();
        }
    }

    writeln!(out).ok();
    let deck_total: u64 = report.best32.iter().map(|&l| u64::from(l)).sum();
    writeln!(
        out,
        "Best {} card levels (normalized): {} total",
        report.best32.len(),
        deck_total
    )
    .ok();

    out
}

/// Render the war report and the deck-strength estimate.
pub fn render_war_report(report: &WarReport, estimate: &DeckEstimate) -> String {
    let mut out = String::new();

    writeln!(out, "Races fought: {}", report.sample_count).ok();
    writeln!(out, "Total fame: {}", report.total_fame).ok();
    writeln!(out, "Total repair points: {}", report.total_repair_points).ok();
    writeln!(out, "Total war points: {}", report.total_war_points()).ok();
    writeln!(
        out,
        "Average war points: {}",
        fmt_float(report.average_war_points)
    )
    .ok();

    match &report.current {
        Some(sample) => {
            writeln!(
                out,
                "Current race: {} fame + {} repair = {} points",
                sample.fame,
                sample.repair_points,
                sample.war_points()
            )
            .ok();
        }
        None => {
            writeln!(out, "Current race: {}", UNAVAILABLE).ok();
        }
    }

    writeln!(out).ok();
    writeln!(out, "Deck strength: {} fight points", estimate.base_fight_points).ok();
    writeln!(
        out,
        "Daily estimate: {} (range {}-{})",
        fmt_u64(estimate.estimated_daily),
        estimate.daily_min,
        estimate.daily_max
    )
    .ok();
    writeln!(
        out,
        "Weekly estimate: {} (range {}-{})",
        fmt_u64(estimate.estimated_weekly),
        estimate.weekly_min,
        estimate.weekly_max
    )
    .ok();

    out
}

/// Render the upcoming chest cycle.
pub fn render_chests(chests: &[UpcomingChest]) -> String {
    let mut out = String::new();

    if chests.is_empty() {
        writeln!(out, "No upcoming chests").ok();
        return out;
    }

    for chest in chests {
        writeln!(out, "+{:<3} {}", chest.index, chest.name).ok();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculate::{compute_card_stats, estimate_deck_strength};
    use crate::models::{CatalogCard, PlayerCard, WarPointsSample};

    fn minimal_profile() -> PlayerProfile {
        serde_json::from_str(r#"{"tag": "#2PP", "name": "Morten", "wins": 0, "losses": 0}"#)
            .unwrap()
    }

    #[test]
    fn test_render_player_sentinels_for_fresh_account() {
        let text = render_player(&minimal_profile());

        assert!(text.contains("Morten (#2PP)"));
        assert!(text.contains("Winrate: n/a"));
        assert!(text.contains("Clan: none"));
        assert!(text.contains("Previous season: n/a"));
    }

    #[test]
    fn test_render_player_winrate() {
        let mut profile = minimal_profile();
        profile.wins = 3;
        profile.losses = 1;

        let text = render_player(&profile);
        assert!(text.contains("Winrate: 75.00%"));
    }

    #[test]
    fn test_render_card_report() {
        let cards = vec![PlayerCard {
            name: "Sparky".to_string(),
            level: 1,
            max_level: 5,
            count: 0,
        }];
        let catalog = vec![CatalogCard {
            name: "Sparky".to_string(),
            max_level: 5,
        }];
        let report = compute_card_stats(&cards, &catalog).unwrap();

        let text = render_card_report(&report);
        assert!(text.contains("Collection: 1/1 cards (100.00%)"));
        assert!(text.contains("Legendary"));
        assert!(text.contains("175000"));
        // Common tier is empty, so its aggregates are sentinels
        assert!(text.contains("n/a"));
    }

    #[test]
    fn test_render_war_report_without_samples() {
        let report = WarReport::default();
        let estimate = estimate_deck_strength(&[], None);

        let text = render_war_report(&report, &estimate);
        assert!(text.contains("Races fought: 0"));
        assert!(text.contains("Average war points: n/a"));
        assert!(text.contains("Current race: n/a"));
        assert!(text.contains("Daily estimate: n/a (range 0-0)"));
    }

    #[test]
    fn test_render_war_report_with_current_race() {
        let report = WarReport {
            sample_count: 1,
            total_fame: 1000,
            total_repair_points: 200,
            average_war_points: Some(1200.0),
            current: Some(WarPointsSample {
                fame: 700,
                repair_points: 40,
            }),
        };
        let estimate = estimate_deck_strength(&[10, 10], Some(0.5));

        let text = render_war_report(&report, &estimate);
        assert!(text.contains("Total war points: 1200"));
        assert!(text.contains("Current race: 700 fame + 40 repair = 740 points"));
        assert!(text.contains("Daily estimate: 30 (range 20-40)"));
        assert!(text.contains("Weekly estimate: 210 (range 140-280)"));
    }

    #[test]
    fn test_render_chests() {
        let chests = vec![
            UpcomingChest {
                index: 0,
                name: "Silver Chest".to_string(),
            },
            UpcomingChest {
                index: 8,
                name: "Magical Chest".to_string(),
            },
        ];

        let text = render_chests(&chests);
        assert!(text.contains("+0   Silver Chest"));
        assert!(text.contains("+8   Magical Chest"));
    }

    #[test]
    fn test_render_chests_empty() {
        assert!(render_chests(&[]).contains("No upcoming chests"));
    }
}

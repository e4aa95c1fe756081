//! Player profile models from the players endpoint.
//!
//! Fields that represent not-yet-unlocked game features (league statistics,
//! clan membership, a previous season) are optional on the wire and stay
//! optional here so a partial profile still deserializes.

use serde::{Deserialize, Serialize};

use super::PlayerCard;

/// A player's arena.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Arena {
    pub name: String,
}

/// The clan a player belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerClan {
    pub tag: String,
    pub name: String,
}

/// Trophy results for a single ladder season.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonResult {
    #[serde(default)]
    pub trophies: Option<u32>,

    #[serde(default)]
    pub best_trophies: Option<u32>,
}

/// Ladder season statistics. Any season may be absent for a new player.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueStatistics {
    #[serde(default)]
    pub current_season: Option<SeasonResult>,

    #[serde(default)]
    pub previous_season: Option<SeasonResult>,

    #[serde(default)]
    pub best_season: Option<SeasonResult>,
}

/// A player record from `/players/{tag}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    /// Player tag (with leading `#`)
    pub tag: String,

    /// Display name
    pub name: String,

    /// Ladder wins
    #[serde(default)]
    pub wins: u32,

    /// Ladder losses
    #[serde(default)]
    pub losses: u32,

    /// Current trophies
    #[serde(default)]
    pub trophies: Option<u32>,

    /// War day wins
    #[serde(default)]
    pub war_day_wins: Option<u32>,

    /// Best challenge run
    #[serde(default)]
    pub challenge_max_wins: Option<u32>,

    /// Role within the clan (member, elder, coLeader, leader)
    #[serde(default)]
    pub role: Option<String>,

    /// Cards donated this week
    #[serde(default)]
    pub donations: Option<u32>,

    /// Cards received this week
    #[serde(default)]
    pub donations_received: Option<u32>,

    /// Current arena
    #[serde(default)]
    pub arena: Option<Arena>,

    /// Clan membership, absent for clanless players
    #[serde(default)]
    pub clan: Option<PlayerClan>,

    /// Ladder season history, absent below the league arenas
    #[serde(default)]
    pub league_statistics: Option<LeagueStatistics>,

    /// The player's card collection
    #[serde(default)]
    pub cards: Vec<PlayerCard>,
}

/// An upcoming chest from `/players/{tag}/upcomingchests`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingChest {
    /// Distance from the front of the cycle (0 = next chest)
    pub index: u32,

    /// Chest name
    pub name: String,
}

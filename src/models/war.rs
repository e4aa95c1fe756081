//! River race (clan war) models.
//!
//! Covers both the historical `/clans/{tag}/riverracelog` entries and the
//! live `/clans/{tag}/currentriverrace` record. The log nests participants
//! two levels deep: entry → standings → clan → participants.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// A clan member's contribution to one river race.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceParticipant {
    /// Player tag (with leading `#`)
    pub tag: String,

    /// Player name
    #[serde(default)]
    pub name: Option<String>,

    /// Fame points earned
    #[serde(default)]
    pub fame: u32,

    /// Boat repair points earned
    #[serde(default)]
    pub repair_points: u32,

    /// Boat attacks made
    #[serde(default)]
    pub boat_attacks: Option<u32>,

    /// War decks used
    #[serde(default)]
    pub decks_used: Option<u32>,
}

impl RaceParticipant {
    /// Total war points. Always derived so fame and repair cannot drift.
    pub fn war_points(&self) -> u32 {
        self.fame + self.repair_points
    }
}

/// A clan's state within a race.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceClan {
    /// Clan tag (with leading `#`)
    pub tag: String,

    /// Clan name
    #[serde(default)]
    pub name: Option<String>,

    /// Clan-wide fame
    #[serde(default)]
    pub fame: Option<u32>,

    /// Clan-wide repair points
    #[serde(default)]
    pub repair_points: Option<u32>,

    /// Per-member contributions
    #[serde(default)]
    pub participants: Vec<RaceParticipant>,
}

/// One clan's final standing in a finished race.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceStanding {
    /// Finishing position within the race
    #[serde(default)]
    pub rank: Option<u32>,

    /// Trophy change applied at race end
    #[serde(default)]
    pub trophy_change: Option<i32>,

    pub clan: RaceClan,
}

/// One finished race from the river race log.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiverRaceLogEntry {
    #[serde(default)]
    pub season_id: Option<u32>,

    #[serde(default)]
    pub section_index: Option<u32>,

    /// Race end timestamp in the API's compact format,
    /// e.g. `20210425T070000.000Z`
    #[serde(default)]
    pub created_date: Option<String>,

    #[serde(default)]
    pub standings: Vec<RaceStanding>,
}

impl RiverRaceLogEntry {
    /// Parse `created_date` into a UTC timestamp.
    pub fn parsed_created_date(&self) -> Option<DateTime<Utc>> {
        self.created_date.as_ref().and_then(|s| {
            NaiveDateTime::parse_from_str(s, "%Y%m%dT%H%M%S%.3fZ")
                .ok()
                .map(|dt| dt.and_utc())
        })
    }
}

/// The live race from `/clans/{tag}/currentriverrace`.
///
/// `clan` is the queried clan; `clans` lists every clan in the race and is
/// only needed for cross-clan views.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentRiverRace {
    pub clan: RaceClan,

    #[serde(default)]
    pub clans: Vec<RaceClan>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_race_participant_war_points() {
        let p = RaceParticipant {
            tag: "#2PP".to_string(),
            name: Some("Morten".to_string()),
            fame: 1600,
            repair_points: 120,
            boat_attacks: Some(2),
            decks_used: Some(14),
        };

        assert_eq!(p.war_points(), 1720);
    }

    #[test]
    fn test_race_log_entry_deserialize() {
        let json = r#"{
            "seasonId": 71,
            "sectionIndex": 2,
            "createdDate": "20210425T070000.000Z",
            "standings": [
                {
                    "rank": 1,
                    "trophyChange": 180,
                    "clan": {
                        "tag": "#9VUPUQJP",
                        "name": "Nordic Kings",
                        "fame": 45000,
                        "repairPoints": 1200,
                        "participants": [
                            {"tag": "#2PP", "name": "Morten", "fame": 1600, "repairPoints": 120}
                        ]
                    }
                }
            ]
        }"#;

        let entry: RiverRaceLogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.season_id, Some(71));
        assert_eq!(entry.standings.len(), 1);

        let clan = &entry.standings[0].clan;
        assert_eq!(clan.tag, "#9VUPUQJP");
        assert_eq!(clan.participants[0].war_points(), 1720);
    }

    #[test]
    fn test_parsed_created_date() {
        let entry = RiverRaceLogEntry {
            season_id: None,
            section_index: None,
            created_date: Some("20210425T070000.000Z".to_string()),
            standings: Vec::new(),
        };

        let parsed = entry.parsed_created_date().unwrap();
        assert_eq!(parsed.to_rfc3339(), "2021-04-25T07:00:00+00:00");
    }

    #[test]
    fn test_parsed_created_date_garbage() {
        let entry = RiverRaceLogEntry {
            season_id: None,
            section_index: None,
            created_date: Some("not-a-date".to_string()),
            standings: Vec::new(),
        };

        assert!(entry.parsed_created_date().is_none());
    }

    #[test]
    fn test_current_river_race_deserialize() {
        let json = r#"{
            "clan": {
                "tag": "#9VUPUQJP",
                "name": "Nordic Kings",
                "participants": [
                    {"tag": "#2PP", "fame": 900, "repairPoints": 0}
                ]
            },
            "clans": [
                {"tag": "#9VUPUQJP", "name": "Nordic Kings"},
                {"tag": "#AAAA", "name": "Rivals"}
            ]
        }"#;

        let race: CurrentRiverRace = serde_json::from_str(json).unwrap();
        assert_eq!(race.clan.participants.len(), 1);
        assert_eq!(race.clans.len(), 2);
    }
}

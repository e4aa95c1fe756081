//! Card and rarity models.

use serde::{Deserialize, Serialize};

/// The global level scale: the cap for Common cards, which every other
/// rarity's levels are normalized onto for cross-rarity comparison.
pub const GLOBAL_MAX_LEVEL: u32 = 13;

/// Card rarity, identified in API payloads by the card's `maxLevel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// All rarities, in display order.
    pub const ALL: [Rarity; 4] = [Rarity::Common, Rarity::Rare, Rarity::Epic, Rarity::Legendary];

    /// The level cap for this rarity.
    pub fn max_level(self) -> u32 {
        match self {
            Rarity::Common => 13,
            Rarity::Rare => 11,
            Rarity::Epic => 8,
            Rarity::Legendary => 5,
        }
    }

    /// Resolve a rarity from a card's `maxLevel`. Returns `None` for any
    /// value outside {13, 11, 8, 5}.
    pub fn from_max_level(max_level: u32) -> Option<Self> {
        match max_level {
            13 => Some(Rarity::Common),
            11 => Some(Rarity::Rare),
            8 => Some(Rarity::Epic),
            5 => Some(Rarity::Legendary),
            _ => None,
        }
    }

    /// Offset that shifts this rarity's levels onto the global 1-13 scale.
    pub fn level_offset(self) -> u32 {
        GLOBAL_MAX_LEVEL - self.max_level()
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rarity::Common => write!(f, "Common"),
            Rarity::Rare => write!(f, "Rare"),
            Rarity::Epic => write!(f, "Epic"),
            Rarity::Legendary => write!(f, "Legendary"),
        }
    }
}

/// A card in a player's collection, as returned by the players endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerCard {
    /// Card name, unique within a collection
    pub name: String,

    /// Current upgrade level (0 = unowned, synthesized by the engine)
    pub level: u32,

    /// Level cap, one of {13, 11, 8, 5}
    pub max_level: u32,

    /// Duplicate copies held at `level`
    pub count: u32,
}

/// A card from the full catalog, regardless of ownership.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogCard {
    /// Card name
    pub name: String,

    /// Level cap, one of {13, 11, 8, 5}
    pub max_level: u32,
}

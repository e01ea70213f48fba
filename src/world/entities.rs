//! Entity types for the six queryable domains.
//!
//! These are plain serde structs mirroring what a campaign snapshot file
//! contains. The query engine only ever sees clones of them, never live
//! host state.

use serde::{Deserialize, Serialize};

/// What a hero does for a living.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Occupation {
    /// Landed noble, commands parties and holds fiefs.
    Lord,
    /// Hireable companion without a noble clan.
    Wanderer,
    /// Settlement notable (merchant, headman, gang leader).
    Notable,
}

impl Occupation {
    /// Lowercase label for row formatting.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Lord => "lord",
            Self::Wanderer => "wanderer",
            Self::Notable => "notable",
        }
    }
}

/// A named character in the campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub id: String,
    pub name: String,
    pub occupation: Occupation,
    pub age: f64,
    pub level: u32,
    pub gold: i64,
    /// Culture id (e.g. "empire").
    pub culture: String,
    /// Clan id, if the hero belongs to one.
    #[serde(default)]
    pub clan: Option<String>,
    pub female: bool,
    #[serde(default = "default_true")]
    pub alive: bool,
    #[serde(default)]
    pub clan_leader: bool,
    #[serde(default)]
    pub kingdom_ruler: bool,
}

/// A clan: a family of heroes holding parties and fiefs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clan {
    pub id: String,
    pub name: String,
    pub tier: u8,
    pub renown: f64,
    pub gold: i64,
    pub strength: f64,
    pub culture: String,
    #[serde(default)]
    pub leader: Option<String>,
    /// Kingdom id, if sworn to one.
    #[serde(default)]
    pub kingdom: Option<String>,
    #[serde(default)]
    pub minor: bool,
    #[serde(default)]
    pub mercenary: bool,
    #[serde(default)]
    pub eliminated: bool,
    #[serde(default)]
    pub player: bool,
}

impl Clan {
    /// A noble clan is a full faction member, neither minor nor mercenary.
    pub fn is_noble(&self) -> bool {
        !self.minor && !self.mercenary
    }
}

/// A kingdom: the ruling faction a set of clans is sworn to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kingdom {
    pub id: String,
    pub name: String,
    pub culture: String,
    #[serde(default)]
    pub ruler: Option<String>,
    pub strength: f64,
    pub clan_count: u32,
    pub settlement_count: u32,
    /// Number of wars currently being fought.
    #[serde(default)]
    pub wars: u32,
    #[serde(default)]
    pub eliminated: bool,
    #[serde(default)]
    pub player: bool,
}

/// Broad equipment category of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemClass {
    OneHanded,
    TwoHanded,
    Polearm,
    Bow,
    Crossbow,
    Thrown,
    BodyArmor,
    HeadArmor,
    LegArmor,
    Mount,
    Food,
    TradeGood,
}

impl ItemClass {
    /// Lowercase label for row formatting and sorting.
    pub fn label(&self) -> &'static str {
        match self {
            Self::OneHanded => "one_handed",
            Self::TwoHanded => "two_handed",
            Self::Polearm => "polearm",
            Self::Bow => "bow",
            Self::Crossbow => "crossbow",
            Self::Thrown => "thrown",
            Self::BodyArmor => "body_armor",
            Self::HeadArmor => "head_armor",
            Self::LegArmor => "leg_armor",
            Self::Mount => "mount",
            Self::Food => "food",
            Self::TradeGood => "trade_good",
        }
    }

    /// Anything that goes in a weapon slot.
    pub fn is_weapon(&self) -> bool {
        matches!(
            self,
            Self::OneHanded
                | Self::TwoHanded
                | Self::Polearm
                | Self::Bow
                | Self::Crossbow
                | Self::Thrown
        )
    }

    pub fn is_armor(&self) -> bool {
        matches!(self, Self::BodyArmor | Self::HeadArmor | Self::LegArmor)
    }

    pub fn is_ranged(&self) -> bool {
        matches!(self, Self::Bow | Self::Crossbow | Self::Thrown)
    }
}

/// An equippable or tradeable item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub class: ItemClass,
    /// Quality tier, 0 through 6.
    pub tier: u8,
    pub value: i64,
    pub weight: f64,
    /// True when the item may be worn in civilian loadouts.
    #[serde(default)]
    pub civilian: bool,
}

/// Kind of settlement on the campaign map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettlementKind {
    Town,
    Castle,
    Village,
    Hideout,
}

impl SettlementKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Town => "town",
            Self::Castle => "castle",
            Self::Village => "village",
            Self::Hideout => "hideout",
        }
    }
}

/// A fixed location on the campaign map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    pub id: String,
    pub name: String,
    pub kind: SettlementKind,
    pub culture: String,
    /// Owning clan id, if owned.
    #[serde(default)]
    pub owner: Option<String>,
    pub prosperity: f64,
    pub militia: f64,
    #[serde(default)]
    pub player_owned: bool,
    #[serde(default)]
    pub besieged: bool,
    #[serde(default)]
    pub raided: bool,
}

/// A culture entities can belong to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Culture {
    pub id: String,
    pub name: String,
    /// True for the main playable cultures (as opposed to bandit ones).
    #[serde(default)]
    pub main_culture: bool,
    #[serde(default)]
    pub bandit: bool,
}

fn default_true() -> bool {
    true
}

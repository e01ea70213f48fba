//! Campaign world snapshots.
//!
//! A `World` is the host-side entity collection the query engine reads from.
//! It is loaded once from a JSON snapshot file (or built from the embedded
//! sample) and treated as externally mutable shared state: every query clones
//! the collection it needs before filtering and never reads the live
//! collection again.

pub mod entities;

pub use entities::{
    Clan, Culture, Hero, Item, ItemClass, Kingdom, Occupation, Settlement, SettlementKind,
};

use crate::error::{ConsoleError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The full campaign snapshot: every entity collection the console can query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct World {
    #[serde(default)]
    pub heroes: Vec<Hero>,
    #[serde(default)]
    pub clans: Vec<Clan>,
    #[serde(default)]
    pub kingdoms: Vec<Kingdom>,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub settlements: Vec<Settlement>,
    #[serde(default)]
    pub cultures: Vec<Culture>,
}

impl World {
    /// Loads a world snapshot from a JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConsoleError::world(format!("cannot read snapshot {}: {e}", path.display()))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            ConsoleError::world(format!("malformed snapshot {}: {e}", path.display()))
        })
    }

    /// Total entity count across all domains, for startup logging.
    pub fn entity_count(&self) -> usize {
        self.heroes.len()
            + self.clans.len()
            + self.kingdoms.len()
            + self.items.len()
            + self.settlements.len()
            + self.cultures.len()
    }

    /// Builds the embedded sample world used for demos and tests.
    ///
    /// Deterministic: same entities in the same order on every call.
    pub fn sample() -> Self {
        let heroes = vec![
            hero("hero_aldric", "Aldric", Occupation::Lord, 42.0, 18, 2500, "empire", Some("clan_hartwood"), false, true, true, false),
            hero("hero_senna", "Senna", Occupation::Lord, 35.0, 21, 5200, "empire", Some("clan_hartwood"), true, true, false, true),
            hero("hero_tor", "Tor", Occupation::Wanderer, 28.0, 9, 340, "sturgia", None, false, true, false, false),
            hero("hero_mira", "Mira", Occupation::Wanderer, 24.0, 11, 780, "aserai", None, true, true, false, false),
            hero("hero_golan", "Golan", Occupation::Notable, 55.0, 5, 12000, "empire", None, false, true, false, false),
            hero("hero_edric", "Edric", Occupation::Lord, 61.0, 24, 8800, "vlandia", Some("clan_roth"), false, false, true, false),
        ];

        let clans = vec![
            Clan { id: "clan_hartwood".into(), name: "Hartwood".into(), tier: 4, renown: 890.0, gold: 40_000, strength: 612.0, culture: "empire".into(), leader: Some("hero_aldric".into()), kingdom: Some("kingdom_north".into()), minor: false, mercenary: false, eliminated: false, player: true },
            Clan { id: "clan_roth".into(), name: "Roth".into(), tier: 5, renown: 1340.0, gold: 62_000, strength: 910.0, culture: "vlandia".into(), leader: Some("hero_edric".into()), kingdom: Some("kingdom_west".into()), minor: false, mercenary: false, eliminated: false, player: false },
            Clan { id: "clan_ashborn".into(), name: "Ashborn".into(), tier: 2, renown: 210.0, gold: 9_000, strength: 180.0, culture: "sturgia".into(), leader: None, kingdom: None, minor: true, mercenary: true, eliminated: false, player: false },
        ];

        let kingdoms = vec![
            Kingdom { id: "kingdom_north".into(), name: "Northern Realm".into(), culture: "empire".into(), ruler: Some("hero_senna".into()), strength: 4200.0, clan_count: 7, settlement_count: 19, wars: 1, eliminated: false, player: false },
            Kingdom { id: "kingdom_west".into(), name: "Western March".into(), culture: "vlandia".into(), ruler: Some("hero_edric".into()), strength: 3800.0, clan_count: 6, settlement_count: 15, wars: 0, eliminated: false, player: false },
        ];

        let items = vec![
            item("item_longsword", "Fine Longsword", ItemClass::OneHanded, 3, 410, 1.4, false),
            item("item_greataxe", "Greataxe", ItemClass::TwoHanded, 5, 1750, 3.1, false),
            item("item_warbow", "War Bow", ItemClass::Bow, 4, 900, 0.9, false),
            item("item_crossbow", "Heavy Crossbow", ItemClass::Crossbow, 5, 1400, 3.4, false),
            item("item_lamellar", "Lamellar Armor", ItemClass::BodyArmor, 4, 2100, 11.8, false),
            item("item_tunic", "Plain Tunic", ItemClass::BodyArmor, 0, 35, 1.0, true),
            item("item_courser", "Desert Courser", ItemClass::Mount, 3, 780, 0.0, true),
            item("item_grain", "Grain", ItemClass::Food, 0, 10, 10.0, false),
            item("item_velvet", "Velvet", ItemClass::TradeGood, 0, 250, 5.0, false),
        ];

        let settlements = vec![
            Settlement { id: "town_varnis".into(), name: "Varnis".into(), kind: SettlementKind::Town, culture: "empire".into(), owner: Some("clan_hartwood".into()), prosperity: 4100.0, militia: 220.0, player_owned: true, besieged: false, raided: false },
            Settlement { id: "castle_greymoor".into(), name: "Greymoor Castle".into(), kind: SettlementKind::Castle, culture: "vlandia".into(), owner: Some("clan_roth".into()), prosperity: 900.0, militia: 140.0, player_owned: false, besieged: true, raided: false },
            Settlement { id: "village_elmfield".into(), name: "Elmfield".into(), kind: SettlementKind::Village, culture: "empire".into(), owner: Some("clan_hartwood".into()), prosperity: 480.0, militia: 40.0, player_owned: false, besieged: false, raided: true },
            Settlement { id: "hideout_gorge".into(), name: "Gorge Hideout".into(), kind: SettlementKind::Hideout, culture: "mountain_bandits".into(), owner: None, prosperity: 0.0, militia: 0.0, player_owned: false, besieged: false, raided: false },
        ];

        let cultures = vec![
            Culture { id: "empire".into(), name: "Empire".into(), main_culture: true, bandit: false },
            Culture { id: "vlandia".into(), name: "Vlandia".into(), main_culture: true, bandit: false },
            Culture { id: "sturgia".into(), name: "Sturgia".into(), main_culture: true, bandit: false },
            Culture { id: "aserai".into(), name: "Aserai".into(), main_culture: true, bandit: false },
            Culture { id: "mountain_bandits".into(), name: "Mountain Bandits".into(), main_culture: false, bandit: true },
        ];

        Self {
            heroes,
            clans,
            kingdoms,
            items,
            settlements,
            cultures,
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn hero(
    id: &str,
    name: &str,
    occupation: Occupation,
    age: f64,
    level: u32,
    gold: i64,
    culture: &str,
    clan: Option<&str>,
    female: bool,
    alive: bool,
    clan_leader: bool,
    kingdom_ruler: bool,
) -> Hero {
    Hero {
        id: id.into(),
        name: name.into(),
        occupation,
        age,
        level,
        gold,
        culture: culture.into(),
        clan: clan.map(Into::into),
        female,
        alive,
        clan_leader,
        kingdom_ruler,
    }
}

fn item(id: &str, name: &str, class: ItemClass, tier: u8, value: i64, weight: f64, civilian: bool) -> Item {
    Item {
        id: id.into(),
        name: name.into(),
        class,
        tier,
        value,
        weight,
        civilian,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_world_is_deterministic() {
        let a = World::sample();
        let b = World::sample();
        assert_eq!(a.heroes, b.heroes);
        assert_eq!(a.items, b.items);
        assert_eq!(a.entity_count(), b.entity_count());
    }

    #[test]
    fn test_sample_world_has_all_domains() {
        let world = World::sample();
        assert!(!world.heroes.is_empty());
        assert!(!world.clans.is_empty());
        assert!(!world.kingdoms.is_empty());
        assert!(!world.items.is_empty());
        assert!(!world.settlements.is_empty());
        assert!(!world.cultures.is_empty());
    }

    #[test]
    fn test_world_json_round_trip() {
        let world = World::sample();
        let json = serde_json::to_string(&world).unwrap();
        let back: World = serde_json::from_str(&json).unwrap();
        assert_eq!(back.heroes, world.heroes);
        assert_eq!(back.settlements, world.settlements);
    }

    #[test]
    fn test_load_missing_file() {
        let err = World::load_from_file(std::path::Path::new("/nonexistent/world.json")).unwrap_err();
        assert_eq!(err.category(), "World Error");
    }
}

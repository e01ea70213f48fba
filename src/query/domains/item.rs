//! Item domain adapter.

use crate::error::Result;
use crate::query::args::ArgSpec;
use crate::query::domains::parse_tier_token;
use crate::query::flags::Vocabulary;
use crate::query::sort::Attribute;
use crate::query::Domain;
use crate::world::{Item, ItemClass, World};

static VOCABULARY: Vocabulary<Item> = Vocabulary {
    entries: &[
        ("weapon", |i| i.class.is_weapon()),
        ("armor", |i| i.class.is_armor()),
        ("mount", |i| i.class == ItemClass::Mount),
        ("food", |i| i.class == ItemClass::Food),
        ("trade", |i| i.class == ItemClass::TradeGood),
        ("1h", |i| i.class == ItemClass::OneHanded),
        ("2h", |i| i.class == ItemClass::TwoHanded),
        ("ranged", |i| i.class.is_ranged()),
        ("bow", |i| i.class == ItemClass::Bow),
        ("crossbow", |i| i.class == ItemClass::Crossbow),
    ],
};

static ATTRIBUTES: [(&str, Attribute<Item>); 5] = [
    ("name", Attribute::Str(|i| i.name.clone())),
    ("tier", Attribute::Num(|i| i.tier as f64)),
    ("value", Attribute::Num(|i| i.value as f64)),
    ("weight", Attribute::Num(|i| i.weight)),
    ("class", Attribute::Str(|i| i.class.label().to_string())),
];

static ARG_SPECS: [ArgSpec; 0] = [];

/// Loadout category an item belongs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Loadout {
    Civilian,
    Battle,
}

impl Loadout {
    fn label(&self) -> &'static str {
        match self {
            Self::Civilian => "civilian",
            Self::Battle => "battle",
        }
    }
}

/// Extra filters for item queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFilters {
    pub tier: Option<u8>,
    pub loadout: Option<Loadout>,
}

/// The item domain adapter.
pub struct ItemQuery;

impl Domain for ItemQuery {
    type Entity = Item;
    type Extra = ItemFilters;

    const NAME: &'static str = "item";

    fn vocabulary() -> &'static Vocabulary<Item> {
        &VOCABULARY
    }

    fn attributes() -> &'static [(&'static str, Attribute<Item>)] {
        &ATTRIBUTES
    }

    fn arg_specs() -> &'static [ArgSpec] {
        &ARG_SPECS
    }

    fn consume_extra(extra: &mut ItemFilters, token: &str) -> Result<bool> {
        if let Some(tier) = parse_tier_token(token)? {
            extra.tier = Some(tier);
            return Ok(true);
        }
        match token.to_lowercase().as_str() {
            "civilian" => {
                extra.loadout = Some(Loadout::Civilian);
                Ok(true)
            }
            "battle" => {
                extra.loadout = Some(Loadout::Battle);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn apply_named_extra(_extra: &mut ItemFilters, _name: &str, _value: &str) -> Result<()> {
        Ok(())
    }

    fn extra_matches(item: &Item, extra: &ItemFilters) -> bool {
        if extra.tier.is_some_and(|t| item.tier != t) {
            return false;
        }
        match extra.loadout {
            Some(Loadout::Civilian) => item.civilian,
            Some(Loadout::Battle) => !item.civilian,
            None => true,
        }
    }

    fn describe_extra(extra: &ItemFilters) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(loadout) = extra.loadout {
            pairs.push(("loadout".to_string(), loadout.label().to_string()));
        }
        if let Some(tier) = extra.tier {
            pairs.push(("tier".to_string(), tier.to_string()));
        }
        pairs
    }

    fn entity_id(item: &Item) -> &str {
        &item.id
    }

    fn display_name(item: &Item) -> &str {
        &item.name
    }

    fn format_row(item: &Item) -> String {
        let loadout = if item.civilian { "civilian" } else { "battle" };
        format!(
            "{} [{}] | {} | tier {} | value {} | weight {:.1} | {}",
            item.name,
            item.id,
            item.class.label(),
            item.tier,
            item.value,
            item.weight,
            loadout
        )
    }

    fn snapshot(world: &World) -> Vec<Item> {
        world.items.clone()
    }

    fn get_by_id(world: &World, id: &str) -> Option<Item> {
        world
            .items
            .iter()
            .find(|i| i.id.eq_ignore_ascii_case(id))
            .cloned()
    }
}

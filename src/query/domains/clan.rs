//! Clan domain adapter.

use crate::error::Result;
use crate::query::args::ArgSpec;
use crate::query::domains::{culture_filter_matches, parse_tier_token};
use crate::query::flags::Vocabulary;
use crate::query::sort::Attribute;
use crate::query::Domain;
use crate::world::{Clan, World};

static VOCABULARY: Vocabulary<Clan> = Vocabulary {
    entries: &[
        ("minor", |c| c.minor),
        ("noble", |c| c.is_noble()),
        ("mercenary", |c| c.mercenary),
        ("eliminated", |c| c.eliminated),
        ("player", |c| c.player),
    ],
};

static ATTRIBUTES: [(&str, Attribute<Clan>); 7] = [
    ("name", Attribute::Str(|c| c.name.clone())),
    ("tier", Attribute::Num(|c| c.tier as f64)),
    ("renown", Attribute::Num(|c| c.renown)),
    ("gold", Attribute::Num(|c| c.gold as f64)),
    ("strength", Attribute::Num(|c| c.strength)),
    ("culture", Attribute::Str(|c| c.culture.clone())),
    ("leader", Attribute::Str(|c| c.leader.clone().unwrap_or_default())),
];

static ARG_SPECS: [ArgSpec; 1] = [ArgSpec::optional("culture")];

/// Extra filters for clan queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClanFilters {
    pub culture: Option<String>,
    pub tier: Option<u8>,
}

/// The clan domain adapter.
pub struct ClanQuery;

impl Domain for ClanQuery {
    type Entity = Clan;
    type Extra = ClanFilters;

    const NAME: &'static str = "clan";

    fn vocabulary() -> &'static Vocabulary<Clan> {
        &VOCABULARY
    }

    fn attributes() -> &'static [(&'static str, Attribute<Clan>)] {
        &ATTRIBUTES
    }

    fn arg_specs() -> &'static [ArgSpec] {
        &ARG_SPECS
    }

    fn consume_extra(extra: &mut ClanFilters, token: &str) -> Result<bool> {
        if let Some(tier) = parse_tier_token(token)? {
            extra.tier = Some(tier);
            return Ok(true);
        }
        Ok(false)
    }

    fn apply_named_extra(extra: &mut ClanFilters, name: &str, value: &str) -> Result<()> {
        if name == "culture" {
            extra.culture = Some(value.to_lowercase());
        }
        Ok(())
    }

    fn extra_matches(clan: &Clan, extra: &ClanFilters) -> bool {
        culture_filter_matches(&extra.culture, &clan.culture)
            && extra.tier.map_or(true, |t| clan.tier == t)
    }

    fn describe_extra(extra: &ClanFilters) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(culture) = &extra.culture {
            pairs.push(("culture".to_string(), culture.clone()));
        }
        if let Some(tier) = extra.tier {
            pairs.push(("tier".to_string(), tier.to_string()));
        }
        pairs
    }

    fn entity_id(clan: &Clan) -> &str {
        &clan.id
    }

    fn display_name(clan: &Clan) -> &str {
        &clan.name
    }

    fn format_row(clan: &Clan) -> String {
        let kingdom = clan.kingdom.as_deref().unwrap_or("-");
        let leader = clan.leader.as_deref().unwrap_or("-");
        let kind = if clan.mercenary {
            "mercenary"
        } else if clan.minor {
            "minor"
        } else {
            "noble"
        };
        format!(
            "{} [{}] | {} | tier {} | renown {:.0} | gold {} | strength {:.0} | culture {} | kingdom {} | leader {}",
            clan.name,
            clan.id,
            kind,
            clan.tier,
            clan.renown,
            clan.gold,
            clan.strength,
            clan.culture,
            kingdom,
            leader
        )
    }

    fn snapshot(world: &World) -> Vec<Clan> {
        world.clans.clone()
    }

    fn get_by_id(world: &World, id: &str) -> Option<Clan> {
        world
            .clans
            .iter()
            .find(|c| c.id.eq_ignore_ascii_case(id))
            .cloned()
    }
}

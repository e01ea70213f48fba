//! Kingdom domain adapter.

use crate::error::Result;
use crate::query::args::ArgSpec;
use crate::query::domains::culture_filter_matches;
use crate::query::flags::Vocabulary;
use crate::query::sort::Attribute;
use crate::query::Domain;
use crate::world::{Kingdom, World};

static VOCABULARY: Vocabulary<Kingdom> = Vocabulary {
    entries: &[
        ("eliminated", |k| k.eliminated),
        ("atwar", |k| k.wars > 0),
        ("player", |k| k.player),
    ],
};

static ATTRIBUTES: [(&str, Attribute<Kingdom>); 7] = [
    ("name", Attribute::Str(|k| k.name.clone())),
    ("strength", Attribute::Num(|k| k.strength)),
    ("culture", Attribute::Str(|k| k.culture.clone())),
    ("clans", Attribute::Num(|k| k.clan_count as f64)),
    ("settlements", Attribute::Num(|k| k.settlement_count as f64)),
    ("wars", Attribute::Num(|k| k.wars as f64)),
    ("ruler", Attribute::Str(|k| k.ruler.clone().unwrap_or_default())),
];

static ARG_SPECS: [ArgSpec; 1] = [ArgSpec::optional("culture")];

/// Extra filters for kingdom queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KingdomFilters {
    pub culture: Option<String>,
}

/// The kingdom domain adapter.
pub struct KingdomQuery;

impl Domain for KingdomQuery {
    type Entity = Kingdom;
    type Extra = KingdomFilters;

    const NAME: &'static str = "kingdom";

    fn vocabulary() -> &'static Vocabulary<Kingdom> {
        &VOCABULARY
    }

    fn attributes() -> &'static [(&'static str, Attribute<Kingdom>)] {
        &ATTRIBUTES
    }

    fn arg_specs() -> &'static [ArgSpec] {
        &ARG_SPECS
    }

    fn consume_extra(_extra: &mut KingdomFilters, _token: &str) -> Result<bool> {
        Ok(false)
    }

    fn apply_named_extra(extra: &mut KingdomFilters, name: &str, value: &str) -> Result<()> {
        if name == "culture" {
            extra.culture = Some(value.to_lowercase());
        }
        Ok(())
    }

    fn extra_matches(kingdom: &Kingdom, extra: &KingdomFilters) -> bool {
        culture_filter_matches(&extra.culture, &kingdom.culture)
    }

    fn describe_extra(extra: &KingdomFilters) -> Vec<(String, String)> {
        extra
            .culture
            .iter()
            .map(|c| ("culture".to_string(), c.clone()))
            .collect()
    }

    fn entity_id(kingdom: &Kingdom) -> &str {
        &kingdom.id
    }

    fn display_name(kingdom: &Kingdom) -> &str {
        &kingdom.name
    }

    fn format_row(kingdom: &Kingdom) -> String {
        let ruler = kingdom.ruler.as_deref().unwrap_or("-");
        let status = if kingdom.eliminated {
            " | eliminated"
        } else {
            ""
        };
        format!(
            "{} [{}] | culture {} | strength {:.0} | clans {} | settlements {} | wars {} | ruler {}{}",
            kingdom.name,
            kingdom.id,
            kingdom.culture,
            kingdom.strength,
            kingdom.clan_count,
            kingdom.settlement_count,
            kingdom.wars,
            ruler,
            status
        )
    }

    fn snapshot(world: &World) -> Vec<Kingdom> {
        world.kingdoms.clone()
    }

    fn get_by_id(world: &World, id: &str) -> Option<Kingdom> {
        world
            .kingdoms
            .iter()
            .find(|k| k.id.eq_ignore_ascii_case(id))
            .cloned()
    }
}

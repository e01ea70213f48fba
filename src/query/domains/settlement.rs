//! Settlement domain adapter.

use crate::error::Result;
use crate::query::args::ArgSpec;
use crate::query::domains::culture_filter_matches;
use crate::query::flags::Vocabulary;
use crate::query::sort::Attribute;
use crate::query::Domain;
use crate::world::{Settlement, SettlementKind, World};

static VOCABULARY: Vocabulary<Settlement> = Vocabulary {
    entries: &[
        ("town", |s| s.kind == SettlementKind::Town),
        ("castle", |s| s.kind == SettlementKind::Castle),
        // "city" is the colloquial name for the same thing.
        ("city", |s| s.kind == SettlementKind::Town),
        ("village", |s| s.kind == SettlementKind::Village),
        ("hideout", |s| s.kind == SettlementKind::Hideout),
        ("player", |s| s.player_owned),
        ("besieged", |s| s.besieged),
        ("raided", |s| s.raided),
    ],
};

static ATTRIBUTES: [(&str, Attribute<Settlement>); 6] = [
    ("name", Attribute::Str(|s| s.name.clone())),
    ("prosperity", Attribute::Num(|s| s.prosperity)),
    ("militia", Attribute::Num(|s| s.militia)),
    ("culture", Attribute::Str(|s| s.culture.clone())),
    ("owner", Attribute::Str(|s| s.owner.clone().unwrap_or_default())),
    ("kind", Attribute::Str(|s| s.kind.label().to_string())),
];

static ARG_SPECS: [ArgSpec; 1] = [ArgSpec::optional("culture")];

/// Extra filters for settlement queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettlementFilters {
    pub culture: Option<String>,
}

/// The settlement domain adapter.
pub struct SettlementQuery;

impl Domain for SettlementQuery {
    type Entity = Settlement;
    type Extra = SettlementFilters;

    const NAME: &'static str = "settlement";

    fn vocabulary() -> &'static Vocabulary<Settlement> {
        &VOCABULARY
    }

    fn attributes() -> &'static [(&'static str, Attribute<Settlement>)] {
        &ATTRIBUTES
    }

    fn arg_specs() -> &'static [ArgSpec] {
        &ARG_SPECS
    }

    fn consume_extra(_extra: &mut SettlementFilters, _token: &str) -> Result<bool> {
        Ok(false)
    }

    fn apply_named_extra(extra: &mut SettlementFilters, name: &str, value: &str) -> Result<()> {
        if name == "culture" {
            extra.culture = Some(value.to_lowercase());
        }
        Ok(())
    }

    fn extra_matches(settlement: &Settlement, extra: &SettlementFilters) -> bool {
        culture_filter_matches(&extra.culture, &settlement.culture)
    }

    fn describe_extra(extra: &SettlementFilters) -> Vec<(String, String)> {
        extra
            .culture
            .iter()
            .map(|c| ("culture".to_string(), c.clone()))
            .collect()
    }

    fn entity_id(settlement: &Settlement) -> &str {
        &settlement.id
    }

    fn display_name(settlement: &Settlement) -> &str {
        &settlement.name
    }

    fn format_row(settlement: &Settlement) -> String {
        let owner = settlement.owner.as_deref().unwrap_or("-");
        let mut row = format!(
            "{} [{}] | {} | culture {} | owner {} | prosperity {:.0} | militia {:.0}",
            settlement.name,
            settlement.id,
            settlement.kind.label(),
            settlement.culture,
            owner,
            settlement.prosperity,
            settlement.militia
        );
        if settlement.besieged {
            row.push_str(" | besieged");
        }
        if settlement.raided {
            row.push_str(" | raided");
        }
        row
    }

    fn snapshot(world: &World) -> Vec<Settlement> {
        world.settlements.clone()
    }

    fn get_by_id(world: &World, id: &str) -> Option<Settlement> {
        world
            .settlements
            .iter()
            .find(|s| s.id.eq_ignore_ascii_case(id))
            .cloned()
    }
}

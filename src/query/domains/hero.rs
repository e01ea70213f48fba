//! Hero domain adapter.

use crate::error::Result;
use crate::query::args::ArgSpec;
use crate::query::domains::culture_filter_matches;
use crate::query::flags::{TypeFlags, Vocabulary};
use crate::query::sort::Attribute;
use crate::query::Domain;
use crate::world::{Hero, Occupation, World};

/// Bit index of the `dead` keyword; requesting it opens the liveness gate.
const DEAD_BIT: usize = 7;

static VOCABULARY: Vocabulary<Hero> = Vocabulary {
    entries: &[
        ("lord", |h| h.occupation == Occupation::Lord),
        ("wanderer", |h| h.occupation == Occupation::Wanderer),
        ("notable", |h| h.occupation == Occupation::Notable),
        ("female", |h| h.female),
        ("male", |h| !h.female),
        ("clanleader", |h| h.clan_leader),
        ("kingdomruler", |h| h.kingdom_ruler),
        ("dead", |h| !h.alive),
    ],
};

static ATTRIBUTES: [(&str, Attribute<Hero>); 6] = [
    ("name", Attribute::Str(|h| h.name.clone())),
    ("age", Attribute::Num(|h| h.age)),
    ("level", Attribute::Num(|h| h.level as f64)),
    ("gold", Attribute::Num(|h| h.gold as f64)),
    ("culture", Attribute::Str(|h| h.culture.clone())),
    ("clan", Attribute::Str(|h| h.clan.clone().unwrap_or_default())),
];

static ARG_SPECS: [ArgSpec; 1] = [ArgSpec::optional("culture")];

/// Extra filters for hero queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeroFilters {
    pub culture: Option<String>,
}

/// The hero domain adapter.
pub struct HeroQuery;

impl Domain for HeroQuery {
    type Entity = Hero;
    type Extra = HeroFilters;

    const NAME: &'static str = "hero";

    fn vocabulary() -> &'static Vocabulary<Hero> {
        &VOCABULARY
    }

    fn attributes() -> &'static [(&'static str, Attribute<Hero>)] {
        &ATTRIBUTES
    }

    fn arg_specs() -> &'static [ArgSpec] {
        &ARG_SPECS
    }

    fn consume_extra(_extra: &mut HeroFilters, _token: &str) -> Result<bool> {
        Ok(false)
    }

    fn apply_named_extra(extra: &mut HeroFilters, name: &str, value: &str) -> Result<()> {
        if name == "culture" {
            extra.culture = Some(value.to_lowercase());
        }
        Ok(())
    }

    fn extra_matches(hero: &Hero, extra: &HeroFilters) -> bool {
        culture_filter_matches(&extra.culture, &hero.culture)
    }

    fn describe_extra(extra: &HeroFilters) -> Vec<(String, String)> {
        extra
            .culture
            .iter()
            .map(|c| ("culture".to_string(), c.clone()))
            .collect()
    }

    fn entity_id(hero: &Hero) -> &str {
        &hero.id
    }

    fn display_name(hero: &Hero) -> &str {
        &hero.name
    }

    fn passes_liveness(hero: &Hero, requested: TypeFlags) -> bool {
        hero.alive || requested.has(DEAD_BIT)
    }

    fn format_row(hero: &Hero) -> String {
        let status = if hero.alive { "" } else { ", dead" };
        let clan = hero.clan.as_deref().unwrap_or("-");
        format!(
            "{} [{}] | {}{} | age {:.0} | level {} | gold {} | culture {} | clan {}",
            hero.name,
            hero.id,
            hero.occupation.label(),
            status,
            hero.age,
            hero.level,
            hero.gold,
            hero.culture,
            clan
        )
    }

    fn snapshot(world: &World) -> Vec<Hero> {
        world.heroes.clone()
    }

    fn get_by_id(world: &World, id: &str) -> Option<Hero> {
        world
            .heroes
            .iter()
            .find(|h| h.id.eq_ignore_ascii_case(id))
            .cloned()
    }
}

//! Culture domain adapter.
//!
//! The smallest domain: two flag keywords, no extra filters.

use crate::error::Result;
use crate::query::args::ArgSpec;
use crate::query::flags::Vocabulary;
use crate::query::sort::Attribute;
use crate::query::Domain;
use crate::world::{Culture, World};

static VOCABULARY: Vocabulary<Culture> = Vocabulary {
    entries: &[
        ("main", |c| c.main_culture),
        ("bandit", |c| c.bandit),
    ],
};

static ATTRIBUTES: [(&str, Attribute<Culture>); 1] =
    [("name", Attribute::Str(|c| c.name.clone()))];

static ARG_SPECS: [ArgSpec; 0] = [];

/// The culture domain adapter.
pub struct CultureQuery;

impl Domain for CultureQuery {
    type Entity = Culture;
    type Extra = ();

    const NAME: &'static str = "culture";

    fn vocabulary() -> &'static Vocabulary<Culture> {
        &VOCABULARY
    }

    fn attributes() -> &'static [(&'static str, Attribute<Culture>)] {
        &ATTRIBUTES
    }

    fn arg_specs() -> &'static [ArgSpec] {
        &ARG_SPECS
    }

    fn consume_extra(_extra: &mut (), _token: &str) -> Result<bool> {
        Ok(false)
    }

    fn apply_named_extra(_extra: &mut (), _name: &str, _value: &str) -> Result<()> {
        Ok(())
    }

    fn extra_matches(_culture: &Culture, _extra: &()) -> bool {
        true
    }

    fn describe_extra(_extra: &()) -> Vec<(String, String)> {
        Vec::new()
    }

    fn entity_id(culture: &Culture) -> &str {
        &culture.id
    }

    fn display_name(culture: &Culture) -> &str {
        &culture.name
    }

    fn format_row(culture: &Culture) -> String {
        let kind = if culture.bandit {
            "bandit"
        } else if culture.main_culture {
            "main"
        } else {
            "minor"
        };
        format!("{} [{}] | {}", culture.name, culture.id, kind)
    }

    fn snapshot(world: &World) -> Vec<Culture> {
        world.cultures.clone()
    }

    fn get_by_id(world: &World, id: &str) -> Option<Culture> {
        world
            .cultures
            .iter()
            .find(|c| c.id.eq_ignore_ascii_case(id))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatchMode;
    use crate::query::{criteria, matcher};

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_bandit_flag() {
        let world = World::sample();
        let criteria =
            criteria::build::<CultureQuery>(&tokens(&["bandit"]), MatchMode::All).unwrap();
        let result =
            matcher::filter_snapshot::<CultureQuery>(CultureQuery::snapshot(&world), &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "mountain_bandits");
    }

    #[test]
    fn test_prefixed_token_rejected_without_extra_grammar() {
        let err =
            criteria::build::<CultureQuery>(&tokens(&["culture:empire"]), MatchMode::All)
                .unwrap_err();
        assert_eq!(err.category(), "Parse Error");
    }
}

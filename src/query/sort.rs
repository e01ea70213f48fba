//! The sort engine.
//!
//! Resolves a sort field against a domain — declared attribute accessors
//! first, flag keywords second — and orders a result list deterministically:
//! stable sort with an ascending display-name tie-break, and `desc` as the
//! exact mirror of the ascending order.

use std::cmp::Ordering;

use crate::error::{ConsoleError, Result};
use crate::query::Domain;

/// Named attribute accessor a domain exposes to `sort:`.
pub enum Attribute<E: 'static> {
    /// Numeric field; compares numerically.
    Num(fn(&E) -> f64),
    /// String field; compares case-insensitive ordinal.
    Str(fn(&E) -> String),
}

/// What a sort field resolved to.
enum FieldKind<E: 'static> {
    Attr(&'static Attribute<E>),
    Flag(usize),
}

/// Sort key derived per entity at sort time; never stored.
#[derive(Debug, Clone, PartialEq)]
enum SortKey {
    Num(f64),
    Str(String),
    Flag(bool),
}

impl SortKey {
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Num(a), Self::Num(b)) => a.total_cmp(b),
            (Self::Str(a), Self::Str(b)) => a.cmp(b),
            (Self::Flag(a), Self::Flag(b)) => a.cmp(b),
            // Keys for one field are always the same variant.
            _ => Ordering::Equal,
        }
    }
}

/// Sorts a result list by the given field.
///
/// Unknown fields — neither a declared attribute nor a vocabulary keyword —
/// are a validation error, consistent with the unknown-`key:` rule.
pub fn sort_entities<D: Domain>(
    list: &mut [D::Entity],
    field: &str,
    descending: bool,
) -> Result<()> {
    let kind = resolve_field::<D>(field)?;

    list.sort_by(|a, b| {
        derive_key::<D>(&kind, a)
            .compare(&derive_key::<D>(&kind, b))
            .then_with(|| tie_break::<D>(a).cmp(&tie_break::<D>(b)))
    });

    // Mirror the complete ascending order, tie-break included, instead of
    // re-breaking ties independently.
    if descending {
        list.reverse();
    }

    Ok(())
}

fn tie_break<D: Domain>(entity: &D::Entity) -> String {
    D::display_name(entity).to_lowercase()
}

fn derive_key<D: Domain>(kind: &FieldKind<D::Entity>, entity: &D::Entity) -> SortKey {
    match kind {
        FieldKind::Attr(Attribute::Num(get)) => SortKey::Num(get(entity)),
        FieldKind::Attr(Attribute::Str(get)) => SortKey::Str(get(entity).to_lowercase()),
        FieldKind::Flag(bit) => SortKey::Flag(D::vocabulary().classify(entity).has(*bit)),
    }
}

/// Resolves a field name: declared attributes take priority over flag
/// keywords.
fn resolve_field<D: Domain>(field: &str) -> Result<FieldKind<D::Entity>> {
    if let Some((_, attribute)) = D::attributes()
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(field))
    {
        return Ok(FieldKind::Attr(attribute));
    }

    if let Some(bit) = D::vocabulary().keyword_bit(field) {
        return Ok(FieldKind::Flag(bit));
    }

    Err(ConsoleError::parse(format!(
        "unknown sort field '{field}' for {}",
        D::NAME
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::domains::HeroQuery;
    use crate::world::{Hero, Occupation};
    use pretty_assertions::assert_eq;

    fn hero(name: &str, age: f64, occupation: Occupation) -> Hero {
        Hero {
            id: format!("hero_{}", name.to_lowercase()),
            name: name.into(),
            occupation,
            age,
            level: 10,
            gold: 100,
            culture: "empire".into(),
            clan: None,
            female: false,
            alive: true,
            clan_leader: false,
            kingdom_ruler: false,
        }
    }

    fn names(list: &[Hero]) -> Vec<&str> {
        list.iter().map(|h| h.name.as_str()).collect()
    }

    #[test]
    fn test_numeric_sort_ascending() {
        let mut list = vec![
            hero("Cass", 41.0, Occupation::Lord),
            hero("Ana", 22.0, Occupation::Lord),
            hero("Bo", 35.0, Occupation::Lord),
        ];
        sort_entities::<HeroQuery>(&mut list, "age", false).unwrap();
        assert_eq!(names(&list), vec!["Ana", "Bo", "Cass"]);
    }

    #[test]
    fn test_equal_keys_tie_break_by_name_ascending() {
        let mut list = vec![
            hero("Bob", 30.0, Occupation::Lord),
            hero("Alice", 30.0, Occupation::Lord),
        ];
        sort_entities::<HeroQuery>(&mut list, "age", false).unwrap();
        assert_eq!(names(&list), vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_descending_is_exact_mirror() {
        let mut asc = vec![
            hero("Bob", 30.0, Occupation::Lord),
            hero("Alice", 30.0, Occupation::Lord),
            hero("Zara", 25.0, Occupation::Lord),
        ];
        let mut desc = asc.clone();

        sort_entities::<HeroQuery>(&mut asc, "age", false).unwrap();
        sort_entities::<HeroQuery>(&mut desc, "age", true).unwrap();

        let mut mirrored = asc;
        mirrored.reverse();
        assert_eq!(names(&desc), names(&mirrored));
        assert_eq!(names(&desc), vec!["Bob", "Alice", "Zara"]);
    }

    #[test]
    fn test_string_sort_case_insensitive() {
        let mut list = vec![
            hero("bruna", 30.0, Occupation::Lord),
            hero("Ansel", 30.0, Occupation::Lord),
            hero("CORA", 30.0, Occupation::Lord),
        ];
        sort_entities::<HeroQuery>(&mut list, "name", false).unwrap();
        assert_eq!(names(&list), vec!["Ansel", "bruna", "CORA"]);
    }

    #[test]
    fn test_flag_keyword_as_sort_field() {
        let mut list = vec![
            hero("Lord1", 30.0, Occupation::Lord),
            hero("Wand1", 30.0, Occupation::Wanderer),
            hero("Lord2", 30.0, Occupation::Lord),
        ];
        // false sorts before true; ties broken by name.
        sort_entities::<HeroQuery>(&mut list, "lord", false).unwrap();
        assert_eq!(names(&list), vec!["Wand1", "Lord1", "Lord2"]);
    }

    #[test]
    fn test_sort_field_case_insensitive() {
        let mut list = vec![
            hero("Bo", 40.0, Occupation::Lord),
            hero("Ana", 20.0, Occupation::Lord),
        ];
        sort_entities::<HeroQuery>(&mut list, "AGE", false).unwrap();
        assert_eq!(names(&list), vec!["Ana", "Bo"]);
    }

    #[test]
    fn test_unknown_sort_field_is_error() {
        let mut list = vec![hero("Ana", 20.0, Occupation::Lord)];
        let err = sort_entities::<HeroQuery>(&mut list, "charisma", false).unwrap_err();
        assert_eq!(err.category(), "Parse Error");
        assert!(err.to_string().contains("charisma"));
    }

    #[test]
    fn test_stability_preserves_snapshot_order_within_full_ties() {
        // Same age, same lowercase name: snapshot order must survive.
        let mut list = vec![
            hero("Twin", 30.0, Occupation::Lord),
            hero("TWIN", 30.0, Occupation::Wanderer),
        ];
        sort_entities::<HeroQuery>(&mut list, "age", false).unwrap();
        assert_eq!(list[0].occupation, Occupation::Lord);
        assert_eq!(list[1].occupation, Occupation::Wanderer);
    }
}

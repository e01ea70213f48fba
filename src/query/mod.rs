//! The generic entity query engine.
//!
//! One parser/matcher/sorter/formatter applied uniformly across every entity
//! domain. Domains plug in through the [`Domain`] capability trait: a keyword
//! vocabulary, an extra-filter grammar, attribute accessors, a row formatter
//! and an id lookup. The engine never names a concrete domain type; adding a
//! domain means writing one adapter under [`domains`].

pub mod args;
pub mod criteria;
pub mod domains;
pub mod flags;
pub mod matcher;
pub mod sort;

pub use args::{ArgSpec, ArgumentParser, ParsedArgs};
pub use criteria::QueryCriteria;
pub use flags::{TypeFlags, Vocabulary};
pub use sort::Attribute;

use crate::config::MatchMode;
use crate::error::{ConsoleError, Result};
use crate::world::World;

/// Capability set one entity domain supplies to the engine.
pub trait Domain {
    /// Snapshot entity type. Queries operate on clones, never host state.
    type Entity: Clone + 'static;

    /// Domain-specific extra filters; `Default` means "no filter".
    type Extra: Default + Clone + std::fmt::Debug;

    /// Singular lowercase domain name used in responses ("hero").
    const NAME: &'static str;

    /// Closed keyword table, at most 32 entries.
    fn vocabulary() -> &'static Vocabulary<Self::Entity>;

    /// Named attribute accessors available to `sort:`.
    fn attributes() -> &'static [(&'static str, Attribute<Self::Entity>)];

    /// Named extra-filter arguments this domain declares (beyond `sort`).
    fn arg_specs() -> &'static [ArgSpec];

    /// Attempts to consume one bare token as an extra filter.
    ///
    /// Returns `Ok(true)` when consumed, `Ok(false)` when the token is not
    /// this domain's to claim, `Err` on a malformed value (e.g. `tier9`).
    fn consume_extra(extra: &mut Self::Extra, token: &str) -> Result<bool>;

    /// Applies one named extra-filter argument value.
    fn apply_named_extra(extra: &mut Self::Extra, name: &str, value: &str) -> Result<()>;

    /// Whether an entity passes every extra-filter predicate.
    fn extra_matches(entity: &Self::Entity, extra: &Self::Extra) -> bool;

    /// Extra filters as `(name, value)` pairs for the criteria phrase.
    fn describe_extra(extra: &Self::Extra) -> Vec<(String, String)>;

    /// Stable entity identifier.
    fn entity_id(entity: &Self::Entity) -> &str;

    /// Display name used for free-text matching and sort tie-breaks.
    fn display_name(entity: &Self::Entity) -> &str;

    /// Liveness gate applied before any other filter. Domains without a dead
    /// state keep the default.
    fn passes_liveness(_entity: &Self::Entity, _requested: TypeFlags) -> bool {
        true
    }

    /// One labeled line per entity for response bodies.
    fn format_row(entity: &Self::Entity) -> String;

    /// Point-in-time copy of the host collection.
    fn snapshot(world: &World) -> Vec<Self::Entity>;

    /// Direct id lookup, bypassing the filter/sort pipeline.
    fn get_by_id(world: &World, id: &str) -> Option<Self::Entity>;
}

/// Result of a successful query: the canonical criteria phrase and the
/// formatted rows, already in final order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOutcome {
    pub phrase: String,
    pub rows: Vec<String>,
}

impl QueryOutcome {
    pub fn count(&self) -> usize {
        self.rows.len()
    }
}

/// Runs the full query pipeline for one domain: parse tokens into criteria,
/// filter a snapshot, sort, format.
pub fn run_query<D: Domain>(
    world: &World,
    tokens: &[String],
    default_mode: MatchMode,
) -> Result<QueryOutcome> {
    let criteria = criteria::build::<D>(tokens, default_mode)?;

    let snapshot = D::snapshot(world);
    let mut matched = matcher::filter_snapshot::<D>(snapshot, &criteria);

    if let Some(field) = criteria.sort_field.as_deref() {
        sort::sort_entities::<D>(&mut matched, field, criteria.sort_descending)?;
    }

    Ok(QueryOutcome {
        phrase: criteria::describe::<D>(&criteria),
        rows: matched.iter().map(|e| D::format_row(e)).collect(),
    })
}

/// Direct lookup-by-id entrypoint for the `*_info` commands.
pub fn lookup<D: Domain>(world: &World, id: &str) -> Result<String> {
    D::get_by_id(world, id)
        .map(|e| D::format_row(&e))
        .ok_or_else(|| ConsoleError::lookup(format!("no {} with id '{id}'", D::NAME)))
}

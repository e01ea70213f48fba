//! Domain query adapters.
//!
//! One adapter per entity domain. Each supplies its keyword vocabulary,
//! extra-filter grammar, attribute accessors, row formatter and id lookup;
//! the engine in the parent module is written once against that capability
//! set and never touches a concrete domain type.

mod clan;
mod culture;
mod hero;
mod item;
mod kingdom;
mod settlement;

pub use clan::ClanQuery;
pub use culture::CultureQuery;
pub use hero::HeroQuery;
pub use item::ItemQuery;
pub use kingdom::KingdomQuery;
pub use settlement::SettlementQuery;

use crate::error::{ConsoleError, Result};

/// Parses a bare `tierN` token.
///
/// Returns `Ok(None)` when the token is not a tier token at all (it then
/// falls through to flags or free text), `Err` when it names a tier outside
/// the 0..=6 range.
pub(crate) fn parse_tier_token(token: &str) -> Result<Option<u8>> {
    let lower = token.to_lowercase();
    let Some(rest) = lower.strip_prefix("tier") else {
        return Ok(None);
    };
    if rest.is_empty() {
        // Bare "tier" carries no value; let it fall through.
        return Ok(None);
    }
    match rest.parse::<u8>() {
        Ok(tier) if tier <= 6 => Ok(Some(tier)),
        Ok(tier) => Err(ConsoleError::parse(format!(
            "tier {tier} out of range, expected tier0..tier6"
        ))),
        // "tiered" and friends are ordinary words.
        Err(_) => Ok(None),
    }
}

/// Case-insensitive comparison for culture-id filters.
pub(crate) fn culture_filter_matches(filter: &Option<String>, culture: &str) -> bool {
    match filter {
        Some(wanted) => culture.eq_ignore_ascii_case(wanted),
        None => true,
    }
}

//! Query criteria: construction from parsed tokens and the canonical
//! human-readable phrase.
//!
//! Token consumption priority, applied once per token: sort spec, match-mode
//! word (`all`/`any`), domain extra filter, flag keyword, free text. A token
//! is consumed by exactly one of these.

use crate::config::MatchMode;
use crate::error::{ConsoleError, Result};
use crate::query::args::{ArgSpec, ArgumentParser};
use crate::query::flags::TypeFlags;
use crate::query::Domain;

/// The fully resolved description of one query. Built once per invocation,
/// read-only afterward.
#[derive(Debug, Clone)]
pub struct QueryCriteria<X> {
    /// Case-insensitive substring matched against entity id and name.
    pub free_text: String,
    /// Requested flag keywords as a bitmask.
    pub requested: TypeFlags,
    /// AND vs OR semantics for the requested flags.
    pub match_all: bool,
    /// Domain-specific structured filters.
    pub extra: X,
    /// Sort field, or `None` for snapshot order.
    pub sort_field: Option<String>,
    pub sort_descending: bool,
}

/// Parses a sort specification value: `<field>` or `<field>:desc`.
fn parse_sort_spec(value: &str) -> Result<(String, bool)> {
    let (field, descending) = match value.split_once(':') {
        None => (value, false),
        Some((field, "desc")) => (field, true),
        Some((_, other)) => {
            return Err(ConsoleError::parse(format!(
                "malformed sort specification: expected 'sort:<field>' or 'sort:<field>:desc', got 'sort:{value}' ('{other}' is not 'desc')"
            )))
        }
    };
    if field.is_empty() {
        return Err(ConsoleError::parse("empty sort field"));
    }
    Ok((field.to_lowercase(), descending))
}

/// Builds the criteria for one domain from raw query tokens.
pub fn build<D: Domain>(tokens: &[String], default_mode: MatchMode) -> Result<QueryCriteria<D::Extra>> {
    let mut specs = vec![ArgSpec::optional("sort")];
    specs.extend_from_slice(D::arg_specs());
    let args = ArgumentParser::new(specs).parse(tokens);

    if let Some(err) = args.validation_error() {
        return Err(ConsoleError::parse(err));
    }

    // Repeated sort: tokens: last one wins.
    let (sort_field, sort_descending) = match args.last_value("sort") {
        Some(value) => {
            let (field, descending) = parse_sort_spec(value)?;
            (Some(field), descending)
        }
        None => (None, false),
    };

    // Named extra filters, applied in arrival order (last assignment wins
    // inside the domain's own Extra state).
    let mut extra = D::Extra::default();
    for spec in D::arg_specs() {
        for value in args.values(spec.name) {
            D::apply_named_extra(&mut extra, spec.name, value)?;
        }
    }

    // Positional tokens: mode word, bare extra filter, flag keyword, or
    // free text, in that order.
    let vocabulary = D::vocabulary();
    let mut requested = TypeFlags::EMPTY;
    let mut match_all = default_mode == MatchMode::All;
    let mut free_words: Vec<&str> = Vec::new();

    for token in args.positional() {
        if let Some(mode) = MatchMode::parse(token) {
            match_all = mode == MatchMode::All;
            continue;
        }
        if D::consume_extra(&mut extra, token)? {
            continue;
        }
        if let Some(bit) = vocabulary.keyword_bit(token) {
            requested.set(bit);
            continue;
        }
        free_words.push(token);
    }

    Ok(QueryCriteria {
        free_text: free_words.join(" "),
        requested,
        match_all,
        extra,
        sort_field,
        sort_descending,
    })
}

/// Renders the resolved criteria as one human-readable phrase.
///
/// The phrase is canonical: logically identical criteria produce the same
/// string regardless of original token order, because keyword and
/// extra-filter lists are sorted before joining.
pub fn describe<D: Domain>(criteria: &QueryCriteria<D::Extra>) -> String {
    let mut parts: Vec<String> = Vec::new();

    if !criteria.free_text.is_empty() {
        parts.push(format!("\"{}\"", criteria.free_text));
    }

    let mut keywords = D::vocabulary().keywords_for(criteria.requested);
    keywords.sort_unstable();
    if !keywords.is_empty() {
        let joiner = if criteria.match_all { " AND " } else { " OR " };
        parts.push(keywords.join(joiner));
    }

    let mut extras = D::describe_extra(&criteria.extra);
    extras.sort();
    for (name, value) in extras {
        parts.push(format!("{name}:{value}"));
    }

    if let Some(field) = &criteria.sort_field {
        let suffix = if criteria.sort_descending { ":desc" } else { "" };
        parts.push(format!("sort:{field}{suffix}"));
    }

    if parts.is_empty() {
        "no filter".to_string()
    } else {
        parts.join(", ")
    }
}

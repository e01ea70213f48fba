//! Snapshot filtering.
//!
//! Filters run in a fixed order: liveness gate, flag match, extra filters,
//! free-text substring. Extras always use AND regardless of the flag match
//! mode; they are independent structured constraints, not keywords. Matched
//! entities keep the snapshot's original order.

use crate::query::criteria::QueryCriteria;
use crate::query::Domain;

/// Whether one entity satisfies every part of the criteria.
pub fn matches<D: Domain>(entity: &D::Entity, criteria: &QueryCriteria<D::Extra>) -> bool {
    if !D::passes_liveness(entity, criteria.requested) {
        return false;
    }

    if !criteria.requested.is_empty() {
        let actual = D::vocabulary().classify(entity);
        let flags_ok = if criteria.match_all {
            actual.contains(criteria.requested)
        } else {
            actual.intersects(criteria.requested)
        };
        if !flags_ok {
            return false;
        }
    }

    if !D::extra_matches(entity, &criteria.extra) {
        return false;
    }

    if !criteria.free_text.is_empty() {
        let needle = criteria.free_text.to_lowercase();
        let id_hit = D::entity_id(entity).to_lowercase().contains(&needle);
        let name_hit = D::display_name(entity).to_lowercase().contains(&needle);
        if !id_hit && !name_hit {
            return false;
        }
    }

    true
}

/// Filters a snapshot down to the matching entities, preserving order.
pub fn filter_snapshot<D: Domain>(
    snapshot: Vec<D::Entity>,
    criteria: &QueryCriteria<D::Extra>,
) -> Vec<D::Entity> {
    snapshot
        .into_iter()
        .filter(|e| matches::<D>(e, criteria))
        .collect()
}

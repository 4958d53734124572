//! The query engine: pure filter + sort over a candidate list.
//!
//! `query` is deterministic and total: given well-typed inputs it always
//! returns a value, never errors, never mutates the items. It is cheap
//! enough (O(n log n) over a few hundred items) to run on every state
//! change, so there is no caching and deliberately no debouncing.

use crate::state::{FilterState, SortKey};
use crate::traits::Queryable;
use std::cmp::Ordering;
use tracing::debug;

/// Compute the visible, ordered subset of `items` for `state`.
///
/// ## Predicate
/// An item passes iff all active dimensions match (AND across
/// dimensions):
/// 1. no level selected, or the item's rank is one of the selected levels
/// 2. no tag selected, or the item carries at least one selected tag
///    (OR within the tag set)
/// 3. search empty, or the lowercased name contains the lowercased
///    search text
///
/// ## Ordering
/// The filtered set is sorted per `state.sort_key`; the sort is stable,
/// so ties keep their relative order from the input list.
pub fn query<'a, T: Queryable>(items: &'a [T], state: &FilterState) -> Vec<&'a T> {
    let needle = state.search_text.to_lowercase();

    let mut kept: Vec<&T> = items
        .iter()
        .filter(|item| matches(*item, state, &needle))
        .collect();

    debug!(
        input = items.len(),
        kept = kept.len(),
        active_filters = state.active_filter_count(),
        "query filtered candidates"
    );

    // Vec::sort_by is stable; input order is the final tie-break for free.
    match state.sort_key {
        SortKey::ByRank => kept.sort_by(|a, b| {
            b.rank()
                .cmp(&a.rank())
                .then_with(|| descending(a.weight(), b.weight()))
        }),
        SortKey::ByWeight => kept.sort_by(|a, b| descending(a.weight(), b.weight())),
        SortKey::ByName => kept.sort_by(|a, b| a.name().cmp(b.name())),
    }

    kept
}

fn matches<T: Queryable>(item: &T, state: &FilterState, needle: &str) -> bool {
    let level_ok = state.selected_levels.is_empty()
        || item
            .rank()
            .is_some_and(|rank| state.selected_levels.contains(&rank));

    let tag_ok = state.selected_tags.is_empty()
        || item
            .tags()
            .iter()
            .any(|tag| state.selected_tags.contains(tag.as_str()));

    let search_ok = needle.is_empty() || item.name().to_lowercase().contains(needle);

    level_ok && tag_ok && search_ok
}

/// Descending comparison for the weight axis. Weights come from years,
/// view counts or timestamps and are never NaN; equal-compare is the
/// safe fallback regardless.
fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

//! The filter state value object.
//!
//! A `FilterState` is a pure, comparable snapshot of "what the user
//! currently wants to see". Transitions produce a new value; nothing here
//! performs I/O or can fail. Toggled values always come from a fixed
//! enumerated set, pre-validated by the caller.

use content::Proficiency;
use std::collections::BTreeSet;

/// Which ordering the result list uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Descending proficiency, ties broken by descending weight, then
    /// input order. The default.
    #[default]
    ByRank,
    /// Descending numeric/temporal attribute (years, views, publish
    /// date), ties broken by input order.
    ByWeight,
    /// Ascending ordinal comparison of the display name, ties broken by
    /// input order.
    ByName,
}

/// Immutable snapshot of the active filter and sort selection.
///
/// Empty sets and the empty search string mean "match all" on that
/// dimension. Equality is field-wise, which together with the codec's
/// determinism gives the URL round-trip law.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub selected_levels: BTreeSet<Proficiency>,
    pub selected_tags: BTreeSet<String>,
    pub search_text: String,
    pub sort_key: SortKey,
}

impl FilterState {
    /// The canonical empty state: no filters, default sort.
    pub fn reset() -> Self {
        Self::default()
    }

    /// Add `level` if absent, remove it if present.
    pub fn with_level_toggled(mut self, level: Proficiency) -> Self {
        if !self.selected_levels.remove(&level) {
            self.selected_levels.insert(level);
        }
        self
    }

    /// Add `tag` if absent, remove it if present.
    pub fn with_tag_toggled(mut self, tag: &str) -> Self {
        if !self.selected_tags.remove(tag) {
            self.selected_tags.insert(tag.to_string());
        }
        self
    }

    /// Replace the search text verbatim. Empty means "no text filter".
    pub fn with_search_text(mut self, text: &str) -> Self {
        self.search_text = text.to_string();
        self
    }

    /// Replace the sort key.
    pub fn with_sort_key(mut self, key: SortKey) -> Self {
        self.sort_key = key;
        self
    }

    /// Number of active filter dimensions, for UI badge display only.
    /// The sort key is an ordering, not a filter, and does not count.
    pub fn active_filter_count(&self) -> usize {
        self.selected_levels.len()
            + self.selected_tags.len()
            + usize::from(!self.search_text.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_toggle_is_involutive() {
        let state = FilterState::reset()
            .with_tag_toggled("backend")
            .with_search_text("ru");
        let toggled_twice = state
            .clone()
            .with_level_toggled(Proficiency::Expert)
            .with_level_toggled(Proficiency::Expert);
        assert_eq!(toggled_twice, state);
    }

    #[test]
    fn test_tag_toggle_is_involutive() {
        let state = FilterState::reset().with_level_toggled(Proficiency::Advanced);
        let toggled_twice = state
            .clone()
            .with_tag_toggled("cloud")
            .with_tag_toggled("cloud");
        assert_eq!(toggled_twice, state);
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let state = FilterState::reset().with_level_toggled(Proficiency::Expert);
        assert!(state.selected_levels.contains(&Proficiency::Expert));
        let state = state.with_level_toggled(Proficiency::Expert);
        assert!(state.selected_levels.is_empty());
    }

    #[test]
    fn test_active_filter_count() {
        let state = FilterState::reset();
        assert_eq!(state.active_filter_count(), 0);

        let state = state
            .with_level_toggled(Proficiency::Expert)
            .with_level_toggled(Proficiency::Advanced)
            .with_tag_toggled("backend")
            .with_search_text("rust");
        assert_eq!(state.active_filter_count(), 4);

        // Sort key never counts as a filter.
        let state = state.with_sort_key(SortKey::ByName);
        assert_eq!(state.active_filter_count(), 4);

        // Clearing the search drops exactly one.
        let state = state.with_search_text("");
        assert_eq!(state.active_filter_count(), 3);
    }

    #[test]
    fn test_reset_is_canonical_empty() {
        let state = FilterState::reset();
        assert!(state.selected_levels.is_empty());
        assert!(state.selected_tags.is_empty());
        assert!(state.search_text.is_empty());
        assert_eq!(state.sort_key, SortKey::ByRank);
    }

    #[test]
    fn test_search_text_kept_verbatim() {
        let state = FilterState::reset().with_search_text("  Rust ");
        assert_eq!(state.search_text, "  Rust ");
    }
}

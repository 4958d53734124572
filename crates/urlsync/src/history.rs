//! The publish boundary.
//!
//! `publish` is the one side-effecting operation in the sync layer: it
//! mirrors a [`FilterState`] into whatever owns the address bar. The
//! sink is a trait so the pure core never touches ambient state
//! directly; the host environment injects its own implementation and
//! tests use the in-memory [`AddressBar`].

use crate::codec::encode;
use query::FilterState;
use tracing::debug;

/// Receiver for the encoded query string.
pub trait HistorySink {
    /// Replace the current history entry's query string in place.
    ///
    /// Implementations must not push a new navigable history frame;
    /// toggling filters should never pollute back-button history.
    fn replace_query(&mut self, query: &str);
}

/// Mirror `state` into `sink` as its encoded query string.
pub fn publish<S: HistorySink>(state: &FilterState, sink: &mut S) {
    let encoded = encode(state);
    debug!(query = %encoded, "publishing filter state");
    sink.replace_query(&encoded);
}

/// In-memory address bar, used by the CLI and by tests.
#[derive(Debug, Default)]
pub struct AddressBar {
    current: String,
    replace_count: usize,
}

impl AddressBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// The query string most recently published.
    pub fn query(&self) -> &str {
        &self.current
    }

    /// How many times the entry was replaced. There is never more than
    /// one frame; replacements overwrite in place.
    pub fn replace_count(&self) -> usize {
        self.replace_count
    }
}

impl HistorySink for AddressBar {
    fn replace_query(&mut self, query: &str) {
        self.current = query.to_string();
        self.replace_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decode;
    use content::Proficiency;

    #[test]
    fn test_publish_replaces_in_place() {
        let mut bar = AddressBar::new();

        let first = FilterState::reset().with_tag_toggled("travel");
        publish(&first, &mut bar);
        assert_eq!(bar.query(), "tags=travel");

        let second = first.clone().with_level_toggled(Proficiency::Expert);
        publish(&second, &mut bar);

        // Two publishes, still a single entry, holding only the latest
        // state.
        assert_eq!(bar.replace_count(), 2);
        assert_eq!(decode(bar.query()), second);
    }

    #[test]
    fn test_publish_reset_clears_the_bar() {
        let mut bar = AddressBar::new();
        publish(&FilterState::reset().with_search_text("go"), &mut bar);
        publish(&FilterState::reset(), &mut bar);
        assert_eq!(bar.query(), "");
    }
}

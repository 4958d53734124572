//! Codec between a [`FilterState`] and a URL query string.
//!
//! The wire format is an internal contract of this application, not a
//! public API: set-valued fields are comma-joined lists, the sort field
//! is omitted at its default, and parameter order is fixed so encoding
//! is deterministic.
//!
//! Decoding is lenient throughout. A shared link with a typo in it must
//! still render something, so absent, malformed or unrecognized input
//! degrades to the field's default instead of erroring.

use content::Proficiency;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use query::{FilterState, SortKey};
use url::form_urlencoded;

const PARAM_LEVELS: &str = "levels";
const PARAM_TAGS: &str = "tags";
const PARAM_SEARCH: &str = "search";
const PARAM_SORT: &str = "sort";

/// Characters escaped inside query values. Commas stay literal so the
/// joined lists read naturally in an address bar; `+` is escaped because
/// the decoder treats a literal `+` as a space.
const VALUE_ESCAPE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'`');

/// Serialize `state` into a query string (no leading `?`).
///
/// Fields at their canonical empty/default value are omitted, so the
/// reset state encodes to the empty string. Levels are listed from
/// highest rank down, matching the order the filter chips render in.
pub fn encode(state: &FilterState) -> String {
    let mut pairs: Vec<String> = Vec::with_capacity(4);

    if !state.selected_levels.is_empty() {
        let joined = state
            .selected_levels
            .iter()
            .rev()
            .map(|level| level.token())
            .collect::<Vec<_>>()
            .join(",");
        pairs.push(format!("{PARAM_LEVELS}={joined}"));
    }

    if !state.selected_tags.is_empty() {
        let joined = state
            .selected_tags
            .iter()
            .map(|tag| utf8_percent_encode(tag, VALUE_ESCAPE).to_string())
            .collect::<Vec<_>>()
            .join(",");
        pairs.push(format!("{PARAM_TAGS}={joined}"));
    }

    if !state.search_text.is_empty() {
        pairs.push(format!(
            "{PARAM_SEARCH}={}",
            utf8_percent_encode(&state.search_text, VALUE_ESCAPE)
        ));
    }

    if state.sort_key != SortKey::default() {
        pairs.push(format!("{PARAM_SORT}={}", sort_token(state.sort_key)));
    }

    pairs.join("&")
}

/// Parse a query string back into a [`FilterState`]. Never fails.
///
/// Unknown parameters are dropped, unrecognized tokens inside a list are
/// skipped, a repeated parameter keeps its last occurrence, and a
/// leading `?` is tolerated. `encode(decode(q))` therefore normalizes
/// `q` rather than reproducing it byte for byte.
pub fn decode(query: &str) -> FilterState {
    let raw = query.strip_prefix('?').unwrap_or(query);
    let mut state = FilterState::reset();

    for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
        match key.as_ref() {
            PARAM_LEVELS => {
                state.selected_levels = value
                    .split(',')
                    .filter_map(|token| token.parse::<Proficiency>().ok())
                    .collect();
            }
            PARAM_TAGS => {
                state.selected_tags = value
                    .split(',')
                    .filter(|tag| !tag.is_empty())
                    .map(str::to_string)
                    .collect();
            }
            PARAM_SEARCH => state.search_text = value.into_owned(),
            PARAM_SORT => {
                state.sort_key = parse_sort(value.as_ref()).unwrap_or_default();
            }
            _ => {}
        }
    }

    state
}

fn sort_token(key: SortKey) -> &'static str {
    match key {
        SortKey::ByRank => "rank",
        SortKey::ByWeight => "weight",
        SortKey::ByName => "name",
    }
}

fn parse_sort(token: &str) -> Option<SortKey> {
    match token {
        "rank" => Some(SortKey::ByRank),
        "weight" => Some(SortKey::ByWeight),
        "name" => Some(SortKey::ByName),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_states() -> Vec<FilterState> {
        vec![
            FilterState::reset(),
            FilterState::reset().with_level_toggled(Proficiency::Expert),
            FilterState::reset()
                .with_level_toggled(Proficiency::Expert)
                .with_level_toggled(Proficiency::Intermediate)
                .with_tag_toggled("backend")
                .with_tag_toggled("devops"),
            FilterState::reset()
                .with_search_text("distributed systems")
                .with_sort_key(SortKey::ByWeight),
            FilterState::reset()
                .with_tag_toggled("night")
                .with_search_text("100% rust & more")
                .with_sort_key(SortKey::ByName),
        ]
    }

    #[test]
    fn test_round_trip_law() {
        for state in sample_states() {
            let encoded = encode(&state);
            assert_eq!(decode(&encoded), state, "round trip failed for {encoded:?}");
        }
    }

    #[test]
    fn test_reset_encodes_to_empty() {
        assert_eq!(encode(&FilterState::reset()), "");
        assert_eq!(decode(""), FilterState::reset());
    }

    #[test]
    fn test_encode_fixed_order_and_omissions() {
        let state = FilterState::reset()
            .with_level_toggled(Proficiency::Expert)
            .with_level_toggled(Proficiency::Advanced)
            .with_search_text("java")
            .with_sort_key(SortKey::ByName);

        let encoded = encode(&state);
        assert_eq!(encoded, "levels=expert,advanced&search=java&sort=name");
        assert_eq!(decode(&encoded), state);

        // Back at the default sort, the parameter disappears.
        let state = state.with_sort_key(SortKey::ByRank);
        assert!(!encode(&state).contains("sort="));
    }

    #[test]
    fn test_decode_is_lenient_on_garbage() {
        let state = decode("levels=bogus&sort=not-a-key");
        assert_eq!(state, FilterState::reset());
    }

    #[test]
    fn test_decode_skips_bad_tokens_inside_lists() {
        let state = decode("levels=expert,guru,advanced&tags=,backend,");
        assert_eq!(
            state,
            FilterState::reset()
                .with_level_toggled(Proficiency::Expert)
                .with_level_toggled(Proficiency::Advanced)
                .with_tag_toggled("backend")
        );
    }

    #[test]
    fn test_decode_tolerates_leading_question_mark() {
        let state = decode("?search=go");
        assert_eq!(state.search_text, "go");
    }

    #[test]
    fn test_decode_drops_unknown_parameters() {
        let state = decode("theme=dark&utm_source=mail&search=go");
        assert_eq!(state, FilterState::reset().with_search_text("go"));
    }

    #[test]
    fn test_decode_keeps_last_duplicate() {
        let state = decode("search=first&search=second");
        assert_eq!(state.search_text, "second");
    }

    #[test]
    fn test_search_percent_and_plus_escapes() {
        let state = FilterState::reset().with_search_text("a + b");
        let encoded = encode(&state);
        assert_eq!(encoded, "search=a%20%2B%20b");
        assert_eq!(decode(&encoded), state);

        // Legacy form encoding uses '+' for spaces; accept it on decode.
        assert_eq!(decode("search=a+b").search_text, "a b");
    }

    #[test]
    fn test_encode_is_deterministic_regardless_of_toggle_order() {
        let a = FilterState::reset()
            .with_tag_toggled("travel")
            .with_tag_toggled("night")
            .with_level_toggled(Proficiency::Expert)
            .with_level_toggled(Proficiency::Advanced);
        let b = FilterState::reset()
            .with_level_toggled(Proficiency::Advanced)
            .with_level_toggled(Proficiency::Expert)
            .with_tag_toggled("night")
            .with_tag_toggled("travel");
        assert_eq!(encode(&a), encode(&b));
    }

    #[test]
    fn test_normalization_allowed_on_re_encode() {
        // decode then encode may reorder and drop, but the result must
        // decode to the same state again.
        let messy = "sort=name&tags=b,a&junk=1&levels=advanced,expert";
        let normalized = encode(&decode(messy));
        assert_eq!(normalized, "levels=expert,advanced&tags=a,b&sort=name");
        assert_eq!(decode(&normalized), decode(messy));
    }
}

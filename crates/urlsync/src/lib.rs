//! # URLSync Crate
//!
//! Bidirectional mapping between a [`query::FilterState`] and a
//! shareable URL query string, plus the `publish` boundary that mirrors
//! state into an address bar.
//!
//! ## Contract
//! - `decode(encode(s)) == s` for every reachable state
//! - `encode(decode(q))` may normalize `q` (reorder, drop unknowns)
//! - decoding never fails; malformed input degrades to defaults
//!
//! ## Example Usage
//! ```
//! use content::Proficiency;
//! use query::FilterState;
//! use urlsync::{decode, encode, publish, AddressBar};
//!
//! let state = FilterState::reset()
//!     .with_level_toggled(Proficiency::Expert)
//!     .with_tag_toggled("backend");
//!
//! let mut bar = AddressBar::new();
//! publish(&state, &mut bar);
//! assert_eq!(decode(bar.query()), state);
//! assert_eq!(bar.query(), encode(&state));
//! ```

pub mod codec;
pub mod history;

// Re-export main types
pub use codec::{decode, encode};
pub use history::{publish, AddressBar, HistorySink};

//! # Query Crate
//!
//! The filter/sort/search core behind the skills and photo gallery views.
//!
//! ## Components
//! - [`FilterState`]: immutable snapshot of the active selection, with
//!   pure toggle/replace/reset transitions
//! - [`Queryable`]: the seam the content domains implement
//! - [`query`]: conjunctive filtering plus a stable sort, recomputed in
//!   full on every state change
//!
//! ## Example Usage
//! ```
//! use content::ContentStore;
//! use query::{query, FilterState, SortKey};
//!
//! let store = ContentStore::load_bundled()?;
//! let state = FilterState::reset()
//!     .with_tag_toggled("backend")
//!     .with_sort_key(SortKey::ByName);
//!
//! let visible = query(store.skills(), &state);
//! assert!(visible.len() <= store.skills().len());
//! # Ok::<(), content::ContentError>(())
//! ```

pub mod engine;
pub mod state;
pub mod traits;

// Re-export main types
pub use engine::query;
pub use state::{FilterState, SortKey};
pub use traits::Queryable;

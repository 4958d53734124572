//! # Content Crate
//!
//! Bundled, read-only portfolio content: skills, gallery photos and blog
//! posts, plus a sparse side-table of extra display detail per item.
//!
//! The data ships embedded in the binary and is parsed and validated once
//! by [`ContentStore::load_bundled`]. Nothing here mutates after load;
//! the query engine borrows items from the store and only ever selects
//! and reorders references.

pub mod error;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use error::{ContentError, Result};
pub use store::ContentStore;
pub use types::{BlogPost, CategoryDetail, Photo, Proficiency, Skill, UnknownProficiency};

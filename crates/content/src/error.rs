//! Error types for the content crate.
//!
//! These can only arise from a broken bundle: the JSON documents are
//! embedded at compile time, so every variant here signals a packaging
//! bug, not a runtime condition.

use thiserror::Error;

/// Errors that can occur while loading the bundled content.
#[derive(Error, Debug)]
pub enum ContentError {
    /// An embedded JSON document failed to deserialize
    #[error("Malformed bundled document {doc}: {source}")]
    Malformed {
        doc: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Two items in the same document share an id
    #[error("Duplicate id {id:?} in bundled document {doc}")]
    DuplicateId { doc: &'static str, id: String },

    /// A side-table entry references an item id that does not exist
    #[error("Category detail references unknown item id {id:?}")]
    DanglingDetail { id: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ContentError>;

//! Core type definitions for nbgate.
//!
//! This crate defines the small, backend-agnostic types shared by the
//! gateway, the document store and the execution adapters:
//! - Document identifiers (UUID v7)
//! - The requester identity forwarded by the upstream proxy
//!
//! Notebook and snippet payloads live in `nbgate-model`.

mod ids;
mod requester;

pub use ids::DocumentId;
pub use requester::Requester;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when constructing core types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid document id: {0}")]
    InvalidDocumentId(#[from] uuid::Error),

    #[error("requester name must not be empty")]
    EmptyRequester,
}

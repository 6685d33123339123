//! DuckDB document store for nbgate.
//!
//! Saved notebooks are kept as whole JSON documents, one row each, keyed by
//! a UUID v7 [`DocumentId`](nbgate_types::DocumentId). A save replaces the
//! name and content in place; there is no history.

mod document_store;
mod error;

pub use document_store::DocumentStore;
pub use error::{StorageError, StorageResult};

//! Request and persistence model for nbgate.
//!
//! - [`Notebook`] — a client-authored document grouping snippets
//! - [`Snippet`] — one executable unit, tagged with a backend type
//! - [`Document`] — the persisted form of a saved notebook
//!
//! Notebook and snippet payloads are deliberately opaque: the gateway only
//! reads `id`/`name` from a notebook and `type` from a snippet. Everything
//! else is carried through to the execution adapter untouched.

mod document;
mod error;
mod notebook;
mod snippet;

pub use document::{Document, NOTEBOOK_DOC_TYPE};
pub use error::{ModelError, ModelResult};
pub use notebook::Notebook;
pub use snippet::Snippet;

//! Execution adapters for nbgate.
//!
//! An adapter is the backend-specific client that owns the session and
//! statement lifecycle for one snippet type. The gateway never looks inside
//! the values an adapter returns; it only routes calls and classifies
//! failures.
//!
//! ## Components
//!
//! - **Adapter**: [`ExecutionAdapter`], one async method per lifecycle phase
//! - **Registry**: [`AdapterRegistry`], maps a snippet type tag to a factory
//! - **Errors**: [`ExecError`], with session loss as its own kind so callers
//!   can tell "recreate the session" apart from ordinary failures
//!
//! # Example
//!
//! ```
//! use nbgate_exec::AdapterRegistry;
//! use nbgate_model::Snippet;
//! use nbgate_types::Requester;
//!
//! let registry = AdapterRegistry::with_builtin();
//! let snippet = Snippet::parse(r#"{"type":"text"}"#).unwrap();
//! let user = Requester::new("alice").unwrap();
//! assert!(registry.resolve(&user, &snippet).is_ok());
//! ```

mod adapter;
mod error;
pub mod mock;
mod registry;
mod text;

pub use adapter::ExecutionAdapter;
pub use error::{ExecError, ExecResult};
pub use registry::{AdapterFactory, AdapterRegistry};
pub use text::TextAdapter;

/// Rows requested by `fetch_result` when the client does not say.
pub const DEFAULT_FETCH_ROWS: u64 = 100;

//! Error types for execution adapters.

use thiserror::Error;

/// Result type for adapter operations.
pub type ExecResult<T> = Result<T, ExecError>;

/// Errors raised while resolving or calling an execution adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecError {
    /// The backend no longer knows the session; the client should create a
    /// new one and retry.
    #[error("session not found: {0}")]
    SessionNotFound(String),

    /// Any other backend failure.
    #[error("{0}")]
    ExecutionFailed(String),

    /// No adapter is registered for the snippet's type.
    #[error("no execution backend registered for snippet type '{0}'")]
    UnknownBackend(String),

    /// The snippet has no `type` to resolve an adapter with.
    #[error("snippet has no type")]
    MissingSnippetType,
}

impl ExecError {
    /// Shorthand for [`ExecError::ExecutionFailed`].
    pub fn failed(message: impl Into<String>) -> Self {
        Self::ExecutionFailed(message.into())
    }

    /// Whether the caller should recreate its session.
    pub fn is_session_lost(&self) -> bool {
        matches!(self, Self::SessionNotFound(_))
    }
}

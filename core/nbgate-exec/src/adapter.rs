use crate::ExecResult;
use async_trait::async_trait;
use nbgate_model::{Notebook, Snippet};
use serde_json::Value;

/// A backend-specific execution client for one snippet type.
///
/// Every method returns an opaque JSON value which the gateway forwards to
/// the client verbatim. Session and statement continuity is carried by ids
/// the adapter embeds in its return values and the client echoes back inside
/// the notebook/snippet on later calls; adapters are free to be stateless.
#[async_trait]
pub trait ExecutionAdapter: Send + Sync {
    /// Opens a backend session for the given language.
    async fn create_session(&self, lang: &str) -> ExecResult<Value>;

    /// Submits the snippet's statement, returning a statement handle.
    async fn execute(&self, notebook: &Notebook, snippet: &Snippet) -> ExecResult<Value>;

    /// Reports the state of the snippet's running statement.
    async fn check_status(&self, notebook: &Notebook, snippet: &Snippet) -> ExecResult<Value>;

    /// Fetches up to `rows` result rows.
    async fn fetch_result(
        &self,
        notebook: &Notebook,
        snippet: &Snippet,
        rows: u64,
    ) -> ExecResult<Value>;

    /// Describes the result set's columns.
    async fn fetch_result_metadata(
        &self,
        notebook: &Notebook,
        snippet: &Snippet,
    ) -> ExecResult<Value>;

    /// Cancels the snippet's running statement.
    async fn cancel(&self, notebook: &Notebook, snippet: &Snippet) -> ExecResult<Value>;

    /// Returns the execution log for the snippet.
    async fn get_log(&self, snippet: &Snippet) -> ExecResult<Value>;
}

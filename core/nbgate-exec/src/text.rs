use crate::{ExecError, ExecResult, ExecutionAdapter};
use async_trait::async_trait;
use nbgate_model::{Notebook, Snippet};
use serde_json::{json, Value};

/// Adapter for prose/markdown snippets.
///
/// Text snippets live in a notebook next to executable ones but have no
/// backend: sessions are placeholders and there is never a result.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextAdapter;

#[async_trait]
impl ExecutionAdapter for TextAdapter {
    async fn create_session(&self, lang: &str) -> ExecResult<Value> {
        Ok(json!({ "type": lang, "id": null }))
    }

    async fn execute(&self, _notebook: &Notebook, _snippet: &Snippet) -> ExecResult<Value> {
        Err(ExecError::failed("text snippets cannot be executed"))
    }

    async fn check_status(&self, _notebook: &Notebook, _snippet: &Snippet) -> ExecResult<Value> {
        Ok(json!({ "status": "available" }))
    }

    async fn fetch_result(
        &self,
        _notebook: &Notebook,
        _snippet: &Snippet,
        _rows: u64,
    ) -> ExecResult<Value> {
        Ok(json!({ "data": [], "has_more": false }))
    }

    async fn fetch_result_metadata(
        &self,
        _notebook: &Notebook,
        _snippet: &Snippet,
    ) -> ExecResult<Value> {
        Ok(json!([]))
    }

    async fn cancel(&self, _notebook: &Notebook, _snippet: &Snippet) -> ExecResult<Value> {
        Ok(json!({ "status": 0 }))
    }

    async fn get_log(&self, _snippet: &Snippet) -> ExecResult<Value> {
        Ok(Value::String(String::new()))
    }
}

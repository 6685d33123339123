//! Execution handlers: one adapter call per request.

use crate::envelope::{
    HandlePayload, LogsPayload, Outcome, Payload, QueryStatusPayload, ResultPayload,
    SessionPayload,
};
use crate::error::GatewayError;
use crate::form::FormBody;
use crate::state::{AppState, CurrentUser};
use axum::extract::State;
use axum::Json;
use nbgate_exec::{ExecResult, ExecutionAdapter, DEFAULT_FETCH_ROWS};
use nbgate_model::{Notebook, Snippet};
use nbgate_types::Requester;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Form body shared by the execution handlers. Absent JSON fields decode
/// as empty objects.
#[derive(Debug, Default, Deserialize)]
pub struct ExecutionForm {
    pub notebook: Option<String>,
    pub snippet: Option<String>,
    /// Only read by `fetch_result_data`.
    pub rows: Option<String>,
}

impl ExecutionForm {
    fn decode(&self) -> Result<(Notebook, Snippet), GatewayError> {
        let notebook = Notebook::parse(self.notebook.as_deref().unwrap_or("{}"))?;
        let snippet = Snippet::parse(self.snippet.as_deref().unwrap_or("{}"))?;
        Ok((notebook, snippet))
    }

    fn rows(&self) -> Result<u64, GatewayError> {
        match self.rows.as_deref() {
            None => Ok(DEFAULT_FETCH_ROWS),
            Some(raw) => serde_json::from_str(raw)
                .map_err(|e| GatewayError::BadRequest(format!("invalid rows payload: {e}"))),
        }
    }
}

type Reply<P> = Result<Json<Outcome<P>>, GatewayError>;

fn resolve(
    state: &AppState,
    user: &Requester,
    snippet: &Snippet,
) -> ExecResult<Arc<dyn ExecutionAdapter>> {
    state.registry.resolve(user, snippet)
}

fn classify<P: Payload>(operation: &str, user: &Requester, result: ExecResult<Value>) -> Json<Outcome<P>> {
    match &result {
        Ok(_) => debug!(operation, user = %user, "Adapter call succeeded"),
        Err(e) if e.is_session_lost() => info!(operation, user = %user, error = %e, "Backend session lost"),
        Err(e) => warn!(operation, user = %user, error = %e, "Adapter call failed"),
    }
    Json(Outcome::from_exec(result))
}

pub(super) async fn create_session(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    FormBody(form): FormBody<ExecutionForm>,
) -> Reply<SessionPayload> {
    let (_notebook, snippet) = form.decode()?;
    let result = match resolve(&state, &user, &snippet) {
        Ok(adapter) => adapter.create_session(snippet.snippet_type().unwrap_or_default()).await,
        Err(e) => Err(e),
    };
    Ok(classify("create_session", &user, result))
}

pub(super) async fn execute(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    FormBody(form): FormBody<ExecutionForm>,
) -> Reply<HandlePayload> {
    let (notebook, snippet) = form.decode()?;
    let result = match resolve(&state, &user, &snippet) {
        Ok(adapter) => adapter.execute(&notebook, &snippet).await,
        Err(e) => Err(e),
    };
    Ok(classify("execute", &user, result))
}

pub(super) async fn check_status(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    FormBody(form): FormBody<ExecutionForm>,
) -> Reply<QueryStatusPayload> {
    let (notebook, snippet) = form.decode()?;
    let result = match resolve(&state, &user, &snippet) {
        Ok(adapter) => adapter.check_status(&notebook, &snippet).await,
        Err(e) => Err(e),
    };
    Ok(classify("check_status", &user, result))
}

pub(super) async fn fetch_result_data(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    FormBody(form): FormBody<ExecutionForm>,
) -> Reply<ResultPayload> {
    let (notebook, snippet) = form.decode()?;
    let rows = form.rows()?;
    let result = match resolve(&state, &user, &snippet) {
        Ok(adapter) => adapter.fetch_result(&notebook, &snippet, rows).await,
        Err(e) => Err(e),
    };
    Ok(classify("fetch_result_data", &user, result))
}

pub(super) async fn fetch_result_metadata(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    FormBody(form): FormBody<ExecutionForm>,
) -> Reply<ResultPayload> {
    let (notebook, snippet) = form.decode()?;
    let result = match resolve(&state, &user, &snippet) {
        Ok(adapter) => adapter.fetch_result_metadata(&notebook, &snippet).await,
        Err(e) => Err(e),
    };
    Ok(classify("fetch_result_metadata", &user, result))
}

pub(super) async fn cancel_statement(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    FormBody(form): FormBody<ExecutionForm>,
) -> Reply<ResultPayload> {
    let (notebook, snippet) = form.decode()?;
    let result = match resolve(&state, &user, &snippet) {
        Ok(adapter) => adapter.cancel(&notebook, &snippet).await,
        Err(e) => Err(e),
    };
    Ok(classify("cancel_statement", &user, result))
}

pub(super) async fn get_log(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    FormBody(form): FormBody<ExecutionForm>,
) -> Reply<LogsPayload> {
    let (_notebook, snippet) = form.decode()?;
    let result = match resolve(&state, &user, &snippet) {
        Ok(adapter) => adapter.get_log(&snippet).await,
        Err(e) => Err(e),
    };
    Ok(classify("get_log", &user, result))
}

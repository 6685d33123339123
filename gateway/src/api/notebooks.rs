//! Notebook persistence handlers.

use crate::envelope::{NotebookOpened, NotebookSaved};
use crate::error::GatewayError;
use crate::state::{AppState, CurrentUser};
use crate::form::FormBody;
use axum::extract::{Query, State};
use axum::Json;
use nbgate_model::{Notebook, NOTEBOOK_DOC_TYPE};
use nbgate_types::DocumentId;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Default, Deserialize)]
pub struct SaveForm {
    pub notebook: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct OpenQuery {
    /// Id of the document to open.
    pub notebook: Option<String>,
}

/// Creates the notebook's document on first save, otherwise overwrites the
/// existing one's name and content.
pub(super) async fn save_notebook(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    FormBody(form): FormBody<SaveForm>,
) -> Result<Json<NotebookSaved>, GatewayError> {
    let notebook = Notebook::parse(form.notebook.as_deref().unwrap_or("{}"))?;
    let documents = Arc::clone(&state.documents);

    let id = tokio::task::spawn_blocking(move || -> Result<DocumentId, GatewayError> {
        let mut document = match notebook.document_id()? {
            Some(id) => documents.get(&id)?,
            None => documents.create(notebook.name(), NOTEBOOK_DOC_TYPE, &user)?,
        };
        document.update_data(&notebook);
        document.set_name(notebook.name());
        documents.save(&document)?;
        info!(id = %document.id, user = %user, "Notebook saved");
        Ok(document.id)
    })
    .await??;

    Ok(Json(NotebookSaved::new(id)))
}

pub(super) async fn open_notebook(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(query): Query<OpenQuery>,
) -> Result<Json<NotebookOpened>, GatewayError> {
    let raw_id = query
        .notebook
        .filter(|id| !id.is_empty())
        .ok_or_else(|| GatewayError::BadRequest("missing notebook id".into()))?;
    let id = DocumentId::parse(&raw_id).map_err(|_| GatewayError::NotFound(raw_id.clone()))?;
    let documents = Arc::clone(&state.documents);

    let document = tokio::task::spawn_blocking(move || documents.get(&id)).await??;
    let exported = Notebook::from_document(&document)?.to_json_string()?;
    info!(id = %document.id, user = %user, "Notebook opened");

    Ok(Json(NotebookOpened::new(exported)))
}

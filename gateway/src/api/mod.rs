//! Notebook API routes.

mod execution;
mod notebooks;

use crate::state::AppState;
use axum::routing::{get, post};
use axum::Router;

pub use execution::ExecutionForm;
pub use notebooks::{OpenQuery, SaveForm};

/// Routes mounted under `/notebook/api`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/create_session", post(execution::create_session))
        .route("/execute", post(execution::execute))
        .route("/check_status", post(execution::check_status))
        .route("/fetch_result_data", post(execution::fetch_result_data))
        .route("/fetch_result_metadata", post(execution::fetch_result_metadata))
        .route("/cancel_statement", post(execution::cancel_statement))
        .route("/get_log", post(execution::get_log))
        .route("/notebook/save", post(notebooks::save_notebook))
        .route("/notebook/open", get(notebooks::open_notebook))
}

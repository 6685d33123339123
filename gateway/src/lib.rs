//! HTTP gateway for notebook execution.
//!
//! Receives notebook and snippet descriptors from the browser, forwards each
//! call to the execution adapter registered for the snippet's type, and
//! wraps the result in a fixed JSON envelope. Saved notebooks go to the
//! document store.

pub mod api;
pub mod config;
pub mod envelope;
pub mod error;
pub mod form;
pub mod state;

pub use config::GatewayConfig;
pub use envelope::{Outcome, Status};
pub use error::{ErrorResponse, GatewayError};
pub use state::{AppState, CurrentUser};

use axum::{extract::State, response::Json, routing::get, Router};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub backends: Vec<String>,
}

async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        backends: state.registry.backends().into_iter().map(String::from).collect(),
    })
}

/// Build the HTTP router over the given state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .nest("/notebook/api", api::routes())
        .with_state(state)
}

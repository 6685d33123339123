//! Failures reported outside the response envelope.
//!
//! Adapter errors never reach this type: they are classified into the
//! envelope's `status`. What remains are problems with the request itself
//! and with the document store, answered with a non-200 status and
//! `{"error": "..."}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use nbgate_model::ModelError;
use nbgate_store::StorageError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum GatewayError {
    /// A request field could not be decoded.
    #[error("{0}")]
    BadRequest(String),

    /// No requester identity was forwarded by the upstream proxy.
    #[error("missing requester identity header '{0}'")]
    Unauthorized(String),

    #[error("notebook not found: {0}")]
    NotFound(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::BadRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            GatewayError::NotFound(_) => StatusCode::NOT_FOUND,
            GatewayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ModelError> for GatewayError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::InvalidPayload { .. } => GatewayError::BadRequest(err.to_string()),
            ModelError::InvalidDocumentId(id) => GatewayError::NotFound(id),
            ModelError::CorruptDocument(_) | ModelError::Serialization(_) => {
                GatewayError::Internal(err.to_string())
            }
        }
    }
}

impl From<StorageError> for GatewayError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(id) => GatewayError::NotFound(id),
            other => GatewayError::Internal(other.to_string()),
        }
    }
}

impl From<tokio::task::JoinError> for GatewayError {
    fn from(err: tokio::task::JoinError) -> Self {
        GatewayError::Internal(format!("document task failed: {err}"))
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        }
        (status, Json(ErrorResponse { error: self.to_string() })).into_response()
    }
}

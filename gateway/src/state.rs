use crate::config::DEFAULT_USER_HEADER;
use crate::error::GatewayError;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderName;
use nbgate_exec::AdapterRegistry;
use nbgate_store::DocumentStore;
use nbgate_types::Requester;
use std::sync::Arc;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<AdapterRegistry>,
    pub documents: Arc<DocumentStore>,
    pub user_header: HeaderName,
}

impl AppState {
    pub fn new(registry: AdapterRegistry, documents: DocumentStore) -> Self {
        Self {
            registry: Arc::new(registry),
            documents: Arc::new(documents),
            user_header: HeaderName::from_static(DEFAULT_USER_HEADER),
        }
    }

    pub fn with_user_header(mut self, header: HeaderName) -> Self {
        self.user_header = header;
        self
    }
}

/// The requester named by the configured identity header.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Requester);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = GatewayError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let name = parts
            .headers
            .get(&state.user_header)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        Requester::new(name)
            .map(CurrentUser)
            .map_err(|_| GatewayError::Unauthorized(state.user_header.to_string()))
    }
}

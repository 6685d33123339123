use axum::http::HeaderName;
use nbgate_store::{DocumentStore, StorageResult};
use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Header carrying the authenticated user name, set by the upstream proxy.
pub const DEFAULT_USER_HEADER: &str = "x-remote-user";
pub const DEFAULT_PORT: u16 = 8899;

/// Runtime settings for the gateway.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub listen_addr: SocketAddr,
    /// Document database file. `None` keeps documents in memory.
    pub database: Option<PathBuf>,
    pub user_header: HeaderName,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            database: None,
            user_header: HeaderName::from_static(DEFAULT_USER_HEADER),
        }
    }
}

impl GatewayConfig {
    /// Opens the configured document store.
    pub fn open_documents(&self) -> StorageResult<DocumentStore> {
        match &self.database {
            Some(path) => DocumentStore::open(path),
            None => DocumentStore::open_in_memory(),
        }
    }
}

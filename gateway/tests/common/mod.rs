use std::sync::Arc;

use nbgate_exec::mock::MockAdapter;
use nbgate_exec::AdapterRegistry;
use nbgate_server::{build_router, AppState};
use nbgate_store::DocumentStore;

pub const USER_HEADER: &str = "x-remote-user";

pub struct TestServer {
    pub base: String,
    pub mock: Arc<MockAdapter>,
    pub documents: Arc<DocumentStore>,
    pub client: reqwest::Client,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// POSTs a form to the notebook API as `alice`.
    pub async fn post(&self, route: &str, fields: &[(&str, &str)]) -> reqwest::Response {
        self.client
            .post(self.url(&format!("/notebook/api/{route}")))
            .header(USER_HEADER, "alice")
            .form(fields)
            .send()
            .await
            .unwrap()
    }

    /// POSTs a form and decodes the JSON envelope, asserting HTTP 200.
    pub async fn post_json(&self, route: &str, fields: &[(&str, &str)]) -> serde_json::Value {
        let resp = self.post(route, fields).await;
        assert_eq!(resp.status(), 200, "route {route}");
        resp.json().await.unwrap()
    }
}

/// Spin up the gateway on an OS-assigned port with a mock adapter bound to
/// `hive` and `impala`, plus the built-in `text` adapter.
pub async fn spawn_test_server() -> TestServer {
    let mock = MockAdapter::new();
    let mut registry = AdapterRegistry::with_builtin();
    registry.register_all(&["hive", "impala"], mock.factory());

    let state = AppState::new(registry, DocumentStore::open_in_memory().unwrap());
    let documents = Arc::clone(&state.documents);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestServer {
        base: format!("http://127.0.0.1:{}", port),
        mock,
        documents,
        client: reqwest::Client::new(),
    }
}

//! Shared setup for the wiremock-backed tests

#![allow(dead_code)]

use client::shared::config::ApiConfig;
use client::system::auth::FileSessionStore;
use client::ApiClient;
use contracts::system::session::{MemorySessionStore, Session, SessionStore};
use std::sync::Arc;
use tempfile::TempDir;
use wiremock::MockServer;

pub struct TestContext {
    pub server: MockServer,
    pub dir: TempDir,
    pub store: Arc<dyn SessionStore>,
    pub client: ApiClient,
}

impl TestContext {
    /// Mock API with an in-memory session holding `token`.
    pub async fn logged_in(token: &str) -> Self {
        let store: Arc<dyn SessionStore> =
            Arc::new(MemorySessionStore::with_session(Session::new(token)));
        Self::with_store(store).await
    }

    pub async fn anonymous() -> Self {
        Self::with_store(Arc::new(MemorySessionStore::new())).await
    }

    /// Mock API with the session kept in `session.json` inside a temp dir.
    pub async fn with_file_store() -> Self {
        let dir = TempDir::new().unwrap();
        let store: Arc<dyn SessionStore> =
            Arc::new(FileSessionStore::new(dir.path().join("session.json")));
        Self::build(store, dir).await
    }

    async fn with_store(store: Arc<dyn SessionStore>) -> Self {
        Self::build(store, TempDir::new().unwrap()).await
    }

    async fn build(store: Arc<dyn SessionStore>, dir: TempDir) -> Self {
        let server = MockServer::start().await;
        let config = ApiConfig {
            base_url: format!("{}/api", server.uri()),
            timeout_secs: 5,
        };
        let client = ApiClient::new(&config, store.clone()).unwrap();
        Self {
            server,
            dir,
            store,
            client,
        }
    }

    pub fn write_file(&self, name: &str, contents: &str) -> std::path::PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }
}

pub fn user_json(id: i64, full_name: &str, email: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "fullName": full_name,
        "email": email,
        "phoneNumber": null,
        "role": "RESIDENT",
        "flatNo": "A-101",
        "reputationScore": 100,
        "createdAt": "2026-01-10T09:00:00"
    })
}

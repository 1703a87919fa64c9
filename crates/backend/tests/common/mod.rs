//! Shared helpers for the integration tests: an in-memory document store and
//! a stub CDN so the router can be driven end to end without network access.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use serde_json::Value;

use portfolio_backend::auth::types::AuthConfig;
use portfolio_backend::error::ApiResult;
use portfolio_backend::store::{ContentStore, MediaStore};
use portfolio_backend::{build_router, AppState};

pub const TEST_PASSWORD: &str = "correct-horse";

#[derive(Default)]
pub struct MemoryStore {
    docs: Mutex<HashMap<(String, String), Value>>,
    next_id: AtomicU64,
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn get_document(&self, collection: &str, doc: &str) -> ApiResult<Option<Value>> {
        let docs = self.docs.lock().unwrap();
        Ok(docs.get(&(collection.to_string(), doc.to_string())).cloned())
    }

    async fn set_document(&self, collection: &str, doc: &str, fields: Value) -> ApiResult<()> {
        let mut docs = self.docs.lock().unwrap();
        docs.insert((collection.to_string(), doc.to_string()), fields);
        Ok(())
    }

    async fn add_document(&self, collection: &str, fields: Value) -> ApiResult<String> {
        let id = format!("doc-{}", self.next_id.fetch_add(1, Ordering::Relaxed));
        let mut docs = self.docs.lock().unwrap();
        docs.insert((collection.to_string(), id.clone()), fields);
        Ok(id)
    }

    async fn list_documents(
        &self,
        collection: &str,
        order_by: &str,
        descending: bool,
    ) -> ApiResult<Vec<(String, Value)>> {
        let docs = self.docs.lock().unwrap();
        let mut entries: Vec<(String, Value)> = docs
            .iter()
            .filter(|((c, _), _)| c == collection)
            .map(|((_, id), v)| (id.clone(), v.clone()))
            .collect();
        entries.sort_by_key(|(_, v)| {
            v.get(order_by)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        });
        if descending {
            entries.reverse();
        }
        Ok(entries)
    }
}

/// Stub CDN that "stores" nothing and answers with a deterministic URL.
pub struct StubCdn;

#[async_trait]
impl MediaStore for StubCdn {
    async fn upload(
        &self,
        file_name: &str,
        _content_type: &str,
        _bytes: Vec<u8>,
    ) -> ApiResult<String> {
        Ok(format!("https://cdn.example.com/{}", file_name))
    }
}

pub fn test_auth_config() -> AuthConfig {
    AuthConfig {
        session_secret: "integration-test-secret".to_string(),
        admin_password: TEST_PASSWORD.to_string(),
        token_duration_days: 7,
        cookie_name: "session".to_string(),
    }
}

pub fn test_state() -> AppState {
    AppState::new(
        test_auth_config(),
        Arc::new(MemoryStore::default()),
        Arc::new(StubCdn),
    )
}

pub fn test_app() -> Router {
    build_router(test_state())
}

/// Router plus its state, for tests that need to mint tokens or seed the
/// store directly.
pub fn test_app_with_state() -> (Router, AppState) {
    let state = test_state();
    (build_router(state.clone()), state)
}

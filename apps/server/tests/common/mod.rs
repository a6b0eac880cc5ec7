//! Shared fixtures for the router tests: a scripted fake store and an app
//! wired exactly as `build_state` wires production, minus the network.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration as StdDuration;

use async_trait::async_trait;
use axum::{body::Body, http::Response, Router};
use chrono::Duration;
use serde_json::Value;

use fundamentals_core::financials::FinancialsService;
use fundamentals_server::{api::app_router, config::Config, AppState};
use fundamentals_store::{StoreError, TableQuery, TableStore};

pub struct FakeStore {
    responses: Mutex<VecDeque<Result<Vec<Value>, StoreError>>>,
}

impl FakeStore {
    pub fn new(responses: Vec<Result<Vec<Value>, StoreError>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
        })
    }
}

#[async_trait]
impl TableStore for FakeStore {
    async fn query(&self, _query: &TableQuery) -> Result<Vec<Value>, StoreError> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected extra store query")
    }
}

pub fn test_config() -> Config {
    Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        supabase_url: "http://localhost".to_string(),
        supabase_service_role_key: "test-key".to_string(),
        cors_allow: vec!["*".to_string()],
        cache_ttl_minutes: 1440,
        request_timeout: StdDuration::from_secs(5),
    }
}

pub fn test_app(responses: Vec<Result<Vec<Value>, StoreError>>) -> Router {
    let config = test_config();
    let service = FinancialsService::new(
        FakeStore::new(responses),
        Duration::minutes(config.cache_ttl_minutes),
    );
    let state = Arc::new(AppState {
        financials_service: Arc::new(service),
    });
    app_router(state, &config)
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

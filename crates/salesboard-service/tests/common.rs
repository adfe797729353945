//! Common test utilities for salesboard integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;
use serde_json::json;
use tempfile::TempDir;

use salesboard_service::{create_router, AppState, ServiceConfig};
use salesboard_store::RocksStore;

/// Test harness containing everything needed for integration tests.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// Temporary directory for the database (kept alive for test duration).
    pub _temp_dir: TempDir,
}

impl TestHarness {
    /// Create a new test harness with a fresh database.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let store = RocksStore::open(temp_dir.path()).expect("Failed to open store");

        let config = ServiceConfig {
            listen_addr: "127.0.0.1:0".into(),
            data_dir: temp_dir.path().to_string_lossy().to_string(),
            cors_origins: vec!["*".into()],
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 30,
        };

        let state = AppState::new(Arc::new(store), config);
        let router: Router = create_router(state);

        let server = TestServer::new(router).expect("Failed to create test server");

        Self {
            server,
            _temp_dir: temp_dir,
        }
    }

    /// Create a sale via the API and return its JSON body.
    pub async fn create_sale(&self, body: serde_json::Value) -> serde_json::Value {
        let response = self.server.post("/api/sales").json(&body).await;
        response.assert_status(axum::http::StatusCode::CREATED);
        response.json()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// A well-formed create-sale body with overridable fields.
pub fn sale_body(region: &str, rep: &str, amount: f64, date: &str) -> serde_json::Value {
    json!({
        "product": "Widget",
        "amount": amount,
        "region": region,
        "customer": "Acme Corp",
        "salesRep": rep,
        "date": date,
        "category": "Hardware",
        "profit": amount * 0.3,
        "cost": amount * 0.7,
    })
}

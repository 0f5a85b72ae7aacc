//! Common test utilities for integration tests
//!
//! Every test gets its own router over a fresh store seeded with the
//! demo accounts (`1` = admin, `2` = user).

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use serde_json::Value;
use tower::Service as _;
use userhub_api::app::{build_router, AppState};
use userhub_api::config::Config;
use userhub_shared::service::UserService;
use userhub_shared::store::UserStore;
use uuid::Uuid;

/// Test context containing the router under test
pub struct TestContext {
    pub app: axum::Router,
    pub config: Config,
}

impl TestContext {
    /// Creates a context over the demo store and default config
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates a context over the demo store with custom config
    pub fn with_config(config: Config) -> Self {
        let state = AppState::new(UserService::new(UserStore::with_demo_users()), config.clone());
        let app = build_router(state);

        Self { app, config }
    }

    /// Sends a request without a body
    pub async fn send(&self, method: &str, uri: &str) -> Response<Body> {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        self.app.clone().call(request).await.unwrap()
    }

    /// Sends a request with a JSON body
    pub async fn send_json(&self, method: &str, uri: &str, body: &Value) -> Response<Body> {
        self.send_raw_json(method, uri, body.to_string()).await
    }

    /// Sends a request with an arbitrary body labelled as JSON
    pub async fn send_raw_json(&self, method: &str, uri: &str, body: String) -> Response<Body> {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();

        self.app.clone().call(request).await.unwrap()
    }

    /// GETs `uri`, asserting the status, and returns the JSON body
    pub async fn get_json(&self, uri: &str, expected: StatusCode) -> Value {
        let response = self.send("GET", uri).await;
        expect_json(response, expected).await
    }
}

/// Reads the body as text
pub async fn body_text(response: Response<Body>) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8_lossy(&body).into_owned()
}

/// Asserts the status and parses the body as JSON
///
/// Prints the body on a status mismatch.
pub async fn expect_json(response: Response<Body>, expected: StatusCode) -> Value {
    let status = response.status();
    let text = body_text(response).await;

    if status != expected {
        panic!("Expected {}, got {}: {}", expected, status, text);
    }

    serde_json::from_str(&text).unwrap()
}

/// Returns a username no other test uses
pub fn unique_username() -> String {
    format!("user_{}", &Uuid::new_v4().simple().to_string()[..12])
}

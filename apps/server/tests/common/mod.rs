//! Common test utilities and fixtures for integration tests.
//!
//! Sessions live in memory, so these tests need no external services.

pub mod fixtures;

use std::time::Duration;

use axum::Router;
use axum_test::TestServer;
use serde_json::Value;

use cafe_server::config::Config;
use cafe_server::{app, AppState};

/// Test context holding the shared state and router.
pub struct TestContext {
    pub state: AppState,
    app: Router,
}

impl TestContext {
    /// Create a test context with no mix delay.
    pub fn new() -> Self {
        Self::with_mix_delay(Duration::ZERO)
    }

    /// Create a test context with a custom Room 2 mix delay.
    pub fn with_mix_delay(mix_delay: Duration) -> Self {
        Self::with_config(Config {
            mix_delay,
            ..test_config()
        })
    }

    /// Create a test context whose sessions expire after `session_ttl` idle.
    pub fn with_session_ttl(session_ttl: Duration) -> Self {
        Self::with_config(Config {
            session_ttl,
            ..test_config()
        })
    }

    pub fn with_config(config: Config) -> Self {
        let state = AppState::new(config);
        let app = app(state.clone());
        Self { state, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).unwrap()
    }
}

fn test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        mix_delay: Duration::ZERO,
        ..Config::default()
    }
}

/// Open a session for a room and return its id.
pub async fn open_session(server: &TestServer, room: &str) -> String {
    let response = server.post(&format!("/api/rooms/{}/sessions", room)).await;
    response.assert_status(axum::http::StatusCode::CREATED);
    let body: Value = response.json();
    body["session_id"].as_str().unwrap().to_string()
}

/// POST a gesture to a session endpoint.
pub async fn gesture(
    server: &TestServer,
    session_id: &str,
    action: &str,
    body: Option<Value>,
) -> axum_test::TestResponse {
    let request = server.post(&format!("/api/sessions/{}/{}", session_id, action));
    match body {
        Some(body) => request.json(&body).await,
        None => request.await,
    }
}

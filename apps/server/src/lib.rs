pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::services::sessions::SessionStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionStore>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            sessions: Arc::new(SessionStore::new(config.session_ttl)),
            config: Arc::new(config),
        }
    }
}

/// Build the full router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Session routes
        .route("/api/rooms/:room/sessions", post(routes::sessions::create))
        .route(
            "/api/sessions/:id",
            get(routes::sessions::get).delete(routes::sessions::delete),
        )
        // Rooms 1 and 3
        .route("/api/sessions/:id/assign", post(routes::matching::assign))
        .route("/api/sessions/:id/unassign", post(routes::matching::unassign))
        .route("/api/sessions/:id/submit", post(routes::matching::submit))
        .route("/api/sessions/:id/reset", post(routes::matching::reset))
        .route("/api/sessions/:id/hints", post(routes::matching::toggle_hints))
        // Room 2
        .route("/api/sessions/:id/select", post(routes::mixing::select))
        .route("/api/sessions/:id/clear", post(routes::mixing::clear))
        .route("/api/sessions/:id/mix", post(routes::mixing::mix))
        // Final page
        .route("/api/dish/options", get(routes::dish::options))
        .route("/api/dish/export", post(routes::dish::export))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let addr = config.addr();
    tracing::info!(
        "Mix delay set to {:?}, session TTL {:?}",
        config.mix_delay,
        config.session_ttl
    );

    let state = AppState::new(config);
    spawn_session_sweeper(state.sessions.clone());
    let app = app(state);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Periodically evict sessions left idle by clients that never deleted them.
fn spawn_session_sweeper(sessions: Arc<SessionStore>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(sessions.ttl());
        loop {
            interval.tick().await;
            match sessions.purge_expired() {
                Ok(0) => {}
                Ok(purged) => tracing::info!("Evicted {} idle sessions", purged),
                Err(err) => tracing::error!("Session sweep failed: {}", err),
            }
        }
    });
}

async fn health_check() -> &'static str {
    "OK"
}

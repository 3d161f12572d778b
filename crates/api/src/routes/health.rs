use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the key-value database is reachable.
    pub db_healthy: bool,
    /// Record counts held by the in-memory store.
    pub store: StoreCounts,
}

#[derive(Serialize)]
pub struct StoreCounts {
    pub projects: usize,
    pub users: usize,
    pub investments: usize,
    /// Whether a user is currently logged in.
    pub session_active: bool,
}

/// GET /health -- returns service, database and store health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = aethera_db::health_check(state.store.pool()).await.is_ok();

    let store = state
        .store
        .read(|s| StoreCounts {
            projects: s.projects.len(),
            users: s.users.len(),
            investments: s.investments.len(),
            session_active: s.session.is_some(),
        })
        .await;

    let status = if db_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        store,
    })
}

/// Mount health check routes (root level, not under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

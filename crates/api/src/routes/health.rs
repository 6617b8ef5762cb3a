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
    /// Whether the database is reachable.
    pub db_healthy: bool,
    /// Whether the estimation models loaded at startup.
    pub models_ready: bool,
}

#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

/// GET / -- liveness banner.
async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "API Sanggar Alam aktif",
    })
}

/// GET /health -- returns service, database and model health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = sanggar_db::health_check(&state.pool).await.is_ok();
    let models_ready = state.models.is_ready();

    let status = if db_healthy && models_ready {
        "ok"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        models_ready,
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}

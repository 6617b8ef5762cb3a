//! Aggregate reports over the estimate history.

use axum::routing::get;
use axum::Router;

use crate::handlers::analytics;
use crate::state::AppState;

/// Analytics routes mounted at `/analitik`.
///
/// ```text
/// GET /ringkasan       -> summary
/// GET /jenis-proyek    -> by_project_type
/// GET /bulanan         -> by_month
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/ringkasan", get(analytics::summary))
        .route("/jenis-proyek", get(analytics::by_project_type))
        .route("/bulanan", get(analytics::by_month))
}

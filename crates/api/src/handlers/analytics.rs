//! Handlers for `/analitik/*` aggregate reports.
//!
//! Every report covers the full history; there is no filtering.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use sanggar_db::repositories::HistoryRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /analitik/ringkasan
pub async fn summary(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let summary = HistoryRepo::summary(&state.pool).await?;
    Ok(Json(DataResponse { data: summary }))
}

/// GET /analitik/jenis-proyek
pub async fn by_project_type(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let counts = HistoryRepo::count_by_project_type(&state.pool).await?;
    Ok(Json(DataResponse { data: counts }))
}

/// GET /analitik/bulanan
pub async fn by_month(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let counts = HistoryRepo::count_by_month(&state.pool).await?;
    Ok(Json(DataResponse { data: counts }))
}

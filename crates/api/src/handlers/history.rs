use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use sanggar_db::repositories::HistoryRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /histori -- every stored estimate, most recent first.
pub async fn list_history(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let records = HistoryRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: records }))
}

//! Handler for `POST /estimasi`.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use sanggar_core::estimation::{self, EstimateInput, EstimateResult};
use sanggar_core::types::DbId;
use sanggar_db::models::history::NewHistoryRecord;
use sanggar_db::repositories::HistoryRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// An estimate together with the identity of its history record.
#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    pub id: DbId,
    pub tanggal: String,
    #[serde(flatten)]
    pub estimate: EstimateResult,
}

/// Compute an estimate, record it, and return both.
///
/// Fails fast with 503 when the models never loaded. Nothing is persisted
/// unless the estimate succeeds.
pub async fn create_estimate(
    State(state): State<AppState>,
    payload: Result<Json<EstimateInput>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let models = state.models.models()?;

    let Json(input) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let request = input.into_request()?;
    let estimate = estimation::estimate(&request, models)?;

    let record =
        HistoryRepo::append(&state.pool, &NewHistoryRecord::from_estimate(&request, &estimate))
            .await?;

    tracing::info!(
        record_id = record.id,
        project_type = %record.project_type,
        duration_days = record.duration_days,
        crew_size = record.crew_size,
        final_price = record.final_price,
        "Estimate recorded",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: EstimateResponse {
                id: record.id,
                tanggal: record.created_at,
                estimate,
            },
        }),
    ))
}

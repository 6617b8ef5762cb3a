//! Tests for the JSON shape of every error response.

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use sanggar_api::error::AppError;
use sanggar_core::error::CoreError;
use serde_json::{json, Value};

async fn error_response(error: AppError) -> (StatusCode, Value) {
    let response = error.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn validation_error_returns_400() {
    let (status, json) = error_response(AppError::Core(CoreError::Validation(
        "missing required field: luas_m2".into(),
    )))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "missing required field: luas_m2");
    assert!(json.get("details").is_none());
}

#[tokio::test]
async fn unknown_category_returns_422_with_details() {
    let (status, json) = error_response(AppError::Core(CoreError::UnknownCategory {
        field: "jenis_proyek",
        value: "kincir".into(),
        allowed: vec!["gazebo".into(), "kolam".into(), "taman".into()],
    }))
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["code"], "UNKNOWN_CATEGORY");
    assert_eq!(
        json["error"],
        "Unknown jenis_proyek 'kincir', expected one of: gazebo, kolam, taman"
    );
    assert_eq!(
        json["details"],
        json!({"field": "jenis_proyek", "value": "kincir", "allowed": ["gazebo", "kolam", "taman"]})
    );
}

#[tokio::test]
async fn not_ready_returns_503_without_leaking_reason() {
    let (status, json) = error_response(AppError::Core(CoreError::NotReady(
        "/srv/models/model_durasi.json: No such file or directory".into(),
    )))
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["code"], "SERVICE_NOT_READY");
    assert_eq!(json["error"], "Estimation models are not loaded");
}

#[tokio::test]
async fn model_load_error_is_internal() {
    let (status, json) =
        error_response(AppError::Core(CoreError::ModelLoad("bad tree".into()))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn database_error_is_a_persistence_error() {
    let (status, json) = error_response(AppError::Database(sqlx::Error::PoolTimedOut)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "PERSISTENCE_ERROR");
    assert_eq!(json["error"], "The estimate history could not be accessed");
}

#[tokio::test]
async fn bad_request_passes_message_through() {
    let (status, json) = error_response(AppError::BadRequest("expected value".into())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "expected value");
}

#[test]
fn core_errors_convert_into_app_errors() {
    let err: AppError = CoreError::NotReady("x".into()).into();
    assert_matches!(err, AppError::Core(CoreError::NotReady(_)));

    let err: AppError = sqlx::Error::RowNotFound.into();
    assert_matches!(err, AppError::Database(sqlx::Error::RowNotFound));
}

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sanggar_core::model::{EstimationModels, ForestRegressor, LabelEncoder, ModelRegistry};
use sqlx::SqlitePool;
use tower::ServiceExt;

use sanggar_api::config::ServerConfig;
use sanggar_api::router::build_app_router;
use sanggar_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: "sqlite::memory:".to_string(),
        db_max_connections: 1,
        model_dir: PathBuf::from("./models"),
    }
}

/// Models that always predict 15 days and 3 workers, so every request prices
/// like the worked `kolam` example when given the same inputs.
pub fn fixture_models() -> EstimationModels {
    let duration =
        ForestRegressor::from_json(r#"{"trees": [{"nodes": [{"value": 15.0}]}]}"#).unwrap();
    let crew = ForestRegressor::from_json(
        r#"{"trees": [{"nodes": [{"value": 2.0}]}, {"nodes": [{"value": 4.0}]}]}"#,
    )
    .unwrap();

    EstimationModels::new(
        LabelEncoder::new(["gazebo", "kolam", "taman"]).unwrap(),
        LabelEncoder::new(["cerah", "hujan", "mendung"]).unwrap(),
        Box::new(duration),
        Box::new(crew),
    )
    .unwrap()
}

/// Full application router with ready fixture models.
pub fn build_test_app(pool: SqlitePool) -> Router {
    build_test_app_with(pool, ModelRegistry::ready(fixture_models()))
}

/// Full application router with the given model registry.
pub fn build_test_app_with(pool: SqlitePool, models: ModelRegistry) -> Router {
    let state = AppState {
        pool,
        models: Arc::new(models),
    };
    build_app_router(state, &test_config())
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: String) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

/// The worked example request: 30 m² kolam, detail 4, clear weather, 20 km.
pub fn kolam_request() -> serde_json::Value {
    serde_json::json!({
        "jenis_proyek": "kolam",
        "luas_m2": 30,
        "tingkat_detail": 4,
        "cuaca": "cerah",
        "jarak_km": 20
    })
}

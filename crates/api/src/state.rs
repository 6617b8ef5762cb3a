use std::sync::Arc;

use sanggar_core::model::ModelRegistry;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: inner data is behind `Arc` or is already `Clone`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: sanggar_db::DbPool,
    /// Encoders and regressors, loaded once at startup.
    pub models: Arc<ModelRegistry>,
}

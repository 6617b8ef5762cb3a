pub mod admin;
pub mod analytics;
pub mod estimation;
pub mod health;
pub mod history;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// /estimasi                    POST  compute, persist and return an estimate
/// /histori                     GET   all stored estimates, newest first
///
/// /analitik/ringkasan          GET   count, sum, avg, min, max of final price
/// /analitik/jenis-proyek       GET   counts per project type
/// /analitik/bulanan            GET   counts per YYYY-MM month
///
/// /admin                       GET   HTML history report
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(estimation::router())
        .merge(history::router())
        .nest("/analitik", analytics::router())
        .merge(admin::router())
}

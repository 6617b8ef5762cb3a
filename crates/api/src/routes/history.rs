use axum::routing::get;
use axum::Router;

use crate::handlers::history;
use crate::state::AppState;

/// ```text
/// GET /histori     -> list_history
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/histori", get(history::list_history))
}

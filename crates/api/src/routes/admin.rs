use axum::routing::get;
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// ```text
/// GET /admin       -> admin_page
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/admin", get(admin::admin_page))
}

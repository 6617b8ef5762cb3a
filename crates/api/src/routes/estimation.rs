use axum::routing::post;
use axum::Router;

use crate::handlers::estimation;
use crate::state::AppState;

/// ```text
/// POST /estimasi   -> create_estimate
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/estimasi", post(estimation::create_estimate))
}

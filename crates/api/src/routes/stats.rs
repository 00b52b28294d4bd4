//! Route definitions for the `/api/stats` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::stats;
use crate::state::AppState;

/// Routes mounted at `/stats`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/summary", get(stats::summary))
        .route("/by-year", get(stats::by_year))
}

//! Route definitions for the `/api/movies` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

/// Routes mounted at `/movies`.
///
/// ```text
/// GET    /            -> list (filters + cursor, newest first)
/// POST   /            -> create
/// GET    /top-rated   -> top_rated
/// GET    /years       -> years
/// GET    /genres      -> genres
/// GET    /{id}        -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movies::list).post(movies::create))
        .route("/top-rated", get(movies::top_rated))
        .route("/years", get(movies::years))
        .route("/genres", get(movies::genres))
        .route("/{id}", get(movies::get_by_id))
}

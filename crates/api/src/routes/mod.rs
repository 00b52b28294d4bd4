pub mod health;
pub mod movies;
pub mod stats;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /movies              list, create
/// /movies/top-rated    rating-ordered listing
/// /movies/years        distinct years
/// /movies/genres       distinct genres
/// /movies/{id}         single movie
/// /stats/summary       dashboard summary
/// /stats/by-year       counts per year
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/movies", movies::router())
        .nest("/stats", stats::router())
}

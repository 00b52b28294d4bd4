//! Handlers for the `/api/stats` resource.

use axum::extract::State;
use axum::Json;

use cinedex_db::models::stats::YearCount;

use crate::error::AppResult;
use crate::response::SummaryStats;
use crate::state::AppState;

/// Number of genres shown in the summary leaderboard.
const TOP_GENRES: usize = 5;

/// GET /api/stats/summary — dashboard headline numbers.
pub async fn summary(State(state): State<AppState>) -> AppResult<Json<SummaryStats>> {
    let total_movies = state.store.count().await?;
    let average_rating = state.store.average_rating().await?;
    let mut by_genre = state.store.counts_by_genre().await?;

    let total_genres = by_genre.len() as i64;
    by_genre.truncate(TOP_GENRES);

    Ok(Json(SummaryStats {
        total_movies,
        average_rating: round2(average_rating),
        total_genres,
        top_genres: by_genre,
    }))
}

/// GET /api/stats/by-year — movie counts per release year.
pub async fn by_year(State(state): State<AppState>) -> AppResult<Json<Vec<YearCount>>> {
    Ok(Json(state.store.counts_by_year().await?))
}

/// Ratings are presented with two decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

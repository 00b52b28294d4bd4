//! Response payload types for the HTTP surface.

use serde::Serialize;

use cinedex_core::pagination::Page;
use cinedex_db::models::movie::Movie;
use cinedex_db::models::stats::GenreCount;

/// One page of movies plus pagination state.
#[derive(Debug, Serialize)]
pub struct MovieListResponse {
    pub movies: Vec<Movie>,
    pub next_cursor: Option<String>,
    pub has_more: bool,
    pub limit: i64,
}

impl From<Page<Movie>> for MovieListResponse {
    fn from(page: Page<Movie>) -> Self {
        Self {
            movies: page.items,
            next_cursor: page.next_cursor,
            has_more: page.has_more,
            limit: page.limit,
        }
    }
}

/// Dashboard summary statistics. Field names follow the UI contract.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub total_movies: i64,
    pub average_rating: f64,
    pub total_genres: i64,
    pub top_genres: Vec<GenreCount>,
}

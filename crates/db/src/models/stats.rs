//! Aggregate statistic DTOs.

use serde::Serialize;
use sqlx::FromRow;

/// Number of movies carrying one genre.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GenreCount {
    pub name: String,
    pub count: i64,
}

/// Number of movies released in one year.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct YearCount {
    pub year: i32,
    pub count: i64,
}

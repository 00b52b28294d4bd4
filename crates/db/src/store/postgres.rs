//! Postgres movie store.
//!
//! Keyset pagination maps directly onto composite row comparisons, so both
//! listing orders stay index range scans (see `migrations/`).

use sqlx::{PgPool, Postgres, QueryBuilder};

use cinedex_core::cursor::Cursor;
use cinedex_core::filter::MovieFilters;
use cinedex_core::ordering::ListMode;
use cinedex_core::types::MovieId;

use super::{ensure_position_mode, MovieStore, StoreError};
use crate::models::movie::{CreateMovie, Movie};
use crate::models::stats::{GenreCount, YearCount};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, genre, rating, year, created_at, updated_at";

pub struct PgMovieStore {
    pool: PgPool,
}

impl PgMovieStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl MovieStore for PgMovieStore {
    async fn insert(&self, input: &CreateMovie) -> Result<Movie, StoreError> {
        input.validate()?;

        let query = format!(
            "INSERT INTO movies (title, genre, rating, year)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let movie = sqlx::query_as::<_, Movie>(&query)
            .bind(input.title.trim())
            .bind(input.genre.trim())
            .bind(input.rating)
            .bind(input.year)
            .fetch_one(&self.pool)
            .await?;
        Ok(movie)
    }

    async fn get(&self, id: MovieId) -> Result<Option<Movie>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        let movie = sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(movie)
    }

    async fn query(
        &self,
        filters: &MovieFilters,
        mode: ListMode,
        position: Option<&Cursor>,
        fetch_limit: i64,
    ) -> Result<Vec<Movie>, StoreError> {
        ensure_position_mode(position, mode)?;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {COLUMNS} FROM movies WHERE 1=1"));

        if let Some(genre) = &filters.genre {
            builder.push(" AND genre = ").push_bind(genre);
        }
        if let Some(min_rating) = filters.min_rating {
            builder.push(" AND rating >= ").push_bind(min_rating);
        }
        if let Some(year) = filters.year {
            builder.push(" AND year = ").push_bind(year);
        }
        if let Some(title) = &filters.title {
            builder
                .push(" AND title ILIKE ")
                .push_bind(format!("%{}%", escape_like(title)));
        }

        match position {
            None => {}
            Some(&Cursor::Recency { created_at, id }) => {
                builder
                    .push(" AND (created_at, id) < (")
                    .push_bind(created_at)
                    .push(", ")
                    .push_bind(id)
                    .push(")");
            }
            Some(&Cursor::Rating { rating, id }) => {
                builder
                    .push(" AND (rating, id) < (")
                    .push_bind(rating)
                    .push(", ")
                    .push_bind(id)
                    .push(")");
            }
        }

        match mode {
            ListMode::Recency => builder.push(" ORDER BY created_at DESC, id DESC"),
            ListMode::TopRated => builder.push(" ORDER BY rating DESC, id DESC"),
        };
        builder.push(" LIMIT ").push_bind(fetch_limit);

        let rows = builder
            .build_query_as::<Movie>()
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn distinct_genres(&self) -> Result<Vec<String>, StoreError> {
        let genres = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT genre FROM movies ORDER BY genre ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(genres)
    }

    async fn distinct_years(&self) -> Result<Vec<i32>, StoreError> {
        let years =
            sqlx::query_scalar::<_, i32>("SELECT DISTINCT year FROM movies ORDER BY year DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(years)
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM movies")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn average_rating(&self) -> Result<f64, StoreError> {
        let avg = sqlx::query_scalar::<_, Option<f64>>("SELECT AVG(rating) FROM movies")
            .fetch_one(&self.pool)
            .await?;
        Ok(avg.unwrap_or(0.0))
    }

    async fn counts_by_genre(&self) -> Result<Vec<GenreCount>, StoreError> {
        let rows = sqlx::query_as::<_, GenreCount>(
            "SELECT genre AS name, COUNT(*) AS count FROM movies
             GROUP BY genre
             ORDER BY count DESC, genre ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn counts_by_year(&self) -> Result<Vec<YearCount>, StoreError> {
        let rows = sqlx::query_as::<_, YearCount>(
            "SELECT year, COUNT(*) AS count FROM movies
             GROUP BY year
             ORDER BY year DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}

/// Escape LIKE metacharacters so the title filter is a literal substring
/// match, not a pattern.
fn escape_like(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

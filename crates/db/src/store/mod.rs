//! The movie store capability.
//!
//! The listing engine and the HTTP handlers only ever see this trait;
//! implementations decide where the rows live. `memory` backs tests and the
//! no-database development mode, `postgres` is the durable store.

pub mod memory;
pub mod postgres;

pub use memory::MemoryMovieStore;
pub use postgres::PgMovieStore;

use async_trait::async_trait;

use cinedex_core::cursor::Cursor;
use cinedex_core::error::CoreError;
use cinedex_core::filter::MovieFilters;
use cinedex_core::ordering::ListMode;
use cinedex_core::types::MovieId;

use crate::models::movie::{CreateMovie, Movie};
use crate::models::stats::{GenreCount, YearCount};

/// Storage-level failure.
///
/// `Invalid` carries a domain rejection raised before any write; the other
/// variants are internal faults and map to a 500 at the HTTP boundary.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Invalid(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Store error: {0}")]
    Internal(String),
}

/// Collection of movie records with create/read and aggregate operations.
///
/// `query` must honor the mode's total order and the strictly-after position
/// bound; `insert` must be atomic with respect to concurrent queries (a
/// partially written movie is never visible).
#[async_trait]
pub trait MovieStore: Send + Sync {
    /// Insert a new movie, assigning id and timestamps. Fails with
    /// `StoreError::Invalid` when any field is missing or out of range,
    /// without writing anything.
    async fn insert(&self, input: &CreateMovie) -> Result<Movie, StoreError>;

    /// Fetch a single movie by id.
    async fn get(&self, id: MovieId) -> Result<Option<Movie>, StoreError>;

    /// Fetch up to `fetch_limit` movies matching `filters`, ordered by
    /// `mode`, strictly after `position` when one is given.
    async fn query(
        &self,
        filters: &MovieFilters,
        mode: ListMode,
        position: Option<&Cursor>,
        fetch_limit: i64,
    ) -> Result<Vec<Movie>, StoreError>;

    /// All distinct genres, ascending.
    async fn distinct_genres(&self) -> Result<Vec<String>, StoreError>;

    /// All distinct release years, descending.
    async fn distinct_years(&self) -> Result<Vec<i32>, StoreError>;

    /// Total number of movies.
    async fn count(&self) -> Result<i64, StoreError>;

    /// Mean rating across the whole catalog, `0.0` when empty.
    async fn average_rating(&self) -> Result<f64, StoreError>;

    /// Movie counts per genre, ordered by count descending then name.
    async fn counts_by_genre(&self) -> Result<Vec<GenreCount>, StoreError>;

    /// Movie counts per release year, newest year first.
    async fn counts_by_year(&self) -> Result<Vec<YearCount>, StoreError>;
}

/// A position bound decoded for one mode must never reach a query running in
/// the other mode; the decoder enforces this, so a mismatch here is a caller
/// bug surfaced as an internal error rather than silently wrong pages.
pub(crate) fn ensure_position_mode(
    position: Option<&Cursor>,
    mode: ListMode,
) -> Result<(), StoreError> {
    match position {
        Some(cursor) if cursor.mode() != mode => Err(StoreError::Internal(format!(
            "{} cursor used with {} listing",
            cursor.mode(),
            mode
        ))),
        _ => Ok(()),
    }
}

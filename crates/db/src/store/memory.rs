//! In-memory movie store.
//!
//! Backs the test suite and the no-database development mode. A single
//! `RwLock` over the record vector makes each insert atomic with respect to
//! concurrent queries.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use uuid::Uuid;

use cinedex_core::cursor::Cursor;
use cinedex_core::filter::MovieFilters;
use cinedex_core::ordering::{self, ListMode};
use cinedex_core::types::MovieId;

use super::{ensure_position_mode, MovieStore, StoreError};
use crate::models::movie::{CreateMovie, Movie};
use crate::models::stats::{GenreCount, YearCount};

#[derive(Default)]
pub struct MemoryMovieStore {
    movies: RwLock<Vec<Movie>>,
}

impl MemoryMovieStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with existing records (fixtures, imports).
    /// Records are taken as-is, without validation.
    pub fn from_records(movies: Vec<Movie>) -> Self {
        Self {
            movies: RwLock::new(movies),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Movie>>, StoreError> {
        self.movies
            .read()
            .map_err(|_| StoreError::Internal("movie store lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Movie>>, StoreError> {
        self.movies
            .write()
            .map_err(|_| StoreError::Internal("movie store lock poisoned".into()))
    }
}

#[async_trait::async_trait]
impl MovieStore for MemoryMovieStore {
    async fn insert(&self, input: &CreateMovie) -> Result<Movie, StoreError> {
        input.validate()?;

        let mut movies = self.write()?;
        // Timestamp assigned under the write lock, so created_at is
        // non-decreasing in insertion order.
        let now = Utc::now();
        let movie = Movie {
            id: Uuid::now_v7(),
            title: input.title.trim().to_string(),
            genre: input.genre.trim().to_string(),
            rating: input.rating,
            year: input.year,
            created_at: now,
            updated_at: now,
        };
        movies.push(movie.clone());
        Ok(movie)
    }

    async fn get(&self, id: MovieId) -> Result<Option<Movie>, StoreError> {
        let movies = self.read()?;
        Ok(movies.iter().find(|m| m.id == id).cloned())
    }

    async fn query(
        &self,
        filters: &MovieFilters,
        mode: ListMode,
        position: Option<&Cursor>,
        fetch_limit: i64,
    ) -> Result<Vec<Movie>, StoreError> {
        ensure_position_mode(position, mode)?;

        let movies = self.read()?;
        let mut rows: Vec<Movie> = movies
            .iter()
            .filter(|m| filters.matches(&m.title, &m.genre, m.rating, m.year))
            .filter(|m| match position {
                None => true,
                Some(&Cursor::Recency { created_at, id }) => {
                    ordering::after_recency((created_at, id), (m.created_at, m.id))
                }
                Some(&Cursor::Rating { rating, id }) => {
                    ordering::after_rating((rating, id), (m.rating, m.id))
                }
            })
            .cloned()
            .collect();

        match mode {
            ListMode::Recency => rows.sort_unstable_by(|a, b| {
                ordering::cmp_recency((a.created_at, a.id), (b.created_at, b.id))
            }),
            ListMode::TopRated => {
                rows.sort_unstable_by(|a, b| ordering::cmp_rating((a.rating, a.id), (b.rating, b.id)))
            }
        }

        rows.truncate(usize::try_from(fetch_limit).unwrap_or(0));
        Ok(rows)
    }

    async fn distinct_genres(&self) -> Result<Vec<String>, StoreError> {
        let movies = self.read()?;
        let genres: BTreeSet<String> = movies.iter().map(|m| m.genre.clone()).collect();
        Ok(genres.into_iter().collect())
    }

    async fn distinct_years(&self) -> Result<Vec<i32>, StoreError> {
        let movies = self.read()?;
        let years: BTreeSet<i32> = movies.iter().map(|m| m.year).collect();
        Ok(years.into_iter().rev().collect())
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let movies = self.read()?;
        Ok(movies.len() as i64)
    }

    async fn average_rating(&self) -> Result<f64, StoreError> {
        let movies = self.read()?;
        if movies.is_empty() {
            return Ok(0.0);
        }
        let sum: f64 = movies.iter().map(|m| m.rating).sum();
        Ok(sum / movies.len() as f64)
    }

    async fn counts_by_genre(&self) -> Result<Vec<GenreCount>, StoreError> {
        let movies = self.read()?;
        let mut counts: BTreeMap<String, i64> = BTreeMap::new();
        for movie in movies.iter() {
            *counts.entry(movie.genre.clone()).or_default() += 1;
        }
        let mut rows: Vec<GenreCount> = counts
            .into_iter()
            .map(|(name, count)| GenreCount { name, count })
            .collect();
        // BTreeMap already yields names ascending; a stable sort on count
        // keeps that as the tie order.
        rows.sort_by(|a, b| b.count.cmp(&a.count));
        Ok(rows)
    }

    async fn counts_by_year(&self) -> Result<Vec<YearCount>, StoreError> {
        let movies = self.read()?;
        let mut counts: BTreeMap<i32, i64> = BTreeMap::new();
        for movie in movies.iter() {
            *counts.entry(movie.year).or_default() += 1;
        }
        Ok(counts
            .into_iter()
            .rev()
            .map(|(year, count)| YearCount { year, count })
            .collect())
    }
}

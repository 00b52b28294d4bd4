//! Movie entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use cinedex_core::cursor::Cursor;
use cinedex_core::error::CoreError;
use cinedex_core::filter::{MAX_RATING, MAX_YEAR, MIN_RATING, MIN_YEAR};
use cinedex_core::ordering::ListMode;
use cinedex_core::types::{MovieId, Timestamp};

/// A row from the `movies` table. Movies are immutable after creation.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub genre: String,
    pub rating: f64,
    pub year: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Movie {
    /// The pagination position of this row in the given listing order.
    pub fn position(&self, mode: ListMode) -> Cursor {
        match mode {
            ListMode::Recency => Cursor::Recency {
                created_at: self.created_at,
                id: self.id,
            },
            ListMode::TopRated => Cursor::Rating {
                rating: self.rating,
                id: self.id,
            },
        }
    }
}

/// DTO for creating a new movie.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMovie {
    pub title: String,
    pub genre: String,
    pub rating: f64,
    pub year: i32,
}

impl CreateMovie {
    /// Check every field. Runs before any write, so a rejected create
    /// leaves no partial state behind.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.title.trim().is_empty() {
            return Err(CoreError::Validation("title must not be empty".into()));
        }
        if self.genre.trim().is_empty() {
            return Err(CoreError::Validation("genre must not be empty".into()));
        }
        if !self.rating.is_finite() || !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            return Err(CoreError::Validation(format!(
                "rating must be between {MIN_RATING} and {MAX_RATING}, got {}",
                self.rating
            )));
        }
        if !(MIN_YEAR..=MAX_YEAR).contains(&self.year) {
            return Err(CoreError::Validation(format!(
                "year must be between {MIN_YEAR} and {MAX_YEAR}, got {}",
                self.year
            )));
        }
        Ok(())
    }
}

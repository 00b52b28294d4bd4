//! Listing parameter validation and normalization.
//!
//! Raw query parameters become a typed [`MovieFilters`] plus an effective
//! page size, or a validation error. Out-of-range values are rejected rather
//! than clamped: a request either means exactly what it says or fails fast.

use serde::Deserialize;

use crate::error::CoreError;

/// Inclusive rating bounds, shared by stored movies and the `min_rating` filter.
pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 10.0;

/// Inclusive release-year bounds.
pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2100;

/// Page size bounds and default.
pub const MIN_LIMIT: i64 = 1;
pub const MAX_LIMIT: i64 = 100;
pub const DEFAULT_LIMIT: i64 = 10;

/// Raw listing parameters as they arrive on the query string.
///
/// Unknown parameters are dropped by the deserializer, not errors.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub genre: Option<String>,
    pub min_rating: Option<f64>,
    pub year: Option<i32>,
    pub title: Option<String>,
    pub cursor: Option<String>,
    pub limit: Option<i64>,
}

/// Normalized filter predicate. Every present field must hold (AND).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieFilters {
    /// Exact genre match.
    pub genre: Option<String>,
    /// Inclusive lower bound on rating.
    pub min_rating: Option<f64>,
    /// Exact release year match.
    pub year: Option<i32>,
    /// Case-insensitive substring match anywhere in the title.
    pub title: Option<String>,
}

impl MovieFilters {
    /// True when a movie with the given fields satisfies every present filter.
    pub fn matches(&self, title: &str, genre: &str, rating: f64, year: i32) -> bool {
        if let Some(want) = &self.genre {
            if genre != want {
                return false;
            }
        }
        if let Some(min) = self.min_rating {
            if rating < min {
                return false;
            }
        }
        if let Some(want) = self.year {
            if year != want {
                return false;
            }
        }
        if let Some(needle) = &self.title {
            if !title.to_lowercase().contains(&needle.to_lowercase()) {
                return false;
            }
        }
        true
    }
}

/// Validate raw listing parameters into a filter set and effective limit.
pub fn validate(params: &ListParams) -> Result<(MovieFilters, i64), CoreError> {
    let limit = validate_limit(params.limit)?;

    if let Some(min_rating) = params.min_rating {
        if !min_rating.is_finite() || !(MIN_RATING..=MAX_RATING).contains(&min_rating) {
            return Err(CoreError::Validation(format!(
                "min_rating must be between {MIN_RATING} and {MAX_RATING}, got {min_rating}"
            )));
        }
    }

    if let Some(year) = params.year {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(CoreError::Validation(format!(
                "year must be between {MIN_YEAR} and {MAX_YEAR}, got {year}"
            )));
        }
    }

    Ok((
        MovieFilters {
            genre: non_empty(params.genre.as_deref()),
            min_rating: params.min_rating,
            year: params.year,
            title: non_empty(params.title.as_deref()),
        },
        limit,
    ))
}

/// Resolve the effective page size: the default when absent, rejected
/// outside `[MIN_LIMIT, MAX_LIMIT]`.
pub fn validate_limit(limit: Option<i64>) -> Result<i64, CoreError> {
    match limit {
        None => Ok(DEFAULT_LIMIT),
        Some(l) if (MIN_LIMIT..=MAX_LIMIT).contains(&l) => Ok(l),
        Some(l) => Err(CoreError::Validation(format!(
            "limit must be between {MIN_LIMIT} and {MAX_LIMIT}, got {l}"
        ))),
    }
}

/// Empty and whitespace-only string parameters are treated as absent.
fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

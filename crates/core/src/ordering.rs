//! Total orders for the two listing modes.
//!
//! Each mode sorts on a primary key with the movie id as a secondary key.
//! The id tie-break makes the order strict: rows with equal `created_at` or
//! equal `rating` still have an unambiguous position, so a page boundary
//! never revisits or skips a row.

use std::cmp::Ordering;
use std::fmt;

use crate::types::{MovieId, Timestamp};

/// A named listing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMode {
    /// Newest first: `(created_at DESC, id DESC)`.
    Recency,
    /// Highest rated first: `(rating DESC, id DESC)`.
    TopRated,
}

impl ListMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Recency => "recency",
            Self::TopRated => "top-rated",
        }
    }
}

impl fmt::Display for ListMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compare two recency keys, descending on `(created_at, id)`.
pub fn cmp_recency(a: (Timestamp, MovieId), b: (Timestamp, MovieId)) -> Ordering {
    b.0.cmp(&a.0).then_with(|| b.1.cmp(&a.1))
}

/// Compare two rating keys, descending on `(rating, id)`.
///
/// Uses `total_cmp`; stored ratings are validated finite so the IEEE total
/// order and the numeric order agree.
pub fn cmp_rating(a: (f64, MovieId), b: (f64, MovieId)) -> Ordering {
    b.0.total_cmp(&a.0).then_with(|| b.1.cmp(&a.1))
}

/// True when `row` sorts strictly after `position` in recency order,
/// i.e. `(created_at, id) < (c0, id0)` component-wise for descending order.
pub fn after_recency(position: (Timestamp, MovieId), row: (Timestamp, MovieId)) -> bool {
    row.0 < position.0 || (row.0 == position.0 && row.1 < position.1)
}

/// True when `row` sorts strictly after `position` in rating order.
pub fn after_rating(position: (f64, MovieId), row: (f64, MovieId)) -> bool {
    row.0 < position.0 || (row.0 == position.0 && row.1 < position.1)
}

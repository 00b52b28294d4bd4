use crate::ordering::ListMode;
use crate::types::MovieId;

/// Domain-level error taxonomy.
///
/// Every variant is scoped to a single request: validation and cursor
/// failures reject the request without touching state, `NotFound` maps to a
/// 404 at the HTTP boundary.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: MovieId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Malformed cursor: {0}")]
    MalformedCursor(String),

    #[error("Cursor mode mismatch: expected a {expected} cursor, got a {found} cursor")]
    InvalidCursorMode { expected: ListMode, found: ListMode },
}

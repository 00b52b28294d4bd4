//! Opaque pagination cursors.
//!
//! A cursor pins the position of the last row a client saw in one specific
//! listing order. Tokens are URL-safe base64 over a small JSON object whose
//! field set identifies the mode, so a token minted for one listing can never
//! be silently reinterpreted by another.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;

use crate::error::CoreError;
use crate::ordering::ListMode;
use crate::types::{MovieId, Timestamp};

/// Resumption position in one listing order.
#[derive(Debug, Clone, PartialEq)]
pub enum Cursor {
    /// Position in the recency order.
    Recency { created_at: Timestamp, id: MovieId },
    /// Position in the rating order.
    Rating { rating: f64, id: MovieId },
}

/// Decoded wire shape. Exactly one sort-key field must be present.
#[derive(Debug, Deserialize)]
struct WireCursor {
    #[serde(default)]
    created_at: Option<Timestamp>,
    #[serde(default)]
    rating: Option<f64>,
    id: MovieId,
}

impl Cursor {
    /// The listing mode this cursor belongs to.
    pub fn mode(&self) -> ListMode {
        match self {
            Cursor::Recency { .. } => ListMode::Recency,
            Cursor::Rating { .. } => ListMode::TopRated,
        }
    }

    /// Encode into an opaque token safe for URL query parameters.
    pub fn encode(&self) -> String {
        let wire = match *self {
            Cursor::Recency { created_at, id } => {
                serde_json::json!({ "created_at": created_at, "id": id })
            }
            Cursor::Rating { rating, id } => {
                serde_json::json!({ "rating": rating, "id": id })
            }
        };
        URL_SAFE_NO_PAD.encode(wire.to_string())
    }

    /// Decode a client-supplied token for the given listing mode.
    ///
    /// Structurally unparseable tokens fail with `MalformedCursor`; a valid
    /// cursor that belongs to the other mode fails with `InvalidCursorMode`.
    /// Both are client errors and leave no state behind.
    pub fn decode(token: &str, mode: ListMode) -> Result<Self, CoreError> {
        let bytes = URL_SAFE_NO_PAD
            .decode(token)
            .map_err(|_| CoreError::MalformedCursor("token is not valid base64".into()))?;
        let wire: WireCursor = serde_json::from_slice(&bytes)
            .map_err(|_| CoreError::MalformedCursor("token does not decode to a cursor".into()))?;

        let cursor = match (wire.created_at, wire.rating) {
            (Some(created_at), None) => Cursor::Recency {
                created_at,
                id: wire.id,
            },
            (None, Some(rating)) => Cursor::Rating {
                rating,
                id: wire.id,
            },
            _ => {
                return Err(CoreError::MalformedCursor(
                    "token does not carry exactly one sort key".into(),
                ))
            }
        };

        if cursor.mode() != mode {
            return Err(CoreError::InvalidCursorMode {
                expected: mode,
                found: cursor.mode(),
            });
        }
        Ok(cursor)
    }
}

//! The listing engine: raw request parameters in, one page of movies out.
//!
//! Stateless per request. The store fetch is bounded to `limit + 1` rows;
//! the extra row only decides `has_more` and is never returned or used for
//! the next cursor.

use cinedex_core::cursor::Cursor;
use cinedex_core::filter::{self, ListParams};
use cinedex_core::ordering::ListMode;
use cinedex_core::pagination::{self, Page};

use crate::models::movie::Movie;
use crate::store::{MovieStore, StoreError};

/// Run one paginated listing request against the store.
///
/// Invalid filters and undecodable cursors surface as errors — a bad cursor
/// is never downgraded to "no cursor". A cursor pointing past the end of the
/// data set yields an empty page, not an error.
pub async fn list_movies(
    store: &dyn MovieStore,
    mode: ListMode,
    params: &ListParams,
) -> Result<Page<Movie>, StoreError> {
    let (filters, limit) = filter::validate(params)?;

    let position = match params.cursor.as_deref() {
        Some(token) => Some(Cursor::decode(token, mode)?),
        None => None,
    };

    let rows = store
        .query(&filters, mode, position.as_ref(), limit + 1)
        .await?;

    Ok(pagination::assemble(rows, limit, |movie| {
        movie.position(mode)
    }))
}

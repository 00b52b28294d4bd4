//! Page assembly for cursor-paginated listings.

use crate::cursor::Cursor;

/// One page of results plus the client's resumption token.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_cursor: Option<String>,
    pub has_more: bool,
    pub limit: i64,
}

/// Assemble a page from rows fetched with a `limit + 1` probe.
///
/// `rows` must already be filtered, positioned and ordered. The probe row
/// only signals that more data exists; the next cursor is derived from the
/// last row actually returned, never from the discarded probe.
pub fn assemble<T>(mut rows: Vec<T>, limit: i64, cursor_for: impl Fn(&T) -> Cursor) -> Page<T> {
    let page_size = usize::try_from(limit).unwrap_or(0);
    let has_more = rows.len() > page_size;
    rows.truncate(page_size);

    let next_cursor = if has_more {
        rows.last().map(|row| cursor_for(row).encode())
    } else {
        None
    };

    Page {
        items: rows,
        next_cursor,
        has_more,
        limit,
    }
}

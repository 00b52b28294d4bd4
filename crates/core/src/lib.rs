//! Domain core for the cinedex movie catalog.
//!
//! Pure logic only: the cursor codec, the ordering policy for each listing
//! mode, filter validation and page assembly. No I/O lives here — storage is
//! in `cinedex-db`, the HTTP surface in `cinedex-api`.

pub mod cursor;
pub mod error;
pub mod filter;
pub mod ordering;
pub mod pagination;
pub mod types;

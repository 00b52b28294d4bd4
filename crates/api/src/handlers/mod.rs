//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the listing engine and the movie store in
//! `cinedex_db` and map errors via [`AppError`](crate::error::AppError).

pub mod movies;
pub mod stats;

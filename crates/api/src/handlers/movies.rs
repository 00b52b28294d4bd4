//! Handlers for the `/api/movies` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use cinedex_core::error::CoreError;
use cinedex_core::filter::ListParams;
use cinedex_core::ordering::ListMode;
use cinedex_core::types::MovieId;
use cinedex_db::listing;
use cinedex_db::models::movie::{CreateMovie, Movie};

use crate::error::AppResult;
use crate::response::MovieListResponse;
use crate::state::AppState;

/// Pagination-only parameters for listings that take no filters.
#[derive(Debug, Deserialize)]
pub struct CursorParams {
    pub cursor: Option<String>,
    pub limit: Option<i64>,
}

/// GET /api/movies — filtered listing, newest first.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<MovieListResponse>> {
    let page = listing::list_movies(state.store.as_ref(), ListMode::Recency, &params).await?;
    Ok(Json(page.into()))
}

/// GET /api/movies/top-rated — rating order, cursor and limit only.
pub async fn top_rated(
    State(state): State<AppState>,
    Query(params): Query<CursorParams>,
) -> AppResult<Json<MovieListResponse>> {
    let params = ListParams {
        cursor: params.cursor,
        limit: params.limit,
        ..Default::default()
    };
    let page = listing::list_movies(state.store.as_ref(), ListMode::TopRated, &params).await?;
    Ok(Json(page.into()))
}

/// POST /api/movies — validates fully, then persists.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMovie>,
) -> AppResult<(StatusCode, Json<Movie>)> {
    let movie = state.store.insert(&input).await?;
    Ok((StatusCode::CREATED, Json(movie)))
}

/// GET /api/movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<MovieId>,
) -> AppResult<Json<Movie>> {
    let movie = state
        .store
        .get(id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Movie", id })?;
    Ok(Json(movie))
}

/// GET /api/movies/years — distinct release years, newest first.
pub async fn years(State(state): State<AppState>) -> AppResult<Json<Vec<i32>>> {
    Ok(Json(state.store.distinct_years().await?))
}

/// GET /api/movies/genres — distinct genres, ascending.
pub async fn genres(State(state): State<AppState>) -> AppResult<Json<Vec<String>>> {
    Ok(Json(state.store.distinct_genres().await?))
}

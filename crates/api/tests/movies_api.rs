//! HTTP surface tests for the `/api/movies` resource, driven through the
//! router with an in-memory store.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use cinedex_api::config::ServerConfig;
use cinedex_api::routes;
use cinedex_api::state::AppState;
use cinedex_db::store::MemoryMovieStore;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn test_app() -> Router {
    let config = ServerConfig {
        host: "127.0.0.1".into(),
        port: 0,
        cors_origins: vec![],
        request_timeout_secs: 30,
        database_url: None,
    };
    let state = AppState {
        store: Arc::new(MemoryMovieStore::new()),
        config: Arc::new(config),
    };
    Router::new()
        .merge(routes::health::router())
        .nest("/api", routes::api_routes())
        .with_state(state)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    // Axum's built-in extractor rejections are plain text, not JSON.
    let body = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    (status, body)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn post_movie(app: &Router, body: Value) -> (StatusCode, Value) {
    let request = Request::post("/api/movies")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn seed_movie(app: &Router, title: &str, genre: &str, rating: f64, year: i32) -> Value {
    let (status, body) = post_movie(
        app,
        json!({ "title": title, "genre": genre, "rating": rating, "year": year }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "seed failed: {body}");
    body
}

fn titles(page: &Value) -> Vec<String> {
    page["movies"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["title"].as_str().unwrap().to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_returns_201_with_assigned_fields() {
    let app = test_app();
    let (status, body) = post_movie(
        &app,
        json!({ "title": "Heat", "genre": "Crime", "rating": 8.3, "year": 1995 }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["title"], "Heat");
    assert_eq!(body["genre"], "Crime");
    assert_eq!(body["rating"], 8.3);
    assert_eq!(body["year"], 1995);
    assert!(body["id"].is_string());
    assert!(body["created_at"].is_string());
    assert!(body["updated_at"].is_string());
}

#[tokio::test]
async fn create_rejects_out_of_range_values_without_persisting() {
    let app = test_app();

    for body in [
        json!({ "title": "X", "genre": "Drama", "rating": 11.0, "year": 2020 }),
        json!({ "title": "X", "genre": "Drama", "rating": -0.5, "year": 2020 }),
        json!({ "title": "X", "genre": "Drama", "rating": 5.0, "year": 1899 }),
        json!({ "title": "", "genre": "Drama", "rating": 5.0, "year": 2020 }),
        json!({ "title": "X", "genre": "   ", "rating": 5.0, "year": 2020 }),
    ] {
        let (status, error) = post_movie(&app, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error["code"], "VALIDATION_ERROR");
    }

    let (_, page) = get(&app, "/api/movies").await;
    assert_eq!(page["movies"].as_array().unwrap().len(), 0);
}

// ---------------------------------------------------------------------------
// Get by id
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_by_id_round_trips() {
    let app = test_app();
    let created = seed_movie(&app, "Alien", "Horror", 8.5, 1979).await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = get(&app, &format!("/api/movies/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], created["id"]);
    assert_eq!(body["title"], "Alien");
}

#[tokio::test]
async fn unknown_id_is_404() {
    let app = test_app();
    let (status, body) = get(&app, "/api/movies/123e4567-e89b-12d3-a456-426614174000").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn non_uuid_id_is_a_client_error() {
    let app = test_app();
    let (status, _) = get(&app, "/api/movies/not-a-uuid").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_catalog_lists_cleanly() {
    let app = test_app();
    let (status, body) = get(&app, "/api/movies").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["movies"], json!([]));
    assert_eq!(body["next_cursor"], Value::Null);
    assert_eq!(body["has_more"], false);
    assert_eq!(body["limit"], 10);
}

#[tokio::test]
async fn listing_is_newest_first() {
    let app = test_app();
    seed_movie(&app, "First", "Drama", 5.0, 2000).await;
    seed_movie(&app, "Second", "Drama", 6.0, 2001).await;
    seed_movie(&app, "Third", "Drama", 7.0, 2002).await;

    let (_, body) = get(&app, "/api/movies").await;
    assert_eq!(titles(&body), vec!["Third", "Second", "First"]);
    assert_eq!(body["has_more"], false);
}

#[tokio::test]
async fn six_movies_limit_five_paginate_across_two_pages() {
    let app = test_app();
    for n in 1..=6 {
        seed_movie(&app, &format!("Movie {n}"), "Drama", 5.0, 2000).await;
    }

    let (_, first) = get(&app, "/api/movies?limit=5").await;
    assert_eq!(first["movies"].as_array().unwrap().len(), 5);
    assert_eq!(first["has_more"], true);
    let cursor = first["next_cursor"].as_str().expect("non-null cursor");

    let (_, second) = get(&app, &format!("/api/movies?limit=5&cursor={cursor}")).await;
    assert_eq!(second["movies"].as_array().unwrap().len(), 1);
    assert_eq!(titles(&second), vec!["Movie 1"]);
    assert_eq!(second["has_more"], false);
    assert_eq!(second["next_cursor"], Value::Null);
}

// ---------------------------------------------------------------------------
// Cursor failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn garbage_cursor_is_400_malformed() {
    let app = test_app();
    let (status, body) = get(&app, "/api/movies?cursor=@@garbage@@").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MALFORMED_CURSOR");
}

#[tokio::test]
async fn top_rated_cursor_is_rejected_by_default_listing() {
    let app = test_app();
    for n in 1..=3 {
        seed_movie(&app, &format!("Movie {n}"), "Drama", 5.0 + n as f64, 2000).await;
    }

    let (_, page) = get(&app, "/api/movies/top-rated?limit=2").await;
    let cursor = page["next_cursor"].as_str().expect("non-null cursor");

    let (status, body) = get(&app, &format!("/api/movies?cursor={cursor}")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_CURSOR_MODE");
}

#[tokio::test]
async fn recency_cursor_is_rejected_by_top_rated_listing() {
    let app = test_app();
    for n in 1..=3 {
        seed_movie(&app, &format!("Movie {n}"), "Drama", 5.0, 2000).await;
    }

    let (_, page) = get(&app, "/api/movies?limit=2").await;
    let cursor = page["next_cursor"].as_str().expect("non-null cursor");

    let (status, body) = get(&app, &format!("/api/movies/top-rated?cursor={cursor}")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_CURSOR_MODE");
}

// ---------------------------------------------------------------------------
// Parameter validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn out_of_range_limit_is_rejected() {
    let app = test_app();
    for limit in ["0", "101", "-3"] {
        let (status, body) = get(&app, &format!("/api/movies?limit={limit}")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "limit {limit} accepted");
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }
}

#[tokio::test]
async fn out_of_range_min_rating_is_rejected() {
    let app = test_app();
    let (status, body) = get(&app, "/api/movies?min_rating=10.5").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn non_numeric_min_rating_is_a_client_error() {
    let app = test_app();
    let (status, _) = get(&app, "/api/movies?min_rating=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_query_params_are_ignored() {
    let app = test_app();
    seed_movie(&app, "Heat", "Crime", 8.3, 1995).await;
    let (status, body) = get(&app, "/api/movies?sort=asc&page=3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["movies"].as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

#[tokio::test]
async fn genre_and_min_rating_combine_with_and_semantics() {
    let app = test_app();
    seed_movie(&app, "Heat", "Action", 8.3, 1995).await;
    seed_movie(&app, "Commando", "Action", 6.7, 1985).await;
    seed_movie(&app, "The Godfather", "Crime", 9.2, 1972).await;

    let (_, body) = get(&app, "/api/movies?genre=Action&min_rating=8").await;
    assert_eq!(titles(&body), vec!["Heat"]);
}

#[tokio::test]
async fn title_filter_matches_case_insensitive_substring() {
    let app = test_app();
    seed_movie(&app, "The Godfather", "Crime", 9.2, 1972).await;
    seed_movie(&app, "Goodfellas", "Crime", 8.7, 1990).await;

    let (_, body) = get(&app, "/api/movies?title=godfather").await;
    assert_eq!(titles(&body), vec!["The Godfather"]);
}

#[tokio::test]
async fn year_filter_is_exact() {
    let app = test_app();
    seed_movie(&app, "Pulp Fiction", "Crime", 8.9, 1994).await;
    seed_movie(&app, "Forrest Gump", "Drama", 8.8, 1994).await;
    seed_movie(&app, "Heat", "Crime", 8.3, 1995).await;

    let (_, body) = get(&app, "/api/movies?year=1994").await;
    assert_eq!(body["movies"].as_array().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Top rated
// ---------------------------------------------------------------------------

#[tokio::test]
async fn top_rated_is_sorted_by_rating_descending() {
    let app = test_app();
    seed_movie(&app, "Mid", "Drama", 7.0, 2000).await;
    seed_movie(&app, "Best", "Drama", 9.5, 2001).await;
    seed_movie(&app, "Good", "Drama", 8.2, 2002).await;

    let (_, body) = get(&app, "/api/movies/top-rated").await;
    assert_eq!(titles(&body), vec!["Best", "Good", "Mid"]);
}

// ---------------------------------------------------------------------------
// Distinct values
// ---------------------------------------------------------------------------

#[tokio::test]
async fn years_are_distinct_and_descending() {
    let app = test_app();
    seed_movie(&app, "A", "Drama", 5.0, 1994).await;
    seed_movie(&app, "B", "Drama", 5.0, 2008).await;
    seed_movie(&app, "C", "Drama", 5.0, 1994).await;

    let (_, body) = get(&app, "/api/movies/years").await;
    assert_eq!(body, json!([2008, 1994]));
}

#[tokio::test]
async fn genres_are_distinct_and_ascending() {
    let app = test_app();
    seed_movie(&app, "A", "Horror", 5.0, 2000).await;
    seed_movie(&app, "B", "Action", 5.0, 2000).await;
    seed_movie(&app, "C", "Horror", 5.0, 2000).await;

    let (_, body) = get(&app, "/api/movies/genres").await;
    assert_eq!(body, json!(["Action", "Horror"]));
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let app = test_app();
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

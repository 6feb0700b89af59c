//! Movie HTTP Routes
//!
//! CRUD endpoints over the in-memory movie store.
//!
//! - `GET /movies[?field=value...]` - list, optionally filtered
//! - `GET /movies/:id` - single record
//! - `POST /movies` - create from a full body
//! - `PUT /movies/:id` - replace with a full body
//! - `PATCH /movies/:id` - merge a partial body
//! - `DELETE /movies/:id` - remove

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;

use crate::schema::{empty_candidate, Movie, MovieValidator};
use crate::store::MovieStore;

use super::errors::{ApiError, ApiResult};
use super::filter::MovieFilter;

// ==================
// Shared State
// ==================

/// Movie state shared across handlers
pub struct MoviesState {
    pub store: Arc<MovieStore>,
    pub validator: MovieValidator,
}

impl MoviesState {
    pub fn new(store: Arc<MovieStore>) -> Self {
        Self {
            store,
            validator: MovieValidator::new(),
        }
    }

    pub fn with_validator(store: Arc<MovieStore>, validator: MovieValidator) -> Self {
        Self { store, validator }
    }
}

// ==================
// Response Types
// ==================

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ==================
// Movie Routes
// ==================

/// Create movie routes
pub fn movie_routes(state: Arc<MoviesState>) -> Router {
    Router::new()
        .route("/movies", get(list_movies_handler).post(create_movie_handler))
        .route(
            "/movies/:id",
            get(get_movie_handler)
                .put(replace_movie_handler)
                .patch(update_movie_handler)
                .delete(delete_movie_handler),
        )
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

/// Decode a request body. An empty body stands for `{}`.
fn parse_body(body: &Bytes) -> ApiResult<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(empty_candidate());
    }
    serde_json::from_slice(body).map_err(|e| ApiError::MalformedBody(e.to_string()))
}

// ==================
// Handlers
// ==================

async fn list_movies_handler(
    State(state): State<Arc<MoviesState>>,
    Query(query): Query<Vec<(String, String)>>,
) -> ApiResult<Json<Vec<Movie>>> {
    let movies = state.store.list()?;
    let filter = MovieFilter::from_query(query);
    Ok(Json(filter.apply(movies)))
}

async fn get_movie_handler(
    State(state): State<Arc<MoviesState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Movie>> {
    let movie = state.store.get(&id)?;
    Ok(Json(movie))
}

async fn create_movie_handler(
    State(state): State<Arc<MoviesState>>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Movie>)> {
    let candidate = parse_body(&body)?;
    let input = state.validator.validate_movie(&candidate)?;
    let movie = state.store.insert(Movie::create(input))?;
    Ok((StatusCode::CREATED, Json(movie)))
}

async fn replace_movie_handler(
    State(state): State<Arc<MoviesState>>,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<Movie>> {
    let candidate = parse_body(&body)?;
    let input = state.validator.validate_movie(&candidate)?;
    let movie = state.store.replace(&id, input)?;
    Ok(Json(movie))
}

async fn update_movie_handler(
    State(state): State<Arc<MoviesState>>,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<Movie>> {
    let candidate = parse_body(&body)?;
    let patch = state.validator.validate_partial_movie(&candidate)?;
    let movie = state.store.update(&id, patch)?;
    Ok(Json(movie))
}

async fn delete_movie_handler(
    State(state): State<Arc<MoviesState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    state.store.remove(&id)?;
    Ok(Json(MessageResponse {
        message: "Movie deleted".to_string(),
    }))
}

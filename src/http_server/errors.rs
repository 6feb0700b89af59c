//! # API Errors
//!
//! Every failure a request can hit, mapped to a status code and a
//! `{"message": ...}` body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use thiserror::Error;

use crate::observability::Logger;
use crate::schema::FieldViolations;
use crate::store::StoreError;

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Message sent when a movie id is unknown
pub const MOVIE_NOT_FOUND: &str = "Movie not found";

/// API errors
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Body failed schema validation
    #[error("{0}")]
    Validation(#[from] FieldViolations),

    /// Body is not valid JSON
    #[error("Invalid JSON body: {0}")]
    MalformedBody(String),

    /// No movie with this id
    #[error("Movie not found: {0}")]
    MovieNotFound(String),

    /// No route for this method and path
    #[error("Not found")]
    RouteNotFound,

    // ==================
    // Server Errors (5xx)
    // ==================
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::MovieNotFound(_) | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Response body. Validation failures carry the per-field mapping.
    pub fn body(&self) -> Value {
        match self {
            ApiError::Validation(violations) => json!({ "message": violations }),
            ApiError::MovieNotFound(_) => json!({ "message": MOVIE_NOT_FOUND }),
            ApiError::Internal(_) => json!({ "message": "Internal server error" }),
            other => json!({ "message": other.to_string() }),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => ApiError::MovieNotFound(id),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            Logger::error("REQUEST_FAILED", &[("error", self.to_string().as_str())]);
        }
        (status, Json(self.body())).into_response()
    }
}

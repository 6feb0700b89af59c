//! Request logging middleware

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

use crate::observability::Logger;

/// Emit one `HTTP_REQUEST` line per request once the response is ready
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    let elapsed_ms = started.elapsed().as_millis().to_string();
    Logger::info(
        "HTTP_REQUEST",
        &[
            ("method", method.as_str()),
            ("path", path.as_str()),
            ("status", response.status().as_str()),
            ("elapsed_ms", elapsed_ms.as_str()),
        ],
    );

    response
}

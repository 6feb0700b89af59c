//! CORS Policy
//!
//! - `OPTIONS` on any path is answered directly with `200`, a wildcard origin
//!   and the full method list, whatever the request `Origin` is.
//! - Every other request gets `Access-Control-Allow-Origin` echoing its
//!   `Origin` only when that origin is on the allow-list.

use axum::{
    extract::Request,
    http::{
        header::{ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN},
        HeaderValue, Method, StatusCode,
    },
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::observability::Logger;

/// Methods advertised to cross-origin callers
pub const ALLOWED_METHODS: [Method; 6] = [
    Method::GET,
    Method::POST,
    Method::PATCH,
    Method::PUT,
    Method::DELETE,
    Method::OPTIONS,
];

/// `Access-Control-Allow-Methods` value sent on preflight responses
pub const ALLOW_METHODS_HEADER: &str = "GET, POST, PATCH, PUT, DELETE, OPTIONS";

/// Build the allow-list layer for non-preflight requests.
///
/// Entries that are not valid header values are skipped with a warning.
/// A `*` entry echoes every origin.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.iter().any(|o| o == "*") {
        AllowOrigin::mirror_request()
    } else {
        let allowed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    Logger::warn("CORS_ORIGIN_IGNORED", &[("origin", origin.as_str())]);
                    None
                }
            })
            .collect();
        AllowOrigin::list(allowed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(ALLOWED_METHODS.to_vec())
}

/// Short-circuit every `OPTIONS` request with the permissive preflight answer
pub async fn answer_preflight(request: Request, next: Next) -> Response {
    if request.method() != Method::OPTIONS {
        return next.run(request).await;
    }

    (
        StatusCode::OK,
        [
            (ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (ACCESS_CONTROL_ALLOW_METHODS, ALLOW_METHODS_HEADER),
        ],
        "OK",
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_header_matches_list() {
        let listed: Vec<&str> = ALLOWED_METHODS.iter().map(Method::as_str).collect();
        assert_eq!(listed.join(", "), ALLOW_METHODS_HEADER);
    }
}

//! # HTTP Server
//!
//! Combines the movie routes with the greeting, the 404 fallback and the
//! middleware stack (request logging, preflight, CORS allow-list).

use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use tokio::net::TcpListener;
use tower::ServiceBuilder;

use crate::observability::Logger;
use crate::store::MovieStore;

use super::config::HttpServerConfig;
use super::cors::{answer_preflight, cors_layer};
use super::errors::ApiError;
use super::logging::log_requests;
use super::movie_routes::{movie_routes, MoviesState};

/// Plain text body of `GET /`
pub const GREETING: &str = "Hola mundo";

/// HTTP server for the movies API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over the given store
    pub fn with_store(config: HttpServerConfig, store: Arc<MovieStore>) -> Self {
        let state = Arc::new(MoviesState::new(store));
        let router = build_router(&config, state);
        Self { config, router }
    }

    /// Bind and serve until Ctrl-C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind((self.config.host.as_str(), self.config.port))
            .await
            .map_err(|e| {
                std::io::Error::new(
                    e.kind(),
                    format!("cannot bind {}: {}", self.config.socket_addr(), e),
                )
            })?;
        let local = listener.local_addr()?.to_string();
        Logger::info("SERVER_LISTENING", &[("addr", local.as_str())]);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Logger::info("SERVER_STOPPED", &[("addr", local.as_str())]);
        Ok(())
    }
}

/// Build the combined router with all endpoints
pub fn build_router(config: &HttpServerConfig, state: Arc<MoviesState>) -> Router {
    Router::new()
        .route("/", get(greeting_handler))
        .merge(movie_routes(state))
        .fallback(fallback_handler)
        // Outermost first: log, answer preflight, then apply the allow-list
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(log_requests))
                .layer(middleware::from_fn(answer_preflight))
                .layer(cors_layer(&config.cors_origins)),
        )
}

async fn greeting_handler() -> &'static str {
    GREETING
}

async fn fallback_handler() -> ApiError {
    ApiError::RouteNotFound
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available: serve until the process is killed
        std::future::pending::<()>().await;
    }
}

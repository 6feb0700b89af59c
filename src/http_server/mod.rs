//! # HTTP Server Module
//!
//! Axum server exposing the movie catalogue.
//!
//! # Endpoints
//!
//! - `GET /` - plain text greeting
//! - `/movies`, `/movies/:id` - CRUD over the record store
//! - `OPTIONS *` - permissive preflight answer

pub mod config;
pub mod cors;
pub mod errors;
pub mod filter;
pub mod logging;
pub mod movie_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use filter::{FieldFilter, MovieFilter};
pub use movie_routes::MoviesState;
pub use server::{build_router, HttpServer, GREETING};

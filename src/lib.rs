//! movies-api - an in-memory movie catalogue served over HTTP
//!
//! Records are seeded from a JSON dataset at startup, validated against a
//! fixed schema on every write and kept only for the lifetime of the process.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod schema;
pub mod store;

//! Observability
//!
//! Structured JSON logging. Logging is read-only with respect to request
//! handling: a failed write to stdout/stderr never fails a request.
//!
//! # Usage
//!
//! ```ignore
//! use movies_api::observability::Logger;
//!
//! Logger::info("SEED_LOADED", &[("records", "12")]);
//! ```

mod logger;

pub use logger::{format_line, Logger, Severity};

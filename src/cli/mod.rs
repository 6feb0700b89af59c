//! CLI module
//!
//! - default: load the seed and serve the HTTP API
//! - check: validate a seed dataset offline

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command, ServeArgs};
pub use commands::{check, load_store, run, run_cli, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_json, write_response};

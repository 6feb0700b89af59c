//! CLI command implementations

use std::path::Path;
use std::sync::Arc;

use serde_json::json;

use crate::http_server::HttpServer;
use crate::observability::Logger;
use crate::schema::Movie;
use crate::store::{bundled_seed, load_seed_file, MovieStore};

use super::args::{Cli, Command, ServeArgs};
use super::errors::{CliError, CliResult};
use super::io::write_response;

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    run_cli(Cli::parse_args())
}

/// Run the command described by parsed arguments
pub fn run_cli(cli: Cli) -> CliResult<()> {
    match cli.command {
        Some(Command::Check { path }) => check(&path),
        None => serve(cli.serve),
    }
}

/// Load the seed, build the store and serve until Ctrl-C
pub fn serve(args: ServeArgs) -> CliResult<()> {
    Logger::set_min_severity(args.log_level);

    let store = Arc::new(load_store(args.seed.as_deref())?);
    let server = HttpServer::with_store(args.server_config(), store);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Validate a seed file and report how many records it holds
pub fn check(path: &Path) -> CliResult<()> {
    let movies = load_seed_file(path)?;
    write_response(&json!({
        "valid": true,
        "records": movies.len(),
    }))
}

/// Build the store from `seed`, or from the bundled dataset
pub fn load_store(seed: Option<&Path>) -> CliResult<MovieStore> {
    let (movies, source): (Vec<Movie>, String) = match seed {
        Some(path) => (load_seed_file(path)?, path.display().to_string()),
        None => (bundled_seed()?, "bundled".to_string()),
    };

    let records = movies.len().to_string();
    let store = MovieStore::with_records(movies)?;
    Logger::info("SEED_LOADED", &[("records", records.as_str()), ("source", source.as_str())]);

    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::BUNDLED_SEED;
    use std::io::Write;

    #[test]
    fn test_load_bundled_store() {
        let store = load_store(None).unwrap();
        assert!(!store.is_empty());
    }

    #[test]
    fn test_load_store_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(BUNDLED_SEED.as_bytes()).unwrap();

        let store = load_store(Some(file.path())).unwrap();
        assert_eq!(store.len(), bundled_seed().unwrap().len());
    }

    #[test]
    fn test_check_rejects_missing_file() {
        let err = check(Path::new("/nonexistent/movies.json")).unwrap_err();
        assert_eq!(err.code(), &super::super::errors::CliErrorCode::SeedInvalid);
    }
}

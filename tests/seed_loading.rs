//! Seed Loading Tests
//!
//! The store is only ever built from a seed that fully satisfies the schema.

use std::io::Write;

use movies_api::cli::{self, CliErrorCode};
use movies_api::store::{bundled_seed, load_seed_file, SeedError, BUNDLED_SEED};
use serde_json::{json, Value};
use tempfile::NamedTempFile;

fn seed_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn record(id: &str) -> Value {
    json!({
        "id": id,
        "title": "Heat",
        "year": 1995,
        "director": "Michael Mann",
        "duration": 170,
        "rating": 8.3,
        "genre": ["Action", "Crime"],
        "poster": "https://posters.example.com/heat.jpg"
    })
}

#[test]
fn test_bundled_seed_has_unique_ids() {
    let movies = bundled_seed().unwrap();
    let mut ids: Vec<&str> = movies.iter().map(|m| m.id.as_str()).collect();
    let total = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), total);
}

#[test]
fn test_seed_file_preserves_order() {
    let file = seed_file(&json!([record("b"), record("a"), record("c")]).to_string());
    let movies = load_seed_file(file.path()).unwrap();
    let ids: Vec<&str> = movies.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a", "c"]);
}

#[test]
fn test_duplicate_ids_rejected() {
    let file = seed_file(&json!([record("x"), record("y"), record("x")]).to_string());
    match load_seed_file(file.path()).unwrap_err() {
        SeedError::DuplicateId { index, id } => {
            assert_eq!(index, 2);
            assert_eq!(id, "x");
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_invalid_record_rejected() {
    let mut bad = record("x");
    bad["poster"] = json!("not a url");
    let file = seed_file(&json!([bad]).to_string());
    match load_seed_file(file.path()).unwrap_err() {
        SeedError::InvalidRecord { index, violations } => {
            assert_eq!(index, 0);
            assert!(violations.contains("poster"));
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_seed_file(std::path::Path::new("/nonexistent/seed.json")).unwrap_err();
    assert!(matches!(err, SeedError::Io { .. }));
}

#[test]
fn test_check_command() {
    let good = seed_file(BUNDLED_SEED);
    assert!(cli::check(good.path()).is_ok());

    let bad = seed_file("[{\"id\": 1}]");
    let err = cli::check(bad.path()).unwrap_err();
    assert_eq!(err.code(), &CliErrorCode::SeedInvalid);
}

#[test]
fn test_load_store_from_seed_file() {
    let file = seed_file(&json!([record("1"), record("2")]).to_string());
    let store = cli::load_store(Some(file.path())).unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(store.get("2").unwrap().title, "Heat");
}

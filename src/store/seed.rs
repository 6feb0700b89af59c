//! # Seed Dataset
//!
//! The store starts from a JSON array of movie records. Each record must
//! carry a string `id` and satisfy the strict schema; identifiers must be
//! unique. A bad seed fails startup instead of serving invalid data.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::schema::{FieldViolations, Movie, MovieValidator};

use super::errors::{SeedError, SeedResult};

/// Dataset bundled with the binary
pub const BUNDLED_SEED: &str = include_str!("../../data/movies.json");

/// Parse and validate the bundled dataset
pub fn bundled_seed() -> SeedResult<Vec<Movie>> {
    parse_seed(BUNDLED_SEED)
}

/// Read, parse and validate a seed file
pub fn load_seed_file(path: &Path) -> SeedResult<Vec<Movie>> {
    let source = fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_seed(&source)
}

/// Parse and validate a seed document
pub fn parse_seed(source: &str) -> SeedResult<Vec<Movie>> {
    let entries: Vec<Value> = serde_json::from_str(source)?;
    let validator = MovieValidator::new();
    let mut seen = HashSet::with_capacity(entries.len());
    let mut movies = Vec::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        let id = match entry.get("id").and_then(Value::as_str) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => {
                let mut violations = FieldViolations::new();
                violations.push("id", "Seed records must carry a non-empty string id");
                return Err(SeedError::InvalidRecord { index, violations });
            }
        };

        let input = validator
            .validate_movie(entry)
            .map_err(|violations| SeedError::InvalidRecord { index, violations })?;

        if !seen.insert(id.clone()) {
            return Err(SeedError::DuplicateId { index, id });
        }

        movies.push(input.into_movie(id));
    }

    Ok(movies)
}

//! # Store Errors

use thiserror::Error;

use crate::schema::FieldViolations;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Movie not found: {0}")]
    NotFound(String),

    #[error("Movie id already in use: {0}")]
    DuplicateId(String),

    #[error("Lock poisoned")]
    Poisoned,
}

/// Result type for seed loading
pub type SeedResult<T> = Result<T, SeedError>;

/// Errors raised while loading the seed dataset
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Seed is not a JSON array of movies: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Seed record {index} is invalid: {violations}")]
    InvalidRecord {
        index: usize,
        violations: FieldViolations,
    },

    #[error("Seed record {index} reuses id '{id}'")]
    DuplicateId { index: usize, id: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            StoreError::NotFound("abc".into()).to_string(),
            "Movie not found: abc"
        );
        let err = SeedError::DuplicateId {
            index: 3,
            id: "abc".into(),
        };
        assert!(err.to_string().contains("record 3"));
    }
}

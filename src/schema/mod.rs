//! Movie schema
//!
//! A stored record always satisfies the full schema. Bodies arriving over
//! HTTP are checked here before they reach the store.
//!
//! # Rules
//!
//! - `title`: non-empty string
//! - `year`: integer, 1900 to five years past the current year
//! - `director`: string
//! - `duration`: positive integer (minutes)
//! - `rating`: number in 0..=10, defaults to 5 on full records
//! - `genre`: non-empty set of known genres
//! - `poster`: absolute URL

mod errors;
mod types;
mod validator;

pub use errors::{FieldViolations, SchemaResult, ROOT_FIELD};
pub use types::{FieldValue, Genre, Movie, MovieInput, MoviePatch, DEFAULT_RATING};
pub use validator::{
    empty_candidate, validate_movie, validate_partial_movie, Mode, MovieValidator, FUTURE_YEARS,
    MIN_YEAR,
};

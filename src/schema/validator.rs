//! Movie schema validator
//!
//! Validation semantics:
//! - Strict: every required field present and valid, `rating` defaults to 5
//! - Partial: only present fields are checked, `{}` is a valid empty patch
//! - Unknown fields (including a client supplied `id`) are stripped
//! - `null` is never accepted for a known field
//! - Every violation is reported, not just the first

use std::collections::HashSet;
use std::sync::OnceLock;

use chrono::{Datelike, Utc};
use regex::Regex;
use serde_json::{Map, Value};

use super::errors::{FieldViolations, SchemaResult, ROOT_FIELD};
use super::types::{Genre, MovieInput, MoviePatch, DEFAULT_RATING};

/// Earliest accepted release year
pub const MIN_YEAR: i32 = 1900;

/// How many years past the current one a release may be announced
pub const FUTURE_YEARS: i32 = 5;

const MIN_RATING: f64 = 0.0;
const MAX_RATING: f64 = 10.0;

/// Validation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Full record, required fields must be present
    Strict,
    /// Subset of fields, only present fields are checked
    Partial,
}

/// Validates candidate movie bodies.
///
/// Validation is pure: the candidate is never mutated and the same input
/// always produces the same result for a given year range.
#[derive(Debug, Clone)]
pub struct MovieValidator {
    min_year: i32,
    max_year: i32,
}

impl Default for MovieValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl MovieValidator {
    /// Creates a validator accepting years from 1900 to five years past today
    pub fn new() -> Self {
        Self::with_year_range(MIN_YEAR, Utc::now().year() + FUTURE_YEARS)
    }

    /// Creates a validator with an explicit inclusive year range
    pub fn with_year_range(min_year: i32, max_year: i32) -> Self {
        Self { min_year, max_year }
    }

    /// Inclusive range of accepted release years
    pub fn year_range(&self) -> (i32, i32) {
        (self.min_year, self.max_year)
    }

    /// Validates a full movie record.
    ///
    /// # Errors
    ///
    /// Returns every field violation if any required field is missing or
    /// any present field is invalid.
    pub fn validate_movie(&self, candidate: &Value) -> SchemaResult<MovieInput> {
        let (patch, violations) = self.check(candidate, Mode::Strict);
        if !violations.is_empty() {
            return Err(violations);
        }

        // Strict mode guarantees every required field is set
        match patch {
            MoviePatch {
                title: Some(title),
                year: Some(year),
                director: Some(director),
                duration: Some(duration),
                rating,
                genre: Some(genre),
                poster: Some(poster),
            } => Ok(MovieInput {
                title,
                year,
                director,
                duration,
                rating: rating.unwrap_or(DEFAULT_RATING),
                genre,
                poster,
            }),
            _ => {
                let mut violations = FieldViolations::new();
                violations.push(ROOT_FIELD, "Incomplete movie record");
                Err(violations)
            }
        }
    }

    /// Validates a partial movie record.
    ///
    /// # Errors
    ///
    /// Returns every violation among the fields that are present.
    pub fn validate_partial_movie(&self, candidate: &Value) -> SchemaResult<MoviePatch> {
        let (patch, violations) = self.check(candidate, Mode::Partial);
        violations.into_result(patch)
    }

    /// Checks every known field, collecting values and violations together.
    fn check(&self, candidate: &Value, mode: Mode) -> (MoviePatch, FieldViolations) {
        let mut violations = FieldViolations::new();
        let mut patch = MoviePatch::default();

        let obj = match candidate.as_object() {
            Some(obj) => obj,
            None => {
                violations.push(
                    ROOT_FIELD,
                    format!("Expected an object, received {}", json_type_name(candidate)),
                );
                return (patch, violations);
            }
        };

        let title = present(obj, "title", "Movie title", mode, &mut violations);
        let year = present(obj, "year", "Movie year", mode, &mut violations);
        let director = present(obj, "director", "Director", mode, &mut violations);
        let duration = present(obj, "duration", "Duration", mode, &mut violations);
        let rating = present(obj, "rating", "Rating", Mode::Partial, &mut violations);
        let genre = present(obj, "genre", "Movie genre", mode, &mut violations);
        let poster = present(obj, "poster", "Poster", mode, &mut violations);

        patch.title = title.and_then(|v| check_title(v, &mut violations));
        patch.year = year.and_then(|v| self.check_year(v, &mut violations));
        patch.director = director.and_then(|v| check_director(v, &mut violations));
        patch.duration = duration.and_then(|v| check_duration(v, &mut violations));
        patch.rating = rating.and_then(|v| check_rating(v, &mut violations));
        patch.genre = genre.and_then(|v| check_genre(v, &mut violations));
        patch.poster = poster.and_then(|v| check_poster(v, &mut violations));

        (patch, violations)
    }

    fn check_year(&self, value: &Value, violations: &mut FieldViolations) -> Option<i32> {
        let year = match as_integer(value) {
            Some(year) => year,
            None => {
                violations.push("year", "Movie year must be an integer");
                return None;
            }
        };

        if year < i64::from(self.min_year) || year > i64::from(self.max_year) {
            violations.push(
                "year",
                format!(
                    "Movie year must be between {} and {}",
                    self.min_year, self.max_year
                ),
            );
            return None;
        }

        i32::try_from(year).ok()
    }
}

/// Validates a full movie record with the default year range
pub fn validate_movie(candidate: &Value) -> SchemaResult<MovieInput> {
    MovieValidator::new().validate_movie(candidate)
}

/// Validates a partial movie record with the default year range
pub fn validate_partial_movie(candidate: &Value) -> SchemaResult<MoviePatch> {
    MovieValidator::new().validate_partial_movie(candidate)
}

/// Returns the non-null value of `name`. Strict mode records a missing field.
fn present<'a>(
    obj: &'a Map<String, Value>,
    name: &str,
    label: &str,
    mode: Mode,
    violations: &mut FieldViolations,
) -> Option<&'a Value> {
    match obj.get(name) {
        Some(Value::Null) => {
            violations.push(name, format!("{} must not be null", label));
            None
        }
        Some(value) => Some(value),
        None => {
            if mode == Mode::Strict {
                violations.push(name, format!("{} is required", label));
            }
            None
        }
    }
}

fn check_title(value: &Value, violations: &mut FieldViolations) -> Option<String> {
    match value.as_str() {
        Some(s) if s.trim().is_empty() => {
            violations.push("title", "Movie title must not be empty");
            None
        }
        Some(s) => Some(s.to_string()),
        None => {
            violations.push("title", "Movie title must be a string");
            None
        }
    }
}

fn check_director(value: &Value, violations: &mut FieldViolations) -> Option<String> {
    match value.as_str() {
        Some(s) => Some(s.to_string()),
        None => {
            violations.push("director", "Director must be a string");
            None
        }
    }
}

fn check_duration(value: &Value, violations: &mut FieldViolations) -> Option<u32> {
    let minutes = match as_integer(value) {
        Some(minutes) => minutes,
        None => {
            violations.push("duration", "Duration must be an integer");
            return None;
        }
    };

    if minutes <= 0 {
        violations.push("duration", "Duration must be a positive number of minutes");
        return None;
    }

    match u32::try_from(minutes) {
        Ok(minutes) => Some(minutes),
        Err(_) => {
            violations.push("duration", "Duration is out of range");
            None
        }
    }
}

fn check_rating(value: &Value, violations: &mut FieldViolations) -> Option<f64> {
    let rating = match value.as_f64() {
        Some(rating) => rating,
        None => {
            violations.push("rating", "Rating must be a number");
            return None;
        }
    };

    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        violations.push("rating", "Rating must be between 0 and 10");
        return None;
    }

    Some(rating)
}

fn check_genre(value: &Value, violations: &mut FieldViolations) -> Option<Vec<Genre>> {
    let items = match value.as_array() {
        Some(items) => items,
        None => {
            violations.push("genre", "Movie genre must be an array of genres");
            return None;
        }
    };

    if items.is_empty() {
        violations.push("genre", "Movie genre must contain at least one genre");
        return None;
    }

    let mut genres = Vec::with_capacity(items.len());
    let mut seen = HashSet::new();
    let mut valid = true;

    for item in items {
        match item.as_str().map(str::parse::<Genre>) {
            Some(Ok(genre)) => {
                // Set semantics: first occurrence wins
                if seen.insert(genre) {
                    genres.push(genre);
                }
            }
            Some(Err(())) => {
                valid = false;
                violations.push(
                    "genre",
                    format!(
                        "Unknown genre '{}', expected one of: {}",
                        item.as_str().unwrap_or_default(),
                        genre_names()
                    ),
                );
            }
            None => {
                valid = false;
                violations.push(
                    "genre",
                    format!("Genre entries must be strings, received {}", json_type_name(item)),
                );
            }
        }
    }

    valid.then_some(genres)
}

fn check_poster(value: &Value, violations: &mut FieldViolations) -> Option<String> {
    match value.as_str() {
        Some(s) if poster_pattern().is_match(s) => Some(s.to_string()),
        Some(_) => {
            violations.push("poster", "Poster must be a valid URL");
            None
        }
        None => {
            violations.push("poster", "Poster must be a string");
            None
        }
    }
}

/// Absolute URL: scheme, `://`, a host, then anything without whitespace
fn poster_pattern() -> &'static Regex {
    static POSTER_URL: OnceLock<Regex> = OnceLock::new();
    POSTER_URL.get_or_init(|| {
        Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://[^\s/?#]+[^\s]*$")
            .expect("poster URL pattern compiles")
    })
}

fn genre_names() -> String {
    Genre::ALL
        .iter()
        .map(Genre::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Integral JSON numbers, including floats with no fractional part (`2010.0`)
fn as_integer(value: &Value) -> Option<i64> {
    if let Some(i) = value.as_i64() {
        return Some(i);
    }
    match value.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 => {
            Some(f as i64)
        }
        _ => None,
    }
}

/// Returns the JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Empty object, the body a missing request payload stands for
pub fn empty_candidate() -> Value {
    Value::Object(Map::new())
}

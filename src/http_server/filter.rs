//! # List Filtering
//!
//! Query-string predicates for `GET /movies`.
//!
//! For each `field=value` pair a record is kept when:
//! - the field is a collection and `value` is one of its elements
//!   (exact, case-sensitive), or
//! - otherwise the field rendered as text, lowercased, contains `value`
//!   lowercased.
//!
//! Pairs combine with AND. A field the record does not have matches nothing.

use crate::schema::{FieldValue, Movie};

/// A single `field=value` predicate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFilter {
    pub field: String,
    pub value: String,
}

impl FieldFilter {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Check if a record matches this predicate
    pub fn matches(&self, movie: &Movie) -> bool {
        match movie.field_value(&self.field) {
            Some(FieldValue::List(items)) => items.iter().any(|item| *item == self.value),
            Some(FieldValue::Text(text)) => text
                .to_lowercase()
                .contains(&self.value.to_lowercase()),
            None => false,
        }
    }
}

/// Conjunction of predicates, in query-string order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieFilter {
    predicates: Vec<FieldFilter>,
}

impl MovieFilter {
    /// Build from decoded query pairs. Repeated keys each become a predicate.
    pub fn from_query(pairs: Vec<(String, String)>) -> Self {
        Self {
            predicates: pairs
                .into_iter()
                .map(|(field, value)| FieldFilter::new(field, value))
                .collect(),
        }
    }

    /// Check a record against every predicate
    pub fn matches(&self, movie: &Movie) -> bool {
        self.predicates.iter().all(|p| p.matches(movie))
    }

    /// Keep the matching records in store order
    pub fn apply(&self, movies: Vec<Movie>) -> Vec<Movie> {
        movies.into_iter().filter(|movie| self.matches(movie)).collect()
    }
}

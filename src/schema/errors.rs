//! Schema validation errors
//!
//! A failed validation reports every offending field, not just the first.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Field path used when the candidate itself is not an object
pub const ROOT_FIELD: &str = "$root";

/// Result type for schema validation
pub type SchemaResult<T> = Result<T, FieldViolations>;

/// Mapping of field name to the violation messages found for it.
///
/// Serializes as a plain JSON object, e.g. `{"title": ["Movie title is required"]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldViolations(BTreeMap<String, Vec<String>>);

impl FieldViolations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one violation against `field`
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with at least one violation
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Messages recorded for `field`
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Field names in sorted order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// `Ok(value)` when nothing was recorded, otherwise `Err(self)`
    pub fn into_result<T>(self, value: T) -> SchemaResult<T> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid movie record")?;
        let mut sep = ": ";
        for (field, messages) in &self.0 {
            write!(f, "{}{}: {}", sep, field, messages.join(", "))?;
            sep = "; ";
        }
        Ok(())
    }
}

impl std::error::Error for FieldViolations {}

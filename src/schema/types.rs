//! Movie record types
//!
//! `Movie` is the canonical stored record. `MovieInput` is a validated full
//! body without an identifier, `MoviePatch` a validated partial body.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};
use uuid::Uuid;

/// Rating assigned when a full record omits one
pub const DEFAULT_RATING: f64 = 5.0;

/// Movie genre categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Adventure,
    Animation,
    Biography,
    Comedy,
    Crime,
    Drama,
    Fantasy,
    Horror,
    Romance,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Thriller,
}

impl Genre {
    /// Every accepted genre, in display order
    pub const ALL: [Genre; 12] = [
        Genre::Action,
        Genre::Adventure,
        Genre::Animation,
        Genre::Biography,
        Genre::Comedy,
        Genre::Crime,
        Genre::Drama,
        Genre::Fantasy,
        Genre::Horror,
        Genre::Romance,
        Genre::SciFi,
        Genre::Thriller,
    ];

    /// Returns the wire name of the genre
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Adventure => "Adventure",
            Genre::Animation => "Animation",
            Genre::Biography => "Biography",
            Genre::Comedy => "Comedy",
            Genre::Crime => "Crime",
            Genre::Drama => "Drama",
            Genre::Fantasy => "Fantasy",
            Genre::Horror => "Horror",
            Genre::Romance => "Romance",
            Genre::SciFi => "Sci-Fi",
            Genre::Thriller => "Thriller",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Genre {
    type Err = ();

    /// Exact, case-sensitive match on the wire name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genre::ALL.into_iter().find(|g| g.as_str() == s).ok_or(())
    }
}

/// A stored movie record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub year: i32,
    pub director: String,
    pub duration: u32,
    #[serde(serialize_with = "serialize_number")]
    pub rating: f64,
    pub genre: Vec<Genre>,
    pub poster: String,
}

/// A field value as seen by list filtering
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

impl Movie {
    /// Create a record from validated input under a fresh UUID v4 identifier
    pub fn create(input: MovieInput) -> Self {
        input.into_movie(Uuid::new_v4().to_string())
    }

    /// Look up a field by its JSON name
    pub fn field_value(&self, name: &str) -> Option<FieldValue> {
        let value = match name {
            "id" => FieldValue::Text(self.id.clone()),
            "title" => FieldValue::Text(self.title.clone()),
            "year" => FieldValue::Text(self.year.to_string()),
            "director" => FieldValue::Text(self.director.clone()),
            "duration" => FieldValue::Text(self.duration.to_string()),
            "rating" => FieldValue::Text(format_number(self.rating)),
            "genre" => FieldValue::List(self.genre.iter().map(|g| g.as_str().to_string()).collect()),
            "poster" => FieldValue::Text(self.poster.clone()),
            _ => return None,
        };
        Some(value)
    }
}

/// Largest magnitude an `f64` holds without losing integer precision
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

fn is_integral(n: f64) -> bool {
    n.is_finite() && n.fract() == 0.0 && n.abs() <= MAX_EXACT_INTEGER
}

/// Integral numbers render without a fractional part
fn format_number(n: f64) -> String {
    if is_integral(n) {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// Write integral numbers as JSON integers so `9` comes back as `9`
fn serialize_number<S: Serializer>(n: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if is_integral(*n) {
        serializer.serialize_i64(*n as i64)
    } else {
        serializer.serialize_f64(*n)
    }
}

/// A fully validated movie body, identifier not yet assigned
#[derive(Debug, Clone, PartialEq)]
pub struct MovieInput {
    pub title: String,
    pub year: i32,
    pub director: String,
    pub duration: u32,
    pub rating: f64,
    pub genre: Vec<Genre>,
    pub poster: String,
}

impl MovieInput {
    /// Bind the input to an identifier
    pub fn into_movie(self, id: String) -> Movie {
        Movie {
            id,
            title: self.title,
            year: self.year,
            director: self.director,
            duration: self.duration,
            rating: self.rating,
            genre: self.genre,
            poster: self.poster,
        }
    }
}

/// A validated partial update. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoviePatch {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub director: Option<String>,
    pub duration: Option<u32>,
    pub rating: Option<f64>,
    pub genre: Option<Vec<Genre>>,
    pub poster: Option<String>,
}

impl MoviePatch {
    pub fn is_empty(&self) -> bool {
        *self == MoviePatch::default()
    }

    /// Merge the patch into `movie`, producing a new full record.
    /// The identifier is always carried over.
    pub fn apply_to(self, movie: &Movie) -> Movie {
        Movie {
            id: movie.id.clone(),
            title: self.title.unwrap_or_else(|| movie.title.clone()),
            year: self.year.unwrap_or(movie.year),
            director: self.director.unwrap_or_else(|| movie.director.clone()),
            duration: self.duration.unwrap_or(movie.duration),
            rating: self.rating.unwrap_or(movie.rating),
            genre: self.genre.unwrap_or_else(|| movie.genre.clone()),
            poster: self.poster.unwrap_or_else(|| movie.poster.clone()),
        }
    }
}

//! Core domain types for movie prefix search.
//!
//! - `Movie`: an immutable (name, rating) pair
//! - `MovieCatalog`: every loaded movie, sorted by name, read-only after build

use crate::error::{DataLoadError, Result};
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

// =============================================================================
// Movie
// =============================================================================

/// A single movie with its rating.
///
/// Fields are private so the invariants hold for every value in the program:
/// the name is non-empty and the rating is a finite number.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Movie {
    name: String,
    rating: f64,
}

impl Movie {
    /// Create a movie, rejecting an empty name or a NaN/infinite rating.
    pub fn new(name: impl Into<String>, rating: f64) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(DataLoadError::InvalidValue {
                field: "name".to_string(),
                value: "<empty>".to_string(),
            });
        }
        if !rating.is_finite() {
            return Err(DataLoadError::InvalidValue {
                field: "rating".to_string(),
                value: rating.to_string(),
            });
        }
        Ok(Self { name, rating })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    /// True when the name starts with `prefix` (case-sensitive).
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.name.starts_with(prefix)
    }

    /// Catalog order: name ascending, then rating descending for duplicate names.
    pub fn cmp_by_name(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| other.rating.total_cmp(&self.rating))
    }
}

/// Renders as `{name}, {rating:.1}`, the line format used by every report.
impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {:.1}", self.name, self.rating)
    }
}

// =============================================================================
// MovieCatalog
// =============================================================================

/// All loaded movies, sorted lexicographically by name.
///
/// Built once by `from_movies` (or `load_from_file`), then only borrowed.
#[derive(Debug, Clone, Default)]
pub struct MovieCatalog {
    pub(crate) movies: Vec<Movie>,
}

impl MovieCatalog {
    /// Creates a new, empty catalog
    pub fn new() -> Self {
        Self { movies: Vec::new() }
    }

    /// Build a catalog from movies in any order.
    pub fn from_movies(mut movies: Vec<Movie>) -> Self {
        movies.sort_by(Movie::cmp_by_name);
        let catalog = Self { movies };
        debug_assert!(catalog.is_sorted());
        catalog
    }

    /// The movies in ascending name order.
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Movie> {
        self.movies.iter()
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn is_sorted(&self) -> bool {
        self.movies
            .windows(2)
            .all(|w| w[0].cmp_by_name(&w[1]) != Ordering::Greater)
    }
}

impl<'a> IntoIterator for &'a MovieCatalog {
    type Item = &'a Movie;
    type IntoIter = std::slice::Iter<'a, Movie>;

    fn into_iter(self) -> Self::IntoIter {
        self.movies.iter()
    }
}

//! MovieCatalog building and loading logic.
//!
//! Loading is a single pass: parse the file, sort once by name, and hand the
//! caller an owned catalog that is only borrowed from then on.

use crate::error::Result;
use crate::parser;
use crate::types::MovieCatalog;
use std::path::Path;

impl MovieCatalog {
    /// Load every movie from `path` and build the sorted catalog.
    ///
    /// Fails with `FileNotFound` if the file cannot be opened and with
    /// `ParseError` on the first malformed record.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        tracing::debug!("Loading movies from {}", path.display());

        let movies = parser::parse_movies(path)?;
        let catalog = MovieCatalog::from_movies(movies);

        tracing::info!(
            "Loaded {} movies from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }
}

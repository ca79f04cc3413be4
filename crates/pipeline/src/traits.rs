//! Core trait for prefix matching.
//!
//! Any strategy that can find the movies whose names start with a prefix
//! implements `PrefixMatcher`, so the reporter never cares which one runs.

use data_loader::{Movie, MovieCatalog};

/// Finds every movie in a catalog whose name starts with a prefix.
///
/// ## Contract
/// - Matching is case-sensitive and byte-exact
/// - Matches come back in catalog order (name ascending)
/// - Every implementation returns the same set for the same input
pub trait PrefixMatcher: Send + Sync {
    /// Returns the name of this matcher (for logging/debugging)
    fn name(&self) -> &str;

    /// Borrow the matching movies out of `catalog`.
    fn find_matches<'a>(&self, catalog: &'a MovieCatalog, prefix: &str) -> Vec<&'a Movie>;
}

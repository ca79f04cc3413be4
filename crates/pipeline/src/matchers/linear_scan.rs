//! Matcher that checks every movie in the catalog.
//!
//! O(n) per prefix. Kept as the reference behavior the binary-search
//! matcher is tested against.

use crate::traits::PrefixMatcher;
use data_loader::{Movie, MovieCatalog};

/// Filters the whole catalog with `starts_with`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearScanMatcher;

impl PrefixMatcher for LinearScanMatcher {
    fn name(&self) -> &str {
        "LinearScanMatcher"
    }

    fn find_matches<'a>(&self, catalog: &'a MovieCatalog, prefix: &str) -> Vec<&'a Movie> {
        catalog
            .iter()
            .filter(|movie| movie.has_prefix(prefix))
            .collect()
    }
}

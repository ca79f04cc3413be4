//! Matcher that jumps to the first candidate with a binary search.
//!
//! ## Algorithm
//! The catalog is sorted by name, so every name starting with `prefix` sits
//! in one contiguous run, and no name less than `prefix` can start with it.
//! 1. `lower_bound`: first index whose name is not less than `prefix`
//! 2. Scan forward while names keep the prefix
//!
//! Cost is O(log n + k) per prefix instead of O(n).

use crate::traits::PrefixMatcher;
use data_loader::{Movie, MovieCatalog};
use std::ops::Range;

/// First position in `movies` whose name is not less than `key`.
pub fn lower_bound(movies: &[Movie], key: &str) -> usize {
    movies.partition_point(|movie| movie.name() < key)
}

/// Index range of the movies whose names start with `prefix`.
pub fn prefix_range(movies: &[Movie], prefix: &str) -> Range<usize> {
    let start = lower_bound(movies, prefix);
    let len = movies[start..]
        .iter()
        .take_while(|movie| movie.has_prefix(prefix))
        .count();
    start..start + len
}

/// Lower-bound search plus a contiguous scan over the sorted catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinarySearchMatcher;

impl PrefixMatcher for BinarySearchMatcher {
    fn name(&self) -> &str {
        "BinarySearchMatcher"
    }

    fn find_matches<'a>(&self, catalog: &'a MovieCatalog, prefix: &str) -> Vec<&'a Movie> {
        let movies = catalog.movies();
        movies[prefix_range(movies, prefix)].iter().collect()
    }
}

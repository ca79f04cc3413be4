//! Ordering of the matches found for one prefix.

use data_loader::Movie;
use std::cmp::Ordering;

/// Rating descending, then name ascending for equal ratings.
pub fn compare_by_rating(a: &Movie, b: &Movie) -> Ordering {
    b.rating()
        .total_cmp(&a.rating())
        .then_with(|| a.name().cmp(b.name()))
}

/// Sort matches best-first.
pub fn rank_matches(mut matches: Vec<&Movie>) -> Vec<&Movie> {
    matches.sort_by(|a, b| compare_by_rating(a, b));
    matches
}

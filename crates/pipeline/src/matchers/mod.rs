//! Prefix matcher implementations.
//!
//! - `LinearScanMatcher`: checks every movie
//! - `BinarySearchMatcher`: lower bound plus contiguous scan
//!
//! `MatcherKind` picks one at runtime.

pub mod binary_search;
pub mod linear_scan;

pub use binary_search::BinarySearchMatcher;
pub use linear_scan::LinearScanMatcher;

use crate::traits::PrefixMatcher;

/// Which matcher implementation to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatcherKind {
    #[default]
    BinarySearch,
    LinearScan,
}

impl MatcherKind {
    /// Build the matcher this kind names.
    pub fn build(self) -> Box<dyn PrefixMatcher> {
        match self {
            MatcherKind::BinarySearch => Box::new(BinarySearchMatcher),
            MatcherKind::LinearScan => Box::new(LinearScanMatcher),
        }
    }
}

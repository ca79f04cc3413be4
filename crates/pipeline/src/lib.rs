//! Prefix matching and reporting over a loaded movie catalog.
//!
//! This crate provides:
//! - PrefixMatcher trait with linear-scan and binary-search implementations
//! - Ranking of matches (rating descending, name ascending)
//! - Report model with text and JSON renderers
//!
//! ## Architecture
//! 1. A matcher pulls the movies for each prefix out of the sorted catalog
//! 2. Matches are ranked best-first
//! 3. The report prints each prefix block, then the best movie per prefix
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{MatcherKind, Report};
//!
//! let matcher = MatcherKind::BinarySearch.build();
//! let report = Report::build(&catalog, &prefixes, matcher.as_ref());
//! report.write_text(&mut std::io::stdout().lock())?;
//! ```

pub mod traits;
pub mod matchers;
pub mod ranking;
pub mod report;

// Re-export main types
pub use traits::PrefixMatcher;
pub use matchers::{BinarySearchMatcher, LinearScanMatcher, MatcherKind};
pub use ranking::{compare_by_rating, rank_matches};
pub use report::{BestMatch, PrefixSection, Report, write_listing, write_listing_json};

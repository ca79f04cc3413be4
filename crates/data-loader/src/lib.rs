//! # Data Loader Crate
//!
//! Loads the movie list (and optional prefix list) used by prefix search.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, MovieCatalog)
//! - **parser**: Parse `"Name",rating` lines and prefix lines
//! - **index**: Build the name-sorted catalog from a file
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{MovieCatalog, parser};
//! use std::path::Path;
//!
//! let catalog = MovieCatalog::load_from_file(Path::new("movies.csv"))?;
//! let prefixes = parser::parse_prefixes(Path::new("prefixes.txt"))?;
//!
//! println!("{} movies, {} prefixes", catalog.len(), prefixes.len());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{Movie, MovieCatalog};
pub use parser::{parse_movies, parse_prefixes};

//! Parsers for the movie and prefix files.
//!
//! - movies file: one `"Name",rating` record per line
//! - prefix file: one prefix per line, blank lines ignored
//!
//! Malformed movie lines abort the load with a `ParseError` pointing at the
//! offending line.

use crate::error::{DataLoadError, Result};
use crate::types::Movie;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Read a whole file and return it as text.
///
/// Bytes that are not valid UTF-8 (old Latin-1 titles) are replaced rather
/// than failing the load.
fn read_text_lossy(path: &Path) -> Result<String> {
    let mut file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound | ErrorKind::PermissionDenied => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Strip one pair of surrounding double quotes from a movie name.
///
/// A leading quote with no closing quote is dropped on its own.
fn strip_quotes(raw: &str) -> &str {
    match raw.strip_prefix('"') {
        Some(inner) => inner.strip_suffix('"').unwrap_or(inner),
        None => raw,
    }
}

/// Parse a single movie record.
///
/// Format: `"Name",rating` (quotes optional). The split happens at the LAST
/// comma, so names may contain commas of their own.
pub fn parse_movie_line(line: &str, file: &str, line_no: usize) -> Result<Movie> {
    let parse_error = |reason: String| DataLoadError::ParseError {
        file: file.to_string(),
        line: line_no,
        reason,
    };

    let (raw_name, raw_rating) = line
        .rsplit_once(',')
        .ok_or_else(|| parse_error("Missing comma between name and rating".to_string()))?;

    let name = strip_quotes(raw_name);
    let rating: f64 = raw_rating
        .trim()
        .parse()
        .map_err(|e| parse_error(format!("Invalid rating '{}': {}", raw_rating.trim(), e)))?;

    Movie::new(name, rating).map_err(|e| parse_error(e.to_string()))
}

/// Parse movie records from in-memory text.
///
/// `file` is only used to label errors.
pub fn parse_movies_from_str(content: &str, file: &str) -> Result<Vec<Movie>> {
    let mut movies = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue; // Skip empty lines
        }
        movies.push(parse_movie_line(line, file, idx + 1)?);
    }

    Ok(movies)
}

/// Parse the movies file
pub fn parse_movies(path: &Path) -> Result<Vec<Movie>> {
    let content = read_text_lossy(path)?;
    parse_movies_from_str(&content, &path.display().to_string())
}

/// Collect prefixes from in-memory text, keeping their order.
///
/// Only empty lines are dropped; a line of spaces is a real prefix.
pub fn parse_prefixes_from_str(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse the prefix file
pub fn parse_prefixes(path: &Path) -> Result<Vec<String>> {
    let content = read_text_lossy(path)?;
    Ok(parse_prefixes_from_str(&content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_file(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_parse_quoted_line() {
        let movie = parse_movie_line("\"Up\",8.2", "movies.csv", 1).unwrap();
        assert_eq!(movie.name(), "Up");
        assert_eq!(movie.rating(), 8.2);
    }

    #[test]
    fn test_parse_unquoted_line() {
        let movie = parse_movie_line("Zoo,6", "movies.csv", 1).unwrap();
        assert_eq!(movie.name(), "Zoo");
        assert_eq!(movie.rating(), 6.0);
    }

    #[test]
    fn test_name_with_commas_splits_at_last_comma() {
        let movie = parse_movie_line("\"Crouching Tiger, Hidden Dragon\",7.9", "movies.csv", 1)
            .unwrap();
        assert_eq!(movie.name(), "Crouching Tiger, Hidden Dragon");
        assert_eq!(movie.rating(), 7.9);
    }

    #[test]
    fn test_rating_whitespace_is_trimmed() {
        let movie = parse_movie_line("\"Heat\", 8.3 ", "movies.csv", 1).unwrap();
        assert_eq!(movie.rating(), 8.3);
    }

    #[test]
    fn test_strip_quotes() {
        assert_eq!(strip_quotes("\"Up\""), "Up");
        assert_eq!(strip_quotes("\"Up"), "Up");
        assert_eq!(strip_quotes("Up"), "Up");
        assert_eq!(strip_quotes("Up\""), "Up\"");
    }

    #[test]
    fn test_missing_comma_is_an_error() {
        let err = parse_movie_line("\"Up\" 8.2", "movies.csv", 4).unwrap_err();
        match err {
            DataLoadError::ParseError { file, line, reason } => {
                assert_eq!(file, "movies.csv");
                assert_eq!(line, 4);
                assert!(reason.contains("Missing comma"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_numeric_rating_is_an_error() {
        let err = parse_movie_line("\"Up\",great", "movies.csv", 2).unwrap_err();
        assert!(matches!(err, DataLoadError::ParseError { line: 2, .. }));
    }

    #[test]
    fn test_non_finite_rating_is_an_error() {
        assert!(parse_movie_line("\"Up\",NaN", "movies.csv", 1).is_err());
        assert!(parse_movie_line("\"Up\",inf", "movies.csv", 1).is_err());
    }

    #[test]
    fn test_empty_name_is_an_error() {
        assert!(parse_movie_line("\"\",5.0", "movies.csv", 1).is_err());
        assert!(parse_movie_line(",5.0", "movies.csv", 1).is_err());
    }

    #[test]
    fn test_parse_movies_skips_blank_lines_and_counts_lines() {
        let content = "\"Up\",8.2\n\n   \n\"Zoo\",6.0\nbroken\n";
        let err = parse_movies_from_str(content, "movies.csv").unwrap_err();
        assert!(matches!(err, DataLoadError::ParseError { line: 5, .. }));

        let movies = parse_movies_from_str("\"Up\",8.2\r\n\r\n\"Zoo\",6.0\r\n", "movies.csv")
            .unwrap();
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[1].name(), "Zoo");
    }

    #[test]
    fn test_parse_prefixes_keeps_order_and_skips_blanks() {
        let prefixes = parse_prefixes_from_str("Up\n\nZz\nA\r\n\r\nUp\n");
        assert_eq!(prefixes, vec!["Up", "Zz", "A", "Up"]);
    }

    #[test]
    fn test_whitespace_prefix_is_kept() {
        let prefixes = parse_prefixes_from_str(" \nUp\n");
        assert_eq!(prefixes, vec![" ", "Up"]);
    }

    #[test]
    fn test_parse_movies_from_file() {
        let file = create_test_file(b"\"Up\",8.2\n\"Uptown\",7.5\n");
        let movies = parse_movies(file.path()).unwrap();
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].name(), "Up");
    }

    #[test]
    fn test_latin1_bytes_do_not_abort() {
        let file = create_test_file(b"\"Am\xe9lie\",8.3\n");
        let movies = parse_movies(file.path()).unwrap();
        assert_eq!(movies.len(), 1);
        assert!(movies[0].name().starts_with("Am"));
    }

    #[test]
    fn test_missing_file() {
        let err = parse_prefixes(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, DataLoadError::FileNotFound { .. }));
        assert_eq!(err.to_string(), "Could not open file /definitely/not/here.txt");
    }
}

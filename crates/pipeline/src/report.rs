//! Per-prefix reports and their renderers.
//!
//! The `Report` is built once from the catalog and the prefix list, then
//! rendered as plain text (the default) or JSON.

use crate::ranking::rank_matches;
use crate::traits::PrefixMatcher;
use data_loader::{Movie, MovieCatalog};
use serde::Serialize;
use std::io::{self, Write};

/// Matches for one prefix, ranked best-first.
#[derive(Debug, Clone, Serialize)]
pub struct PrefixSection<'a> {
    pub prefix: &'a str,
    pub matches: Vec<&'a Movie>,
}

impl<'a> PrefixSection<'a> {
    /// The top-ranked match, if any.
    pub fn best(&self) -> Option<&'a Movie> {
        self.matches.first().copied()
    }
}

/// Best-rated movie for a prefix that had at least one match.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BestMatch<'a> {
    pub prefix: &'a str,
    pub movie: &'a Movie,
}

/// Results for every requested prefix, in input order.
#[derive(Debug, Clone)]
pub struct Report<'a> {
    sections: Vec<PrefixSection<'a>>,
}

#[derive(Serialize)]
struct ReportJson<'r, 'a> {
    sections: &'r [PrefixSection<'a>],
    best: Vec<BestMatch<'a>>,
}

impl<'a> Report<'a> {
    /// Run `matcher` for each prefix and rank the results.
    pub fn build(
        catalog: &'a MovieCatalog,
        prefixes: &'a [String],
        matcher: &dyn PrefixMatcher,
    ) -> Self {
        tracing::debug!(
            "Matching {} prefixes with {}",
            prefixes.len(),
            matcher.name()
        );

        let sections = prefixes
            .iter()
            .map(|prefix| {
                let matches = rank_matches(matcher.find_matches(catalog, prefix));
                tracing::debug!("Prefix {:?}: {} matches", prefix, matches.len());
                PrefixSection {
                    prefix: prefix.as_str(),
                    matches,
                }
            })
            .collect();

        Self { sections }
    }

    pub fn sections(&self) -> &[PrefixSection<'a>] {
        &self.sections
    }

    /// Best match per prefix, skipping prefixes with no matches.
    pub fn best(&self) -> Vec<BestMatch<'a>> {
        self.sections
            .iter()
            .filter_map(|section| {
                section.best().map(|movie| BestMatch {
                    prefix: section.prefix,
                    movie,
                })
            })
            .collect()
    }

    /// Plain-text rendering.
    ///
    /// Each prefix prints its matches followed by a blank line, or a
    /// not-found line. The best-per-prefix summary comes last.
    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for section in &self.sections {
            if section.matches.is_empty() {
                writeln!(out, "No movies found with prefix {}", section.prefix)?;
                continue;
            }
            for movie in &section.matches {
                writeln!(out, "{}", movie)?;
            }
            writeln!(out)?;
        }

        for best in self.best() {
            writeln!(
                out,
                "Best movie with prefix {} is: {} with rating {:.1}",
                best.prefix,
                best.movie.name(),
                best.movie.rating()
            )?;
        }
        Ok(())
    }

    /// JSON rendering: `{ "sections": [...], "best": [...] }`.
    pub fn write_json<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let json = ReportJson {
            sections: &self.sections,
            best: self.best(),
        };
        serde_json::to_writer_pretty(&mut *out, &json)?;
        writeln!(out)
    }
}

/// Every movie in ascending name order, one `{name}, {rating:.1}` per line.
pub fn write_listing<W: Write>(catalog: &MovieCatalog, out: &mut W) -> io::Result<()> {
    for movie in catalog {
        writeln!(out, "{}", movie)?;
    }
    Ok(())
}

/// The full listing as a JSON array.
pub fn write_listing_json<W: Write>(catalog: &MovieCatalog, out: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, catalog.movies())?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matchers::BinarySearchMatcher;

    fn create_test_catalog() -> MovieCatalog {
        MovieCatalog::from_movies(vec![
            Movie::new("Up", 8.2).unwrap(),
            Movie::new("Uptown", 7.5).unwrap(),
            Movie::new("Zoo", 6.0).unwrap(),
        ])
    }

    fn render(report: &Report<'_>) -> String {
        let mut buf = Vec::new();
        report.write_text(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_report_text() {
        let catalog = create_test_catalog();
        let prefixes = vec!["Up".to_string(), "Zz".to_string()];
        let report = Report::build(&catalog, &prefixes, &BinarySearchMatcher);

        assert_eq!(
            render(&report),
            "Up, 8.2\n\
             Uptown, 7.5\n\
             \n\
             No movies found with prefix Zz\n\
             Best movie with prefix Up is: Up with rating 8.2\n"
        );
    }

    #[test]
    fn test_best_skips_empty_sections() {
        let catalog = create_test_catalog();
        let prefixes = vec!["Zz".to_string(), "Z".to_string()];
        let report = Report::build(&catalog, &prefixes, &BinarySearchMatcher);

        let best = report.best();
        assert_eq!(best.len(), 1);
        assert_eq!(best[0].prefix, "Z");
        assert_eq!(best[0].movie.name(), "Zoo");
    }

    #[test]
    fn test_listing() {
        let catalog = create_test_catalog();
        let mut buf = Vec::new();
        write_listing(&catalog, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Up, 8.2\nUptown, 7.5\nZoo, 6.0\n"
        );
    }

    #[test]
    fn test_report_json() {
        let catalog = create_test_catalog();
        let prefixes = vec!["Up".to_string()];
        let report = Report::build(&catalog, &prefixes, &BinarySearchMatcher);

        let mut buf = Vec::new();
        report.write_json(&mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(value["sections"][0]["prefix"], "Up");
        assert_eq!(value["sections"][0]["matches"][1]["name"], "Uptown");
        assert_eq!(value["best"][0]["movie"]["name"], "Up");
        assert_eq!(value["best"][0]["movie"]["rating"], 8.2);
    }
}

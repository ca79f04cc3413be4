use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use data_loader::{parser, MovieCatalog};
use pipeline::{write_listing, write_listing_json, MatcherKind, Report};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Movie prefix search - list movies by name prefix, best-rated first
#[derive(Parser, Debug)]
#[command(name = "movie-prefix")]
#[command(about = "Find movies by name prefix and report the best-rated match per prefix", long_about = None)]
struct Cli {
    /// Movies file, one `"Name",rating` record per line
    movies_file: PathBuf,

    /// Prefix file, one prefix per line (omit to list every movie)
    prefix_file: Option<PathBuf>,

    /// Matching strategy
    #[arg(long, value_enum, default_value_t = MatcherArg::Binary)]
    matcher: MatcherArg,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log debug details to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum MatcherArg {
    /// Lower-bound binary search plus contiguous scan
    Binary,
    /// Check every movie
    Linear,
}

impl From<MatcherArg> for MatcherKind {
    fn from(arg: MatcherArg) -> Self {
        match arg {
            MatcherArg::Binary => MatcherKind::BinarySearch,
            MatcherArg::Linear => MatcherKind::LinearScan,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Usage errors exit 1 instead of clap's 2
        Err(err) if err.use_stderr() => {
            eprint!("{}", err);
            std::process::exit(1);
        }
        // --help and --version
        Err(err) => err.exit(),
    };

    init_tracing(cli.verbose);

    if let Err(err) = run(&cli) {
        eprintln!("{} {:#}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout carries only the report
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let start = Instant::now();
    let catalog = MovieCatalog::load_from_file(&cli.movies_file)
        .with_context(|| format!("Failed to load movies from {}", cli.movies_file.display()))?;
    tracing::debug!("Loaded catalog in {:?}", start.elapsed());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match &cli.prefix_file {
        None => handle_listing(&catalog, cli.format, &mut out)?,
        Some(prefix_file) => handle_prefixes(&catalog, prefix_file, cli, &mut out)?,
    }

    out.flush().context("Failed to write output")?;
    Ok(())
}

/// Handle a run without a prefix file: every movie, ascending by name
fn handle_listing<W: Write>(catalog: &MovieCatalog, format: OutputFormat, out: &mut W) -> Result<()> {
    let written = match format {
        OutputFormat::Text => write_listing(catalog, out),
        OutputFormat::Json => write_listing_json(catalog, out),
    };
    written.context("Failed to write movie listing")
}

/// Handle a run with a prefix file: one block per prefix, then the summary
fn handle_prefixes<W: Write>(
    catalog: &MovieCatalog,
    prefix_file: &Path,
    cli: &Cli,
    out: &mut W,
) -> Result<()> {
    let prefixes = parser::parse_prefixes(prefix_file)
        .with_context(|| format!("Failed to read prefixes from {}", prefix_file.display()))?;
    tracing::info!("Read {} prefixes", prefixes.len());

    let matcher = MatcherKind::from(cli.matcher).build();
    let report = Report::build(catalog, &prefixes, matcher.as_ref());

    let written = match cli.format {
        OutputFormat::Text => report.write_text(out),
        OutputFormat::Json => report.write_json(out),
    };
    written.context("Failed to write prefix report")
}

//! Command-line interface for the Folio book recommender.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use log::LevelFilter;

mod error;
mod recommend;
mod render;
mod sources;
mod summary;

pub use error::CliError;

use recommend::{RecommendArgs, run_recommend};
use summary::{SummaryArgs, run_summary};

const ARG_TITLE: &str = "title";
const ARG_COUNT: &str = "count";
const ARG_FORMAT: &str = "format";
const ARG_DATA_DIR: &str = "data-dir";
const ARG_BOOKS: &str = "books";
const ARG_USERS: &str = "users";
const ARG_RATINGS: &str = "ratings";
const ARG_MIN_VOTES_QUANTILE: &str = "min-votes-quantile";

const DEFAULT_COUNT: usize = 5;

/// Run the Folio CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration, source files or the
/// pipeline itself fail.
pub fn run() -> Result<(), CliError> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Help and version output are not failures.
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => return Err(CliError::ArgumentParsing(err)),
    };
    init_logging(cli.verbose);
    match cli.command {
        Command::Recommend(args) => run_recommend(args),
        Command::Summary(args) => run_summary(args),
    }
}

/// `RUST_LOG` wins when set; otherwise warnings, or info with `--verbose`.
fn init_logging(verbose: bool) {
    let fallback = if verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(fallback.as_str()),
    )
    .try_init();
}

#[derive(Debug, Parser)]
#[command(
    name = "folio",
    about = "Author-based book recommendations from Book-Crossing exports",
    version
)]
struct Cli {
    /// Log pipeline stage counts.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Recommend other books by the author of a title.
    Recommend(RecommendArgs),
    /// Report how many rows survived each pipeline stage.
    Summary(SummaryArgs),
}

#[cfg(test)]
mod tests;

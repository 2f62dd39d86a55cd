//! Recommend command implementation for the Folio CLI.

use std::io::{BufRead, Write};

use camino::Utf8PathBuf;
use clap::Parser;
use folio::{AuthorRecommender, Catalogue, Recommender};
use log::{debug, info};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::render::{OutputFormat, write_recommendation};
use crate::sources::{SourceConfig, SourceOverrides};
use crate::{
    ARG_BOOKS, ARG_COUNT, ARG_DATA_DIR, ARG_FORMAT, ARG_MIN_VOTES_QUANTILE, ARG_RATINGS,
    ARG_TITLE, ARG_USERS, CliError, DEFAULT_COUNT,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Recommend other books by the author of a title. The \
                 catalogue is built once from the books, users and ratings \
                 exports; when no title is given, titles are read one per \
                 line from standard input and each is answered in turn.",
    about = "Recommend books by the same author"
)]
#[ortho_config(prefix = "FOLIO")]
pub(crate) struct RecommendArgs {
    /// Title of a book the reader liked.
    #[arg(long = ARG_TITLE, value_name = "title")]
    #[serde(default)]
    pub(crate) title: Option<String>,
    /// Number of books to recommend (default 5).
    #[arg(long = ARG_COUNT, value_name = "n")]
    #[serde(default)]
    pub(crate) count: Option<usize>,
    /// Output format.
    #[arg(long = ARG_FORMAT, value_enum)]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
    /// Directory containing the default export file names.
    #[arg(long = ARG_DATA_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) data_dir: Option<Utf8PathBuf>,
    /// Override the path to the books table (`books.csv`).
    #[arg(long = ARG_BOOKS, value_name = "path")]
    #[serde(default)]
    pub(crate) books: Option<Utf8PathBuf>,
    /// Override the path to the users table (`users.csv`).
    #[arg(long = ARG_USERS, value_name = "path")]
    #[serde(default)]
    pub(crate) users: Option<Utf8PathBuf>,
    /// Override the path to the ratings table (`ratings.csv`).
    #[arg(long = ARG_RATINGS, value_name = "path")]
    #[serde(default)]
    pub(crate) ratings: Option<Utf8PathBuf>,
    /// Quantile of ratings counts used as the minimum-votes threshold.
    #[arg(long = ARG_MIN_VOTES_QUANTILE, value_name = "q")]
    #[serde(default)]
    pub(crate) min_votes_quantile: Option<f64>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecommendConfig {
    /// Single title to answer; `None` reads titles from standard input.
    pub(crate) title: Option<String>,
    /// Number of books requested per title.
    pub(crate) count: usize,
    /// Output format.
    pub(crate) format: OutputFormat,
    /// Source tables and scoring settings.
    pub(crate) sources: SourceConfig,
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let count = args.count.unwrap_or(DEFAULT_COUNT);
        if count == 0 {
            return Err(CliError::ZeroCount { field: ARG_COUNT });
        }
        let sources = SourceConfig::try_from(SourceOverrides {
            data_dir: args.data_dir,
            books: args.books,
            users: args.users,
            ratings: args.ratings,
            min_votes_quantile: args.min_votes_quantile,
        })?;
        Ok(Self {
            title: args.title,
            count,
            format: args.format.unwrap_or_default(),
            sources,
        })
    }
}

pub(super) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();
    let config = resolve_recommend_config(args)?;
    run_recommend_with(&config, stdin, &mut stdout)
}

fn resolve_recommend_config(args: RecommendArgs) -> Result<RecommendConfig, CliError> {
    let config = args.into_config()?;
    config.sources.validate_sources()?;
    Ok(config)
}

/// Build the catalogue once, then answer the configured title or every title
/// read from `input`.
pub(super) fn run_recommend_with(
    config: &RecommendConfig,
    input: impl BufRead,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let (catalogue, report) = config.sources.build()?;
    info!(
        "catalogue ready with {} books (C = {:.4}, m = {})",
        catalogue.len(),
        report.summary.global_mean,
        report.summary.min_votes
    );
    match &config.title {
        Some(title) => answer(&catalogue, title, config, writer),
        None => answer_lines(&catalogue, input, config, writer),
    }
}

fn answer_lines(
    catalogue: &Catalogue,
    input: impl BufRead,
    config: &RecommendConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    for line in input.lines() {
        let title = line.map_err(CliError::ReadTitles)?;
        if title.trim().is_empty() {
            continue;
        }
        answer(catalogue, &title, config, writer)?;
        writer.flush().map_err(CliError::WriteOutput)?;
    }
    Ok(())
}

fn answer(
    catalogue: &Catalogue,
    title: &str,
    config: &RecommendConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    debug!("answering {title:?}");
    let outcome = AuthorRecommender
        .recommend(catalogue, title, config.count)
        .map_err(|source| CliError::Recommend {
            title: title.to_owned(),
            source,
        })?;
    write_recommendation(
        writer,
        &outcome,
        config.count,
        catalogue.display_precision(),
        config.format,
    )
}

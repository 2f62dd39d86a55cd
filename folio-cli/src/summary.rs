//! Summary command implementation for the Folio CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::render::{OutputFormat, write_report};
use crate::sources::{SourceConfig, SourceOverrides};
use crate::{
    ARG_BOOKS, ARG_DATA_DIR, ARG_FORMAT, ARG_MIN_VOTES_QUANTILE, ARG_RATINGS, ARG_USERS,
    CliError,
};

/// CLI arguments for the `summary` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Build the catalogue and report how many rows survived each \
                 stage, together with the global mean rating and the \
                 minimum-votes threshold used for weighting.",
    about = "Report pipeline stage counts"
)]
#[ortho_config(prefix = "FOLIO")]
pub(crate) struct SummaryArgs {
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

impl SummaryArgs {
    pub(crate) fn into_config(self) -> Result<SummaryConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SummaryConfig::try_from(merged)
    }
}

/// Resolved `summary` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SummaryConfig {
    /// Output format.
    pub(crate) format: OutputFormat,
    /// Source tables and scoring settings.
    pub(crate) sources: SourceConfig,
}

impl TryFrom<SummaryArgs> for SummaryConfig {
    type Error = CliError;

    fn try_from(args: SummaryArgs) -> Result<Self, Self::Error> {
        let sources = SourceConfig::try_from(SourceOverrides {
            data_dir: args.data_dir,
            books: args.books,
            users: args.users,
            ratings: args.ratings,
            min_votes_quantile: args.min_votes_quantile,
        })?;
        Ok(Self {
            format: args.format.unwrap_or_default(),
            sources,
        })
    }
}

pub(super) fn run_summary(args: SummaryArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.sources.validate_sources()?;
    let mut stdout = std::io::stdout().lock();
    run_summary_with(&config, &mut stdout)
}

pub(super) fn run_summary_with(
    config: &SummaryConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let (_, report) = config.sources.build()?;
    write_report(writer, &report, config.format)
}

//! Source table and scoring settings shared by every subcommand.

use camino::{Utf8Path, Utf8PathBuf};
use folio::{
    BOOKS_FILE, Catalogue, PipelineReport, RATINGS_FILE, ScoreConfig, SourcePaths, USERS_FILE,
    load_catalogue,
};

use crate::{
    ARG_BOOKS, ARG_DATA_DIR, ARG_MIN_VOTES_QUANTILE, ARG_RATINGS, ARG_USERS, CliError,
};

/// Source table flags before defaults are applied.
#[derive(Debug, Clone, Default)]
pub(crate) struct SourceOverrides {
    pub(crate) data_dir: Option<Utf8PathBuf>,
    pub(crate) books: Option<Utf8PathBuf>,
    pub(crate) users: Option<Utf8PathBuf>,
    pub(crate) ratings: Option<Utf8PathBuf>,
    pub(crate) min_votes_quantile: Option<f64>,
}

/// Resolved locations of the source tables plus scoring settings.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SourceConfig {
    /// Directory holding the default file names.
    pub(crate) data_dir: Utf8PathBuf,
    /// Paths of the books, users and ratings tables.
    pub(crate) paths: SourcePaths,
    /// Weighted-score settings.
    pub(crate) score: ScoreConfig,
}

impl TryFrom<SourceOverrides> for SourceConfig {
    type Error = CliError;

    fn try_from(overrides: SourceOverrides) -> Result<Self, Self::Error> {
        let data_dir = overrides
            .data_dir
            .unwrap_or_else(|| Utf8PathBuf::from("."));
        let books = overrides
            .books
            .unwrap_or_else(|| data_dir.join(BOOKS_FILE));
        let users = overrides
            .users
            .unwrap_or_else(|| data_dir.join(USERS_FILE));
        let ratings = overrides
            .ratings
            .unwrap_or_else(|| data_dir.join(RATINGS_FILE));

        let mut score = ScoreConfig::default();
        if let Some(quantile) = overrides.min_votes_quantile {
            if !(0.0..=1.0).contains(&quantile) {
                return Err(CliError::QuantileOutOfRange {
                    field: ARG_MIN_VOTES_QUANTILE,
                    value: quantile,
                });
            }
            score = score.with_min_votes_quantile(quantile);
        }

        Ok(Self {
            data_dir,
            paths: SourcePaths {
                books,
                users,
                ratings,
            },
            score,
        })
    }
}

impl SourceConfig {
    /// Confirm the data directory and every source table exist.
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        match folio_fs::dir_is_dir(&self.data_dir) {
            Ok(true) => {}
            Ok(false) => {
                return Err(CliError::DataDirNotDirectory {
                    field: ARG_DATA_DIR,
                    path: self.data_dir.clone(),
                });
            }
            Err(source) => {
                return Err(CliError::InspectSourcePath {
                    field: ARG_DATA_DIR,
                    path: self.data_dir.clone(),
                    source,
                });
            }
        }
        Self::require_existing(&self.paths.books, ARG_BOOKS)?;
        Self::require_existing(&self.paths.users, ARG_USERS)?;
        Self::require_existing(&self.paths.ratings, ARG_RATINGS)?;
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        let inspect_error = |source| CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        };
        if folio_fs::file_is_file(path).map_err(inspect_error)? {
            return Ok(());
        }
        if folio_fs::dir_is_dir(path).map_err(inspect_error)? {
            Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            })
        } else {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
    }

    /// Load the tables and build the catalogue.
    pub(crate) fn build(&self) -> Result<(Catalogue, PipelineReport), CliError> {
        Ok(load_catalogue(&self.paths, self.score)?)
    }
}

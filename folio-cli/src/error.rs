//! Error types emitted by the Folio CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use folio::{BuildError, RecommendError};
use thiserror::Error;

/// Errors emitted by the Folio CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// The minimum-votes quantile lies outside `0.0..=1.0`.
    #[error("{field} must lie within 0.0..=1.0 (got {value})")]
    QuantileOutOfRange { field: &'static str, value: f64 },
    /// Fewer than one recommendation was requested.
    #[error("{field} must be at least 1")]
    ZeroCount { field: &'static str },
    /// The data directory does not exist or is not a directory.
    #[error("{field} path {path:?} is not a directory")]
    DataDirNotDirectory {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Loading, cleaning or scoring the catalogue failed.
    #[error(transparent)]
    Build(#[from] BuildError),
    /// A recommendation query was rejected.
    #[error("failed to answer {title:?}: {source}")]
    Recommend {
        title: String,
        #[source]
        source: RecommendError,
    },
    /// Reading titles from standard input failed.
    #[error("failed to read titles from standard input: {0}")]
    ReadTitles(#[source] std::io::Error),
    /// Serialising output to JSON failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}

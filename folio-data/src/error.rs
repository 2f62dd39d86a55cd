//! Error types raised while reading the source tables.

use camino::Utf8PathBuf;
use folio_core::RatingError;
use thiserror::Error;

/// Errors raised while loading the books, users or ratings tables.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Opening a source file failed.
    #[error("failed to open {path}: {source}")]
    Open {
        /// Requested file path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The CSV header could not be read.
    #[error("failed to read the header row of {path}: {source}")]
    Header {
        /// File being read.
        path: Utf8PathBuf,
        /// Source error from `csv`.
        #[source]
        source: csv::Error,
    },
    /// A record could not be read or did not match the expected columns.
    #[error("malformed record at line {line} of {path}: {source}")]
    Record {
        /// File being read.
        path: Utf8PathBuf,
        /// One-based line of the record, when known.
        line: u64,
        /// Source error from `csv`.
        #[source]
        source: csv::Error,
    },
    /// A rating lay outside the accepted scale.
    #[error("invalid rating at line {line} of {path}: {source}")]
    Rating {
        /// File being read.
        path: Utf8PathBuf,
        /// One-based line of the record.
        line: u64,
        /// Validation failure.
        #[source]
        source: RatingError,
    },
}

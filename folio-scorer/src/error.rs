//! Error types raised while scoring the aggregated corpus.
#![forbid(unsafe_code)]

use folio_core::CatalogueError;
use thiserror::Error;

/// Errors raised while computing weighted scores.
#[derive(Debug, Error, PartialEq)]
pub enum ScoreError {
    /// No books reached the scorer, so the global mean and threshold are
    /// undefined.
    #[error("cannot score an empty corpus")]
    EmptyCorpus,
    /// The minimum-votes quantile was not a finite value in `0.0..=1.0`.
    #[error("minimum-votes quantile {value} must lie within 0.0..=1.0")]
    InvalidQuantile {
        /// Configured quantile.
        value: f64,
    },
    /// The display precision exceeded the supported number of places.
    #[error("display precision {value} exceeds {max} decimal places")]
    InvalidPrecision {
        /// Configured precision.
        value: u8,
        /// Largest supported precision.
        max: u8,
    },
    /// A book without ratings met a zero threshold, leaving its score
    /// undefined.
    #[error("book {title:?} by {author:?} has no ratings to score")]
    UnratedBook {
        /// Title of the affected book.
        title: String,
        /// Author of the affected book.
        author: String,
    },
    /// The scored rows did not form a valid catalogue.
    #[error("scored books do not form a valid catalogue: {0}")]
    Catalogue(#[from] CatalogueError),
}

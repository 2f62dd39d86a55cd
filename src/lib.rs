//! Facade crate for the Folio book recommender.
//!
//! This crate re-exports the domain types of the member crates and wires the
//! cleaning, aggregation and scoring stages into a single
//! [`build_catalogue`] call. The resulting [`Catalogue`] is immutable and
//! answers any number of [`recommend`] queries.
//!
//! # Examples
//!
//! ```no_run
//! use camino::Utf8Path;
//! use folio::{ScoreConfig, SourcePaths, load_catalogue, recommend};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let paths = SourcePaths::in_dir(Utf8Path::new("data"));
//! let (catalogue, _report) = load_catalogue(&paths, ScoreConfig::default())?;
//! let outcome = recommend("The Hobbit", 5, &catalogue)?;
//! println!("{outcome:?}");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

use camino::{Utf8Path, Utf8PathBuf};
use log::{info, warn};
use serde::Serialize;
use thiserror::Error;

pub use folio_core::{
    AggregatedBook, AuthorRecommender, BookRecord, BookResult, Catalogue, CatalogueError,
    Location, OTHER, Rating, RatingRecord, RecommendError, Recommendation, Recommender,
    ScoreSummary, ScoredBook, UserRecord, normalise_title, recommend,
};
pub use folio_data::{
    AggregationReport, IngestError, LocationStats, ParsedLocation, SourceTables, UserTable,
    aggregate_ratings, deduplicate_users, parse_location, parse_location_tracked,
    repeated_user_ids,
};
pub use folio_scorer::{ScoreConfig, ScoreError, score_books};

/// Default file name of the books table.
pub const BOOKS_FILE: &str = "books.csv";
/// Default file name of the users table.
pub const USERS_FILE: &str = "users.csv";
/// Default file name of the ratings table.
pub const RATINGS_FILE: &str = "ratings.csv";

/// Locations of the three source tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePaths {
    /// Books table.
    pub books: Utf8PathBuf,
    /// Users table.
    pub users: Utf8PathBuf,
    /// Ratings table.
    pub ratings: Utf8PathBuf,
}

impl SourcePaths {
    /// Use the default file names inside `dir`.
    #[must_use]
    pub fn in_dir(dir: &Utf8Path) -> Self {
        Self {
            books: dir.join(BOOKS_FILE),
            users: dir.join(USERS_FILE),
            ratings: dir.join(RATINGS_FILE),
        }
    }
}

/// Counts recorded at each stage of [`build_catalogue`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PipelineReport {
    /// Users read from the source table.
    pub users_loaded: usize,
    /// Users left after removing exact duplicates.
    pub users_kept: usize,
    /// Surviving users whose id is shared with another row.
    pub repeated_user_ids: usize,
    /// Location fallbacks recorded while the users were parsed.
    pub locations: LocationStats,
    /// Join and grouping counts.
    pub aggregation: AggregationReport,
    /// Global mean rating `C` and minimum-votes threshold `m`.
    pub summary: ScoreSummary,
}

/// Errors raised while building the catalogue.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Reading the source tables failed.
    #[error("failed to load source tables: {0}")]
    Ingest(#[from] IngestError),
    /// Scoring the aggregated books failed.
    #[error("failed to score books: {0}")]
    Score(#[from] ScoreError),
}

/// Run the cleaning, aggregation and scoring stages over `tables`.
///
/// # Errors
/// Returns [`BuildError::Score`] when no book survives aggregation or the
/// scoring configuration is invalid.
pub fn build_catalogue(
    tables: SourceTables,
    config: ScoreConfig,
) -> Result<(Catalogue, PipelineReport), BuildError> {
    let SourceTables {
        books,
        users,
        ratings,
        locations,
    } = tables;

    info!(
        "{} users: {} without a state, {} without a country",
        locations.users, locations.missing_state, locations.missing_country
    );

    let users_loaded = users.len();
    let unique_users = deduplicate_users(users);
    let repeated = repeated_user_ids(&unique_users);
    if repeated > 0 {
        warn!("{repeated} users share an id with another row; their ratings are counted per row");
    }

    let aggregation = aggregate_ratings(&books, &unique_users, &ratings);
    let catalogue = score_books(aggregation.books, config)?;
    let report = PipelineReport {
        users_loaded,
        users_kept: unique_users.len(),
        repeated_user_ids: repeated,
        locations,
        aggregation: aggregation.report,
        summary: catalogue.summary(),
    };
    Ok((catalogue, report))
}

/// Load the source tables from `paths` and build the catalogue.
///
/// # Errors
/// Returns [`BuildError::Ingest`] when a table cannot be read and
/// [`BuildError::Score`] when scoring fails.
pub fn load_catalogue(
    paths: &SourcePaths,
    config: ScoreConfig,
) -> Result<(Catalogue, PipelineReport), BuildError> {
    let tables = SourceTables::load(&paths.books, &paths.users, &paths.ratings)?;
    build_catalogue(tables, config)
}

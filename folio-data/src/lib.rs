//! Data access and cleaning for the Folio recommender.
//!
//! Responsibilities:
//! - Read the books, users and ratings tables from CSV.
//! - Normalise free-text user locations ([`parse_location`]).
//! - Remove duplicate users ([`deduplicate_users`]).
//! - Join and aggregate explicit ratings per book ([`aggregate_ratings`]).
//!
//! Boundaries:
//! - Scoring lives in `folio-scorer`; query answering in `folio-core`.
//!
//! Invariants:
//! - Every stage is a pure function of its inputs.
//! - No global mutable state.

#![forbid(unsafe_code)]

use camino::Utf8Path;
use folio_core::{BookRecord, RatingRecord, UserRecord};

mod aggregate;
mod dedup;
mod error;
pub mod ingest;
mod location;

pub use aggregate::{Aggregation, AggregationReport, aggregate_ratings};
pub use dedup::{deduplicate_users, repeated_user_ids};
pub use error::IngestError;
pub use ingest::{
    UserTable, load_books, load_ratings, load_users, read_books, read_ratings, read_users,
};
pub use location::{LocationStats, ParsedLocation, parse_location, parse_location_tracked};

/// The three raw tables the pipeline starts from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceTables {
    /// Book catalogue rows.
    pub books: Vec<BookRecord>,
    /// Users with expanded locations, before deduplication.
    pub users: Vec<UserRecord>,
    /// Ratings, including implicit zero ratings.
    pub ratings: Vec<RatingRecord>,
    /// Location fallbacks recorded while parsing `users`.
    pub locations: LocationStats,
}

impl SourceTables {
    /// Load all three tables from CSV files.
    ///
    /// # Errors
    /// Returns the first [`IngestError`] raised while reading any table.
    ///
    /// # Examples
    /// ```no_run
    /// use camino::Utf8Path;
    /// use folio_data::SourceTables;
    ///
    /// # fn main() -> Result<(), folio_data::IngestError> {
    /// let tables = SourceTables::load(
    ///     Utf8Path::new("data/books.csv"),
    ///     Utf8Path::new("data/users.csv"),
    ///     Utf8Path::new("data/ratings.csv"),
    /// )?;
    /// println!("{} ratings", tables.ratings.len());
    /// # Ok(())
    /// # }
    /// ```
    pub fn load(
        books: &Utf8Path,
        users: &Utf8Path,
        ratings: &Utf8Path,
    ) -> Result<Self, IngestError> {
        let books = load_books(books)?;
        let UserTable { users, locations } = load_users(users)?;
        Ok(Self {
            books,
            users,
            ratings: load_ratings(ratings)?,
            locations,
        })
    }
}

#[cfg(test)]
mod tests;

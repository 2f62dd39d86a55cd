//! Core domain types for the Folio recommender.
//!
//! The crate defines the records flowing through the cleaning and scoring
//! pipeline, the immutable [`Catalogue`] produced at the end of it, and the
//! [`Recommender`] seam used to answer queries against that catalogue.
//! Constructors that enforce invariants return `Result` so invalid input is
//! rejected at the boundary.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod book;
pub mod catalogue;
pub mod rating;
pub mod recommend;
pub mod user;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use book::{AggregatedBook, BookRecord, BookResult, ScoredBook};
pub use catalogue::{
    Catalogue, CatalogueError, DEFAULT_DISPLAY_PRECISION, ScoreSummary, normalise_title,
};
pub use rating::{MAX_RATING, Rating, RatingError, RatingRecord};
pub use recommend::{AuthorRecommender, RecommendError, Recommendation, Recommender, recommend};
pub use user::{Location, OTHER, UserRecord};

//! Recommend books for a reader who liked a given title.
//!
//! The [`Recommender`] trait is the seam between front ends and ranking
//! strategies; [`AuthorRecommender`] is the only strategy shipped: other books
//! by the same author, best weighted score first.

use log::debug;
#[cfg(feature = "serde")]
use serde::Serialize;
use thiserror::Error;

use crate::{BookResult, Catalogue, ScoredBook, normalise_title};

/// Errors raised before a recommendation query runs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecommendError {
    /// Fewer than one recommendation was requested.
    #[error("recommendation count must be at least 1 (got {count})")]
    InvalidCount {
        /// Requested count.
        count: usize,
    },
}

/// Outcome of a recommendation query.
///
/// An unknown title is a normal outcome, distinct from a known title whose
/// author wrote nothing else.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "outcome", rename_all = "snake_case"))]
pub enum Recommendation {
    /// No catalogue title matched the query.
    NotFound {
        /// Query as supplied by the caller.
        title: String,
    },
    /// The title matched; `books` may be empty.
    Found {
        /// Query as supplied by the caller.
        title: String,
        /// Author of the matched title.
        author: String,
        /// Recommended books, best score first.
        books: Vec<BookResult>,
    },
}

impl Recommendation {
    /// Return the recommended books, or `None` when the title was not found.
    #[must_use]
    pub fn books(&self) -> Option<&[BookResult]> {
        match self {
            Self::NotFound { .. } => None,
            Self::Found { books, .. } => Some(books),
        }
    }

    /// Report whether the queried title was unknown.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Produce recommendations from a [`Catalogue`].
///
/// Implementations must be pure reads over the catalogue so one catalogue can
/// serve concurrent queries.
///
/// # Examples
///
/// ```rust
/// use folio_core::{
///     AggregatedBook, Catalogue, Recommendation, RecommendError, Recommender, ScoreSummary,
///     ScoredBook,
/// };
///
/// struct Nothing;
///
/// impl Recommender for Nothing {
///     fn recommend(
///         &self,
///         _catalogue: &Catalogue,
///         title: &str,
///         _count: usize,
///     ) -> Result<Recommendation, RecommendError> {
///         Ok(Recommendation::NotFound { title: title.to_owned() })
///     }
/// }
///
/// let book = ScoredBook {
///     book: AggregatedBook {
///         title: "Emma".into(),
///         author: "Jane Austen".into(),
///         cover_image_url: String::new(),
///         avg_rating: 8.0,
///         ratings_count: 4,
///     },
///     weighted_score: 8.0,
/// };
/// let summary = ScoreSummary { global_mean: 8.0, min_votes: 4 };
/// let catalogue = Catalogue::new(vec![book], summary, 2).expect("valid catalogue");
/// let outcome = Nothing.recommend(&catalogue, "Emma", 3).expect("valid count");
/// assert!(outcome.is_not_found());
/// ```
pub trait Recommender: Send + Sync {
    /// Recommend up to `count` books for a reader of `title`.
    ///
    /// # Errors
    /// Returns [`RecommendError::InvalidCount`] when `count` is zero.
    fn recommend(
        &self,
        catalogue: &Catalogue,
        title: &str,
        count: usize,
    ) -> Result<Recommendation, RecommendError>;
}

/// Recommend other books by the author of the queried title.
///
/// Titles match after trimming and lower-casing only. Every catalogue row with
/// the queried normalised title is excluded, so a book never recommends
/// another edition of itself. Equal scores keep catalogue order.
#[derive(Debug, Default, Clone, Copy)]
pub struct AuthorRecommender;

impl Recommender for AuthorRecommender {
    fn recommend(
        &self,
        catalogue: &Catalogue,
        title: &str,
        count: usize,
    ) -> Result<Recommendation, RecommendError> {
        if count < 1 {
            return Err(RecommendError::InvalidCount { count });
        }
        let query = normalise_title(title);
        let Some(author) = catalogue.author_of(&query) else {
            debug!("no catalogue title matches {query:?}");
            return Ok(Recommendation::NotFound {
                title: title.to_owned(),
            });
        };

        let mut candidates: Vec<&ScoredBook> = catalogue
            .entries()
            .filter(|(normalised, scored)| scored.book.author == author && *normalised != query)
            .map(|(_, scored)| scored)
            .collect();
        candidates.sort_by(|a, b| b.weighted_score.total_cmp(&a.weighted_score));
        debug!(
            "{} candidate books by {author:?} for {query:?}",
            candidates.len()
        );

        let precision = catalogue.display_precision();
        let books = candidates
            .into_iter()
            .take(count)
            .map(|scored| BookResult::from_scored(scored, precision))
            .collect();
        Ok(Recommendation::Found {
            title: title.to_owned(),
            author: author.to_owned(),
            books,
        })
    }
}

/// Recommend up to `count` other books by the author of `title`.
///
/// Shorthand for [`AuthorRecommender`].
///
/// # Errors
/// Returns [`RecommendError::InvalidCount`] when `count` is zero.
pub fn recommend(
    title: &str,
    count: usize,
    catalogue: &Catalogue,
) -> Result<Recommendation, RecommendError> {
    AuthorRecommender.recommend(catalogue, title, count)
}

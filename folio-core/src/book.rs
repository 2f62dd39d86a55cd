//! Book records as they move through the pipeline.
//!
//! A [`BookRecord`] is a row of the raw catalogue, an [`AggregatedBook`] is the
//! rating summary for one `(title, author)` pair, and a [`ScoredBook`] carries
//! the smoothed score computed over the whole corpus.

#[cfg(feature = "serde")]
use serde::Serialize;

/// A single row of the book catalogue.
///
/// Titles and authors are free text; only the `(title, author)` pair
/// identifies a book. Several ISBNs may map to the same pair.
///
/// # Examples
/// ```
/// use folio_core::BookRecord;
///
/// let book = BookRecord::new("0439136350", "Harry Potter", "J. K. Rowling", "http://img/hp.jpg");
/// assert_eq!(book.author, "J. K. Rowling");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct BookRecord {
    /// International Standard Book Number used to join ratings.
    pub isbn: String,
    /// Book title as published.
    pub title: String,
    /// Author name as published.
    pub author: String,
    /// Medium-size cover image URL.
    pub cover_image_url: String,
}

impl BookRecord {
    /// Construct a [`BookRecord`] from its four columns.
    pub fn new(
        isbn: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        cover_image_url: impl Into<String>,
    ) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            cover_image_url: cover_image_url.into(),
        }
    }
}

/// Explicit rating statistics for one `(title, author)` pair.
///
/// `ratings_count` is always at least one: rows only exist when some explicit
/// rating joined against the book.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct AggregatedBook {
    /// Book title as published.
    pub title: String,
    /// Author name as published.
    pub author: String,
    /// Cover image of the variant backed by the most ratings.
    pub cover_image_url: String,
    /// Mean of the explicit ratings.
    pub avg_rating: f64,
    /// Number of explicit ratings.
    pub ratings_count: u64,
}

/// An [`AggregatedBook`] together with its weighted score.
///
/// The score is kept at full precision; use [`ScoredBook::display_score`] for
/// the externally reported value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ScoredBook {
    /// Rating statistics for the book.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub book: AggregatedBook,
    /// Bayesian average of the book's ratings.
    pub weighted_score: f64,
}

impl ScoredBook {
    /// Return the weighted score rounded to `precision` decimal places.
    ///
    /// Halfway values round to the nearest even digit.
    ///
    /// # Examples
    /// ```
    /// use folio_core::{AggregatedBook, ScoredBook};
    ///
    /// let scored = ScoredBook {
    ///     book: AggregatedBook {
    ///         title: "Emma".into(),
    ///         author: "Jane Austen".into(),
    ///         cover_image_url: String::new(),
    ///         avg_rating: 8.0,
    ///         ratings_count: 3,
    ///     },
    ///     weighted_score: 7.456,
    /// };
    /// assert_eq!(scored.display_score(2), 7.46);
    /// ```
    #[must_use]
    pub fn display_score(&self, precision: u8) -> f64 {
        round_to(self.weighted_score, precision)
    }
}

/// A single recommended book as reported to callers.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct BookResult {
    /// Book title as published.
    pub title: String,
    /// Author name as published.
    pub author: String,
    /// Rounded weighted score.
    pub weighted_score: f64,
    /// Cover image URL.
    pub cover_image_url: String,
}

impl BookResult {
    pub(crate) fn from_scored(scored: &ScoredBook, precision: u8) -> Self {
        Self {
            title: scored.book.title.clone(),
            author: scored.book.author.clone(),
            weighted_score: scored.display_score(precision),
            cover_image_url: scored.book.cover_image_url.clone(),
        }
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "decimal rounding scales by a power of ten"
)]
fn round_to(value: f64, precision: u8) -> f64 {
    let scale = 10.0_f64.powi(i32::from(precision));
    (value * scale).round_ties_even() / scale
}

//! Weighted scoring for the Folio catalogue.
//!
//! Books with few ratings are pulled towards the corpus-wide mean rating so a
//! handful of enthusiastic votes cannot outrank a well-established favourite.
//! For a book with `v` explicit ratings averaging `R`, the weighted score is
//!
//! ```text
//! (v * R + C * m) / (v + m)
//! ```
//!
//! where `C` is the mean of every book's average rating and `m` is the
//! minimum-votes threshold: the configured quantile (90th percentile by
//! default) of the ratings counts, truncated to an integer. Both constants are
//! computed once over the full corpus.
//!
//! Scores are stored at full precision; the configured display precision
//! applies only to reported values.
//!
//! # Examples
//!
//! ```
//! use folio_core::AggregatedBook;
//! use folio_scorer::{ScoreConfig, score_books};
//!
//! let books = vec![AggregatedBook {
//!     title: "Emma".into(),
//!     author: "Jane Austen".into(),
//!     cover_image_url: "http://img/emma.jpg".into(),
//!     avg_rating: 8.5,
//!     ratings_count: 12,
//! }];
//! let catalogue = score_books(books, ScoreConfig::default()).expect("non-empty corpus");
//! assert_eq!(catalogue.books()[0].weighted_score, 8.5);
//! ```

#![forbid(unsafe_code)]

use folio_core::{AggregatedBook, Catalogue, ScoreSummary, ScoredBook};
use log::info;

mod error;
mod types;

pub use error::ScoreError;
pub use types::{DEFAULT_MIN_VOTES_QUANTILE, MAX_DISPLAY_PRECISION, ScoreConfig};

/// Score every book and assemble the immutable [`Catalogue`].
///
/// Row order is preserved.
///
/// # Errors
/// Returns [`ScoreError::EmptyCorpus`] when `books` is empty, configuration
/// errors from [`ScoreConfig::validate`], [`ScoreError::UnratedBook`] when a
/// book without ratings meets a zero threshold, and
/// [`ScoreError::Catalogue`] when a `(title, author)` pair repeats.
#[doc(alias = "ScoreCalculator")]
pub fn score_books(
    books: Vec<AggregatedBook>,
    config: ScoreConfig,
) -> Result<Catalogue, ScoreError> {
    let checked = config.validate()?;
    let summary = summarise(&books, checked.min_votes_quantile)?;
    info!(
        "scoring {} books with global mean {:.4} and minimum votes {}",
        books.len(),
        summary.global_mean,
        summary.min_votes
    );

    let scored = books
        .into_iter()
        .map(|book| {
            let score = weighted_score(&book, summary)?;
            Ok(ScoredBook {
                book,
                weighted_score: score,
            })
        })
        .collect::<Result<Vec<_>, ScoreError>>()?;
    Ok(Catalogue::new(scored, summary, checked.display_precision)?)
}

/// Compute the corpus-wide constants `C` and `m`.
///
/// # Errors
/// Returns [`ScoreError::EmptyCorpus`] when `books` is empty.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "the global mean divides a float sum by the row count"
)]
pub fn summarise(books: &[AggregatedBook], quantile: f64) -> Result<ScoreSummary, ScoreError> {
    if books.is_empty() {
        return Err(ScoreError::EmptyCorpus);
    }
    let global_mean = books.iter().map(|book| book.avg_rating).sum::<f64>() / books.len() as f64;
    let counts: Vec<u64> = books.iter().map(|book| book.ratings_count).collect();
    let min_votes = min_votes_threshold(&counts, quantile).ok_or(ScoreError::EmptyCorpus)?;
    Ok(ScoreSummary {
        global_mean,
        min_votes,
    })
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "the Bayesian average mixes integer counts with float ratings"
)]
fn weighted_score(book: &AggregatedBook, summary: ScoreSummary) -> Result<f64, ScoreError> {
    let votes = book.ratings_count;
    let denominator = votes + summary.min_votes;
    if denominator == 0 {
        return Err(ScoreError::UnratedBook {
            title: book.title.clone(),
            author: book.author.clone(),
        });
    }
    let v = votes as f64;
    let m = summary.min_votes as f64;
    Ok((v * book.avg_rating + summary.global_mean * m) / denominator as f64)
}

/// Return the `quantile` of `counts` using linear interpolation between the
/// two nearest ranks, truncated towards zero.
///
/// Returns `None` for an empty slice.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "interpolating between ranks needs float positions; the result is truncated by contract"
)]
pub(crate) fn min_votes_threshold(counts: &[u64], quantile: f64) -> Option<u64> {
    let mut sorted = counts.to_vec();
    sorted.sort_unstable();
    let last = sorted.len().checked_sub(1)?;
    let position = quantile.clamp(0.0, 1.0) * last as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let low = *sorted.get(lower)? as f64;
    let high = *sorted.get(upper)? as f64;
    let value = low + (high - low) * (position - lower as f64);
    Some(value.trunc() as u64)
}

#[cfg(test)]
mod tests;

//! The immutable, scored book table served to recommenders.
//!
//! A [`Catalogue`] is built once per process and only ever read afterwards.
//! It holds no interior mutability, so a shared reference (or an `Arc`) can be
//! handed to any number of concurrent readers.

use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::Serialize;
use thiserror::Error;

use crate::ScoredBook;

/// Display precision used when none is configured.
pub const DEFAULT_DISPLAY_PRECISION: u8 = 2;

/// Corpus-wide constants of the weighted score.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ScoreSummary {
    /// Mean of the per-book average ratings (`C`).
    pub global_mean: f64,
    /// Minimum-votes threshold (`m`).
    pub min_votes: u64,
}

/// Errors returned by [`Catalogue::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogueError {
    /// No books were supplied.
    #[error("catalogue must contain at least one book")]
    Empty,
    /// The same `(title, author)` pair appeared twice.
    #[error("book {title:?} by {author:?} appears more than once")]
    DuplicateBook {
        /// Repeated title.
        title: String,
        /// Repeated author.
        author: String,
    },
}

/// Normalise a title for comparison: trim surrounding whitespace and
/// lower-case.
///
/// # Examples
/// ```
/// use folio_core::normalise_title;
///
/// assert_eq!(normalise_title("  The Hobbit "), "the hobbit");
/// ```
#[must_use]
pub fn normalise_title(title: &str) -> String {
    title.trim().to_lowercase()
}

/// Scored books in table order plus the constants used to score them.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalogue {
    books: Vec<ScoredBook>,
    normalised_titles: Vec<String>,
    summary: ScoreSummary,
    display_precision: u8,
}

impl Catalogue {
    /// Validate and construct a [`Catalogue`].
    ///
    /// Table order is preserved; lookups pick the first matching row.
    ///
    /// # Errors
    /// Returns [`CatalogueError::Empty`] when `books` is empty and
    /// [`CatalogueError::DuplicateBook`] when a `(title, author)` pair repeats.
    pub fn new(
        books: Vec<ScoredBook>,
        summary: ScoreSummary,
        display_precision: u8,
    ) -> Result<Self, CatalogueError> {
        if books.is_empty() {
            return Err(CatalogueError::Empty);
        }
        let mut seen = HashSet::with_capacity(books.len());
        for scored in &books {
            if !seen.insert((scored.book.title.as_str(), scored.book.author.as_str())) {
                return Err(CatalogueError::DuplicateBook {
                    title: scored.book.title.clone(),
                    author: scored.book.author.clone(),
                });
            }
        }
        let normalised_titles = books
            .iter()
            .map(|scored| normalise_title(&scored.book.title))
            .collect();
        Ok(Self {
            books,
            normalised_titles,
            summary,
            display_precision,
        })
    }

    /// Return the scored books in table order.
    #[must_use]
    pub fn books(&self) -> &[ScoredBook] {
        &self.books
    }

    /// Return the number of books.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.books.len()
    }

    /// Always `false`; an empty catalogue cannot be constructed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Return the corpus-wide score constants.
    #[must_use]
    pub const fn summary(&self) -> ScoreSummary {
        self.summary
    }

    /// Return the number of decimal places used for reported scores.
    #[must_use]
    pub const fn display_precision(&self) -> u8 {
        self.display_precision
    }

    /// Iterate over books paired with their normalised titles.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &ScoredBook)> {
        self.normalised_titles
            .iter()
            .map(String::as_str)
            .zip(self.books.iter())
    }

    /// Return the author of the first book whose normalised title equals
    /// `normalised_title`.
    #[must_use]
    pub fn author_of(&self, normalised_title: &str) -> Option<&str> {
        self.entries()
            .find(|(title, _)| *title == normalised_title)
            .map(|(_, scored)| scored.book.author.as_str())
    }
}

//! Ratings as read from the ratings table.

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;
use thiserror::Error;

/// Largest rating value accepted by the catalogue.
pub const MAX_RATING: u8 = 10;

/// A rating on the `0..=10` scale.
///
/// Zero means the user interacted with the book without rating it; only
/// [explicit](Rating::is_explicit) ratings contribute to aggregation.
///
/// # Examples
/// ```
/// use folio_core::Rating;
///
/// let rating = Rating::new(7).expect("in range");
/// assert!(rating.is_explicit());
/// assert!(Rating::new(11).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Rating(u8);

/// Errors returned by [`Rating::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RatingError {
    /// The value lies outside `0..=10`.
    #[error("rating {value} is outside 0..={MAX_RATING}")]
    OutOfRange {
        /// Raw value supplied.
        value: i64,
    },
}

impl Rating {
    /// Validate and construct a [`Rating`].
    ///
    /// # Errors
    /// Returns [`RatingError::OutOfRange`] for values outside `0..=10`.
    pub fn new(value: impl Into<i64>) -> Result<Self, RatingError> {
        let raw = value.into();
        u8::try_from(raw)
            .ok()
            .filter(|v| *v <= MAX_RATING)
            .map(Self)
            .ok_or(RatingError::OutOfRange { value: raw })
    }

    /// Return the rating value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Report whether this is an explicit rating (non-zero).
    #[must_use]
    pub const fn is_explicit(self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A single row of the ratings table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RatingRecord {
    /// Rating user.
    pub user_id: u32,
    /// Rated book.
    pub isbn: String,
    /// Rating value.
    pub rating: Rating,
}

impl RatingRecord {
    /// Construct a [`RatingRecord`].
    pub fn new(user_id: u32, isbn: impl Into<String>, rating: Rating) -> Self {
        Self {
            user_id,
            isbn: isbn.into(),
            rating,
        }
    }
}

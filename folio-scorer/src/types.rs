//! Public configuration for weighted scoring.
#![forbid(unsafe_code)]

use folio_core::DEFAULT_DISPLAY_PRECISION;

use crate::ScoreError;

/// Largest number of decimal places reported for scores.
pub const MAX_DISPLAY_PRECISION: u8 = 6;

/// Quantile of the ratings-count distribution used as the minimum-votes
/// threshold when none is configured.
pub const DEFAULT_MIN_VOTES_QUANTILE: f64 = 0.90;

/// Tunable parameters of the weighted score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreConfig {
    /// Quantile of `ratings_count` taken as the minimum-votes threshold.
    pub min_votes_quantile: f64,
    /// Decimal places of the externally reported score.
    pub display_precision: u8,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            min_votes_quantile: DEFAULT_MIN_VOTES_QUANTILE,
            display_precision: DEFAULT_DISPLAY_PRECISION,
        }
    }
}

impl ScoreConfig {
    /// Validate the configuration and return a copy.
    ///
    /// # Errors
    /// Returns [`ScoreError::InvalidQuantile`] when the quantile is not a
    /// finite value in `0.0..=1.0`, and [`ScoreError::InvalidPrecision`] when
    /// the precision exceeds [`MAX_DISPLAY_PRECISION`].
    pub fn validate(self) -> Result<Self, ScoreError> {
        if !(0.0..=1.0).contains(&self.min_votes_quantile) {
            return Err(ScoreError::InvalidQuantile {
                value: self.min_votes_quantile,
            });
        }
        if self.display_precision > MAX_DISPLAY_PRECISION {
            return Err(ScoreError::InvalidPrecision {
                value: self.display_precision,
                max: MAX_DISPLAY_PRECISION,
            });
        }
        Ok(self)
    }

    /// Replace the minimum-votes quantile.
    #[must_use]
    pub const fn with_min_votes_quantile(mut self, quantile: f64) -> Self {
        self.min_votes_quantile = quantile;
        self
    }

    /// Replace the display precision.
    #[must_use]
    pub const fn with_display_precision(mut self, precision: u8) -> Self {
        self.display_precision = precision;
        self
    }
}

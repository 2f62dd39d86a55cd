//! Users and their normalised locations.

#[cfg(feature = "serde")]
use serde::Serialize;

/// Fallback value for any missing or invalid location field.
pub const OTHER: &str = "other";

/// A normalised `city, state, country` triple.
///
/// Every field is a non-empty lower-case token or [`OTHER`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Location {
    /// City name.
    pub city: String,
    /// State, province or region.
    pub state: String,
    /// Country name.
    pub country: String,
}

impl Location {
    /// Construct a location from already-normalised fields.
    pub fn new(
        city: impl Into<String>,
        state: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            city: city.into(),
            state: state.into(),
            country: country.into(),
        }
    }

    /// A location with every field set to [`OTHER`].
    #[must_use]
    pub fn unknown() -> Self {
        Self::new(OTHER, OTHER, OTHER)
    }
}

/// A user after location expansion.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct UserRecord {
    /// Identifier shared with the ratings table.
    pub user_id: u32,
    /// Age in years, when known.
    pub age: Option<f64>,
    /// Normalised location.
    pub location: Location,
}

impl UserRecord {
    /// Construct a [`UserRecord`].
    #[must_use]
    pub const fn new(user_id: u32, age: Option<f64>, location: Location) -> Self {
        Self {
            user_id,
            age,
            location,
        }
    }
}

//! Split free-text `city, state, country` strings into normalised fields.
//!
//! Parsing never fails. Absent or unusable segments fall back to
//! [`OTHER`](folio_core::OTHER), every kept segment is lower-cased, and the
//! city keeps only the text before its first `/` (some exports squeeze
//! `city/state` into the city column).
//!
//! One rule is kept from the source data's established cleaning: a state
//! segment consisting of a bare comma also discards the country segment, even
//! when the country itself is well formed.

use folio_core::{Location, OTHER};
use serde::Serialize;

const SEGMENT_SEPARATOR: &str = ", ";
const CITY_STATE_SEPARATOR: char = '/';
const BARE_COMMA: &str = ",";
const NOT_AVAILABLE: &str = "n/a";

/// Parse a raw location string.
///
/// # Examples
/// ```
/// use folio_data::parse_location;
///
/// let location = parse_location("Stockton, California, USA");
/// assert_eq!(location.city, "stockton");
/// assert_eq!(location.state, "california");
/// assert_eq!(location.country, "usa");
///
/// let partial = parse_location("n/a, , spain");
/// assert_eq!(partial.city, "other");
/// ```
#[doc(alias = "LocationParser")]
#[must_use]
pub fn parse_location(raw: &str) -> Location {
    parse_location_tracked(raw).location
}

/// A parsed location together with the fields that fell back to
/// [`OTHER`](folio_core::OTHER).
///
/// A segment that literally reads `other` is kept as written and is not a
/// fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLocation {
    /// The normalised location.
    pub location: Location,
    /// The state segment was absent or unusable.
    pub state_fallback: bool,
    /// The country segment was absent or unusable.
    pub country_fallback: bool,
}

/// Parse a raw location string and record which fields fell back.
///
/// # Examples
/// ```
/// use folio_data::parse_location_tracked;
///
/// let parsed = parse_location_tracked("york, other, uk");
/// assert!(!parsed.state_fallback);
///
/// let parsed = parse_location_tracked("york");
/// assert!(parsed.state_fallback && parsed.country_fallback);
/// ```
#[must_use]
pub fn parse_location_tracked(raw: &str) -> ParsedLocation {
    let mut segments = raw.split(SEGMENT_SEPARATOR);
    let city_segment = segments.next();
    let state_segment = segments.next();
    let country_segment = segments.next();

    let city = city_segment
        .and_then(normalise_segment)
        .and_then(|city| city_before_slash(&city));
    let state = state_segment.and_then(normalise_segment);
    let country = if state_segment == Some(BARE_COMMA) {
        None
    } else {
        country_segment.and_then(normalise_segment)
    };

    ParsedLocation {
        state_fallback: state.is_none(),
        country_fallback: country.is_none(),
        location: Location {
            city: city.unwrap_or_else(other),
            state: state.unwrap_or_else(other),
            country: country.unwrap_or_else(other),
        },
    }
}

fn other() -> String {
    OTHER.to_owned()
}

fn normalise_segment(segment: &str) -> Option<String> {
    let lowered = segment.to_lowercase();
    (!is_invalid(&lowered)).then_some(lowered)
}

fn city_before_slash(city: &str) -> Option<String> {
    let head = city
        .split(CITY_STATE_SEPARATOR)
        .next()
        .unwrap_or_default();
    (!is_invalid(head)).then(|| head.to_owned())
}

fn is_invalid(segment: &str) -> bool {
    segment.trim().is_empty() || segment == NOT_AVAILABLE || segment == BARE_COMMA
}

/// Counts of users whose state or country fell back to
/// [`OTHER`](folio_core::OTHER).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LocationStats {
    /// Users inspected.
    pub users: usize,
    /// Users without a usable state.
    pub missing_state: usize,
    /// Users without a usable country.
    pub missing_country: usize,
}

impl LocationStats {
    /// Count one parsed user.
    pub const fn record(&mut self, parsed: &ParsedLocation) {
        self.users += 1;
        if parsed.state_fallback {
            self.missing_state += 1;
        }
        if parsed.country_fallback {
            self.missing_country += 1;
        }
    }
}

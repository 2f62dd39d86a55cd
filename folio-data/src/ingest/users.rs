use std::io::Read;

use camino::Utf8Path;
use folio_core::UserRecord;
use log::info;
use serde::Deserialize;

use super::{open, read_rows};
use crate::{IngestError, LocationStats, parse_location_tracked};

#[derive(Debug, Deserialize)]
struct UserRow {
    #[serde(rename = "User-ID")]
    user_id: u32,
    #[serde(rename = "Location", default)]
    location: String,
    #[serde(rename = "Age", default)]
    age: Option<String>,
}

/// Users read from the source table with their location fallback counts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserTable {
    /// Users in source order.
    pub users: Vec<UserRecord>,
    /// Fields that fell back to `other` while parsing locations.
    pub locations: LocationStats,
}

impl UserTable {
    fn push(&mut self, row: UserRow) {
        let age = row
            .age
            .as_deref()
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|age| age.is_finite());
        let parsed = parse_location_tracked(&row.location);
        self.locations.record(&parsed);
        self.users
            .push(UserRecord::new(row.user_id, age, parsed.location));
    }
}

/// Read the users table from `reader`, expanding each location.
///
/// Ages that are empty, `NaN` or not numeric become `None`.
///
/// # Errors
/// Returns [`IngestError`] when the header or a record cannot be parsed.
pub fn read_users(reader: impl Read, path: &Utf8Path) -> Result<UserTable, IngestError> {
    let mut table = UserTable::default();
    read_rows(reader, path, |_, row: UserRow| {
        table.push(row);
        Ok(())
    })?;
    info!(
        "read {} users from {path}: {} without a state, {} without a country",
        table.users.len(),
        table.locations.missing_state,
        table.locations.missing_country
    );
    Ok(table)
}

/// Open and read the users table at `path`.
///
/// # Errors
/// Returns [`IngestError::Open`] when the file cannot be opened, and
/// propagates errors from [`read_users`].
pub fn load_users(path: &Utf8Path) -> Result<UserTable, IngestError> {
    read_users(open(path)?, path)
}

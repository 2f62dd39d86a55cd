use std::io::Read;

use camino::Utf8Path;
use folio_core::{Rating, RatingRecord};
use log::info;
use serde::Deserialize;

use super::{open, read_rows};
use crate::IngestError;

#[derive(Debug, Deserialize)]
struct RatingRow {
    #[serde(rename = "User-ID")]
    user_id: u32,
    #[serde(rename = "ISBN")]
    isbn: String,
    #[serde(rename = "Book-Rating")]
    rating: i64,
}

/// Read the ratings table from `reader`.
///
/// # Errors
/// Returns [`IngestError::Rating`] for values outside `0..=10` and other
/// [`IngestError`] variants when the CSV cannot be parsed.
pub fn read_ratings(
    reader: impl Read,
    path: &Utf8Path,
) -> Result<Vec<RatingRecord>, IngestError> {
    let mut ratings = Vec::new();
    read_rows(reader, path, |line, row: RatingRow| {
        let rating = Rating::new(row.rating).map_err(|source| IngestError::Rating {
            path: path.to_path_buf(),
            line,
            source,
        })?;
        ratings.push(RatingRecord::new(row.user_id, row.isbn, rating));
        Ok(())
    })?;
    info!("read {} ratings from {path}", ratings.len());
    Ok(ratings)
}

/// Open and read the ratings table at `path`.
///
/// # Errors
/// Returns [`IngestError::Open`] when the file cannot be opened, and
/// propagates errors from [`read_ratings`].
pub fn load_ratings(path: &Utf8Path) -> Result<Vec<RatingRecord>, IngestError> {
    read_ratings(open(path)?, path)
}

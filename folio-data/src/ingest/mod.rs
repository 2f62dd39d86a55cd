//! CSV readers for the Book-Crossing tables.
//!
//! Each table has a `read_*` function over any [`Read`] source and a `load_*`
//! wrapper that opens a file path. Column names follow the public
//! Book-Crossing exports; columns not listed here are ignored.

use std::io::Read;

use camino::Utf8Path;
use csv::{Position, ReaderBuilder, StringRecord};
use folio_fs::open_utf8_file;
use serde::de::DeserializeOwned;

use crate::IngestError;

mod books;
mod ratings;
mod users;

pub use books::{load_books, read_books};
pub use ratings::{load_ratings, read_ratings};
pub use users::{UserTable, load_users, read_users};

/// Read every record of a headed CSV source, handing each deserialised row
/// and its line number to `visit`.
fn read_rows<R, T, F>(reader: R, path: &Utf8Path, mut visit: F) -> Result<(), IngestError>
where
    R: Read,
    T: DeserializeOwned,
    F: FnMut(u64, T) -> Result<(), IngestError>,
{
    let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(reader);
    let headers = csv_reader
        .headers()
        .map_err(|source| IngestError::Header {
            path: path.to_path_buf(),
            source,
        })?
        .clone();

    let mut record = StringRecord::new();
    while csv_reader
        .read_record(&mut record)
        .map_err(|source| record_error(path, source))?
    {
        let line = record.position().map_or(0, Position::line);
        let row: T = record
            .deserialize(Some(&headers))
            .map_err(|source| IngestError::Record {
                path: path.to_path_buf(),
                line,
                source,
            })?;
        visit(line, row)?;
    }
    Ok(())
}

fn record_error(path: &Utf8Path, source: csv::Error) -> IngestError {
    let line = source.position().map_or(0, Position::line);
    IngestError::Record {
        path: path.to_path_buf(),
        line,
        source,
    }
}

fn open(path: &Utf8Path) -> Result<impl Read, IngestError> {
    open_utf8_file(path).map_err(|source| IngestError::Open {
        path: path.to_path_buf(),
        source,
    })
}

use std::io::Read;

use camino::Utf8Path;
use folio_core::BookRecord;
use log::{info, warn};
use serde::Deserialize;

use super::{open, read_rows};
use crate::IngestError;

#[derive(Debug, Deserialize)]
struct BookRow {
    #[serde(rename = "ISBN")]
    isbn: String,
    #[serde(rename = "Book-Title", default)]
    title: String,
    #[serde(rename = "Book-Author", default)]
    author: String,
    #[serde(rename = "Image-URL-M", default)]
    cover_image_url: String,
}

impl BookRow {
    fn into_record(self) -> Option<BookRecord> {
        let complete = !self.title.is_empty()
            && !self.author.is_empty()
            && !self.cover_image_url.is_empty();
        complete.then(|| BookRecord::new(self.isbn, self.title, self.author, self.cover_image_url))
    }
}

/// Read the books table from `reader`.
///
/// Rows missing a title, author or cover image cannot be grouped and are
/// skipped with a warning.
///
/// # Errors
/// Returns [`IngestError`] when the header or a record cannot be parsed.
pub fn read_books(reader: impl Read, path: &Utf8Path) -> Result<Vec<BookRecord>, IngestError> {
    let mut books = Vec::new();
    let mut incomplete = 0_usize;
    read_rows(reader, path, |_, row: BookRow| {
        match row.into_record() {
            Some(book) => books.push(book),
            None => incomplete += 1,
        }
        Ok(())
    })?;
    if incomplete > 0 {
        warn!("skipped {incomplete} books without title, author or cover image in {path}");
    }
    info!("read {} books from {path}", books.len());
    Ok(books)
}

/// Open and read the books table at `path`.
///
/// # Errors
/// Returns [`IngestError::Open`] when the file cannot be opened, and
/// propagates errors from [`read_books`].
pub fn load_books(path: &Utf8Path) -> Result<Vec<BookRecord>, IngestError> {
    read_books(open(path)?, path)
}

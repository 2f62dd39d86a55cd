//! Test helpers for writing Book-Crossing exports to a temporary directory.

use std::fmt::Write as _;
use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Exports for three Tolkien books, one Austen book and a rating for a book
/// missing from the books table.
pub(super) struct Exports {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Exports {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir");
        write_utf8(
            &root.join("books.csv"),
            "ISBN,Book-Title,Book-Author,Image-URL-M\n\
             H,The Hobbit,J. R. R. Tolkien,http://img/h.jpg\n\
             S,The Silmarillion,J. R. R. Tolkien,http://img/s.jpg\n\
             T,The Two Towers,J. R. R. Tolkien,http://img/t.jpg\n\
             E,Emma,Jane Austen,http://img/e.jpg\n",
        );

        let mut users = String::from("User-ID,Location,Age\n");
        for id in 1..=6 {
            writeln!(users, "{id},\"oxford, oxfordshire, united kingdom\",40").expect("format");
        }
        write_utf8(&root.join("users.csv"), &users);

        let mut ratings = String::from("User-ID,ISBN,Book-Rating\n");
        for id in 1..=6 {
            writeln!(ratings, "{id},H,9").expect("format");
        }
        for id in 1..=4 {
            writeln!(ratings, "{id},T,8").expect("format");
        }
        ratings.push_str("1,S,6\n2,S,0\n3,E,7\n4,X,10\n");
        write_utf8(&root.join("ratings.csv"), &ratings);

        Self { _dir: dir, root }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &str) {
    fs::write(path.as_std_path(), contents).expect("write export");
}

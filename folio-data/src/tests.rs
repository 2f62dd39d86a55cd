//! Unit coverage for the CSV readers.
#![forbid(unsafe_code)]
#![expect(
    clippy::expect_used,
    reason = "tests fail fast on unexpected errors"
)]

use std::io::Cursor;

use camino::Utf8Path;
use folio_core::{Location, OTHER};
use rstest::rstest;

use crate::{IngestError, LocationStats, read_books, read_ratings, read_users};

fn origin() -> &'static Utf8Path {
    Utf8Path::new("fixture.csv")
}

#[rstest]
fn reads_book_columns_and_ignores_the_rest() {
    let csv = "\
ISBN,Book-Title,Book-Author,Year-Of-Publication,Publisher,Image-URL-S,Image-URL-M,Image-URL-L
0195153448,Classical Mythology,Mark P. O. Morford,2002,Oxford University Press,s.jpg,m.jpg,l.jpg
";
    let books = read_books(Cursor::new(csv), origin()).expect("books parse");
    assert_eq!(books.len(), 1);
    let book = books.first().expect("one book");
    assert_eq!(book.isbn, "0195153448");
    assert_eq!(book.title, "Classical Mythology");
    assert_eq!(book.author, "Mark P. O. Morford");
    assert_eq!(book.cover_image_url, "m.jpg");
}

#[rstest]
fn skips_books_missing_grouping_columns() {
    let csv = "\
ISBN,Book-Title,Book-Author,Image-URL-M
1,Kept,Someone,m.jpg
2,No Author,,m.jpg
3,No Cover,Someone,
";
    let books = read_books(Cursor::new(csv), origin()).expect("books parse");
    let titles: Vec<&str> = books.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["Kept"]);
}

#[rstest]
fn expands_user_locations_and_ages() {
    let csv = "\
User-ID,Location,Age
1,\"nyc, new york, usa\",
2,\"stockton, california, usa\",18.0
3,\"moscow, yukon territory, russia\",NaN
4,,abc
";
    let table = read_users(Cursor::new(csv), origin()).expect("users parse");
    let users = &table.users;
    let ages: Vec<Option<f64>> = users.iter().map(|u| u.age).collect();
    assert_eq!(ages, vec![None, Some(18.0), None, None]);
    assert_eq!(
        users.first().map(|u| u.location.clone()),
        Some(Location::new("nyc", "new york", "usa"))
    );
    assert_eq!(
        users.last().map(|u| u.location.clone()),
        Some(Location::new(OTHER, OTHER, OTHER))
    );
}

#[rstest]
fn counts_only_locations_that_fell_back() {
    let csv = "\
User-ID,Location,Age
1,\"york, other, other\",40
2,york,
3,\"leeds, , uk\",
";
    let table = read_users(Cursor::new(csv), origin()).expect("users parse");

    assert_eq!(
        table.locations,
        LocationStats {
            users: 3,
            missing_state: 2,
            missing_country: 1,
        }
    );
}

#[rstest]
fn reads_ratings_on_the_scale() {
    let csv = "\
User-ID,ISBN,Book-Rating
276725,034545104X,0
276726,0155061224,5
";
    let ratings = read_ratings(Cursor::new(csv), origin()).expect("ratings parse");
    let values: Vec<u8> = ratings.iter().map(|r| r.rating.value()).collect();
    assert_eq!(values, vec![0, 5]);
}

#[rstest]
fn reports_line_of_out_of_range_rating() {
    let csv = "\
User-ID,ISBN,Book-Rating
1,A,3
2,B,11
";
    let err = read_ratings(Cursor::new(csv), origin()).expect_err("rating 11 is invalid");
    match err {
        IngestError::Rating { line, .. } => assert_eq!(line, 3),
        other => panic!("expected rating error, got {other:?}"),
    }
}

#[rstest]
fn reports_malformed_records() {
    let csv = "\
User-ID,ISBN,Book-Rating
not-a-number,A,3
";
    let err = read_ratings(Cursor::new(csv), origin()).expect_err("user id must be numeric");
    assert!(
        matches!(err, IngestError::Record { line: 2, .. }),
        "unexpected error {err:?}"
    );
}

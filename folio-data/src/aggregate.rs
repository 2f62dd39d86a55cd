//! Join books, users and ratings into per-book rating statistics.
//!
//! Only explicit ratings take part. Ratings whose ISBN or user id has no
//! match are dropped, as in a relational inner join, and a rating matching
//! several book rows or several user rows contributes once per combination.
//! Groups are keyed by `(title, author, cover image)`; when one
//! `(title, author)` pair has several cover images, the group backed by the
//! most ratings wins. Equal counts fall back to cover image order so the
//! result is reproducible.

use std::collections::{BTreeMap, HashMap, HashSet};

use folio_core::{AggregatedBook, BookRecord, RatingRecord, UserRecord};
use log::info;
use serde::Serialize;

/// Stage counts recorded while aggregating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AggregationReport {
    /// Ratings with a non-zero value.
    pub explicit_ratings: usize,
    /// Rows produced by joining explicit ratings with books and users.
    pub joined_rows: u64,
    /// Distinct `(title, author, cover image)` groups.
    pub groups: usize,
    /// Books left after keeping one group per `(title, author)`.
    pub books: usize,
}

/// Aggregated books together with the stage counts.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    /// One row per `(title, author)`, most-rated first.
    pub books: Vec<AggregatedBook>,
    /// Stage counts.
    pub report: AggregationReport,
}

#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    sum: u64,
    count: u64,
}

impl Tally {
    fn add(&mut self, rating: u8, multiplicity: u64) {
        self.sum += u64::from(rating) * multiplicity;
        self.count += multiplicity;
    }

    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "the mean of integer ratings is a float; counts stay far below 2^52"
    )]
    fn mean(self) -> f64 {
        self.sum as f64 / self.count as f64
    }
}

type GroupKey<'a> = (&'a str, &'a str, &'a str);

/// Aggregate explicit ratings per book.
///
/// # Examples
/// ```
/// use folio_core::{BookRecord, Location, Rating, RatingRecord, UserRecord};
/// use folio_data::aggregate_ratings;
///
/// # fn main() -> Result<(), folio_core::RatingError> {
/// let books = vec![BookRecord::new("1", "Emma", "Jane Austen", "http://img/emma.jpg")];
/// let users = vec![UserRecord::new(7, None, Location::unknown())];
/// let ratings = vec![
///     RatingRecord::new(7, "1", Rating::new(8)?),
///     RatingRecord::new(7, "1", Rating::new(0)?),
/// ];
/// let aggregation = aggregate_ratings(&books, &users, &ratings);
/// let emma = &aggregation.books[0];
/// assert_eq!(emma.ratings_count, 1);
/// assert_eq!(emma.avg_rating, 8.0);
/// # Ok(())
/// # }
/// ```
#[doc(alias = "RatingAggregator")]
#[must_use]
pub fn aggregate_ratings(
    books: &[BookRecord],
    users: &[UserRecord],
    ratings: &[RatingRecord],
) -> Aggregation {
    let mut books_by_isbn: HashMap<&str, Vec<&BookRecord>> = HashMap::new();
    for book in books {
        books_by_isbn.entry(book.isbn.as_str()).or_default().push(book);
    }
    let mut users_by_id: HashMap<u32, u64> = HashMap::new();
    for user in users {
        *users_by_id.entry(user.user_id).or_default() += 1;
    }

    let mut report = AggregationReport::default();
    let mut groups: BTreeMap<GroupKey<'_>, Tally> = BTreeMap::new();
    for rating in ratings.iter().filter(|r| r.rating.is_explicit()) {
        report.explicit_ratings += 1;
        let Some(matched_books) = books_by_isbn.get(rating.isbn.as_str()) else {
            continue;
        };
        let Some(&user_rows) = users_by_id.get(&rating.user_id) else {
            continue;
        };
        for book in matched_books {
            let key = (
                book.title.as_str(),
                book.author.as_str(),
                book.cover_image_url.as_str(),
            );
            groups
                .entry(key)
                .or_default()
                .add(rating.rating.value(), user_rows);
            report.joined_rows += user_rows;
        }
    }
    report.groups = groups.len();

    let mut grouped: Vec<AggregatedBook> = groups
        .into_iter()
        .map(|((title, author, cover), tally)| AggregatedBook {
            title: title.to_owned(),
            author: author.to_owned(),
            cover_image_url: cover.to_owned(),
            avg_rating: tally.mean(),
            ratings_count: tally.count,
        })
        .collect();
    grouped.sort_by(|a, b| b.ratings_count.cmp(&a.ratings_count));

    let mut seen = HashSet::with_capacity(grouped.len());
    let books: Vec<AggregatedBook> = grouped
        .into_iter()
        .filter(|book| seen.insert((book.title.clone(), book.author.clone())))
        .collect();
    report.books = books.len();

    info!(
        "aggregated {} explicit ratings into {} joined rows, {} groups and {} books",
        report.explicit_ratings, report.joined_rows, report.groups, report.books
    );
    Aggregation { books, report }
}

//! Unit coverage for weighted scoring helpers.
#![forbid(unsafe_code)]
#![expect(
    clippy::expect_used,
    clippy::indexing_slicing,
    reason = "tests fail fast on unexpected errors and index known rows"
)]

use folio_core::{AggregatedBook, CatalogueError};
use rstest::rstest;

use crate::{ScoreConfig, ScoreError, min_votes_threshold, score_books, summarise};

fn book(title: &str, avg_rating: f64, ratings_count: u64) -> AggregatedBook {
    AggregatedBook {
        title: title.to_owned(),
        author: "Ursula K. Le Guin".to_owned(),
        cover_image_url: format!("http://img/{ratings_count}.jpg"),
        avg_rating,
        ratings_count,
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "test compares floats within a tolerance"
)]
fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[rstest]
#[case(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10], 0.9, 9)]
#[case(&[2, 10], 0.9, 9)]
#[case(&[10, 2], 0.0, 2)]
#[case(&[10, 2], 1.0, 10)]
#[case(&[7], 0.9, 7)]
#[case(&[1, 1, 1, 50], 0.5, 1)]
#[case(&[3, 4], 0.5, 3)]
fn threshold_interpolates_between_ranks(
    #[case] counts: &[u64],
    #[case] quantile: f64,
    #[case] expected: u64,
) {
    assert_eq!(min_votes_threshold(counts, quantile), Some(expected));
}

#[rstest]
fn threshold_of_nothing_is_undefined() {
    assert_eq!(min_votes_threshold(&[], 0.9), None);
}

#[rstest]
fn summary_uses_mean_of_book_averages() {
    let books = vec![book("A", 8.0, 10), book("B", 6.0, 2)];

    let summary = summarise(&books, 0.9).expect("summary");

    assert_close(summary.global_mean, 7.0);
    assert_eq!(summary.min_votes, 9);
}

#[rstest]
#[expect(
    clippy::float_arithmetic,
    reason = "expected scores are written as the fractions they reduce to"
)]
fn scores_follow_the_bayesian_average() {
    let books = vec![book("A", 8.0, 10), book("B", 6.0, 2)];

    let catalogue = score_books(books, ScoreConfig::default()).expect("catalogue");

    let scores: Vec<f64> = catalogue
        .books()
        .iter()
        .map(|scored| scored.weighted_score)
        .collect();
    assert_eq!(scores.len(), 2);
    assert_close(scores[0], 143.0 / 19.0);
    assert_close(scores[1], 75.0 / 11.0);
}

#[rstest]
fn single_book_scores_to_its_own_average() {
    let catalogue =
        score_books(vec![book("Solo", 7.25, 4)], ScoreConfig::default()).expect("catalogue");

    assert_close(catalogue.books()[0].weighted_score, 7.25);
}

#[rstest]
fn row_order_is_preserved() {
    let books = vec![book("Low", 2.0, 3), book("High", 9.0, 3), book("Mid", 5.0, 3)];

    let catalogue = score_books(books, ScoreConfig::default()).expect("catalogue");

    let titles: Vec<&str> = catalogue
        .books()
        .iter()
        .map(|scored| scored.book.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Low", "High", "Mid"]);
}

#[rstest]
fn catalogue_records_summary_and_precision() {
    let config = ScoreConfig::default().with_display_precision(3);

    let catalogue = score_books(vec![book("A", 8.0, 10), book("B", 6.0, 2)], config)
        .expect("catalogue");

    assert_eq!(catalogue.display_precision(), 3);
    assert_eq!(catalogue.summary().min_votes, 9);
}

#[rstest]
fn empty_corpus_is_rejected() {
    assert_eq!(
        score_books(Vec::new(), ScoreConfig::default()),
        Err(ScoreError::EmptyCorpus)
    );
}

#[rstest]
#[case(1.5)]
#[case(-0.1)]
fn out_of_range_quantile_is_rejected(#[case] quantile: f64) {
    let config = ScoreConfig::default().with_min_votes_quantile(quantile);

    assert_eq!(
        score_books(vec![book("A", 8.0, 1)], config),
        Err(ScoreError::InvalidQuantile { value: quantile })
    );
}

#[rstest]
fn nan_quantile_is_rejected() {
    let config = ScoreConfig::default().with_min_votes_quantile(f64::NAN);

    let result = score_books(vec![book("A", 8.0, 1)], config);

    assert!(
        matches!(result, Err(ScoreError::InvalidQuantile { value }) if value.is_nan()),
        "expected an invalid quantile error, got {result:?}"
    );
}

#[rstest]
fn excessive_precision_is_rejected() {
    let config = ScoreConfig::default().with_display_precision(7);

    assert_eq!(
        score_books(vec![book("A", 8.0, 1)], config),
        Err(ScoreError::InvalidPrecision { value: 7, max: 6 })
    );
}

#[rstest]
fn unrated_book_with_zero_threshold_is_rejected() {
    let books = vec![book("Unread", 0.0, 0)];

    assert_eq!(
        score_books(books, ScoreConfig::default()),
        Err(ScoreError::UnratedBook {
            title: "Unread".to_owned(),
            author: "Ursula K. Le Guin".to_owned(),
        })
    );
}

#[rstest]
fn repeated_books_are_rejected() {
    let books = vec![book("Twice", 8.0, 3), book("Twice", 6.0, 5)];

    assert_eq!(
        score_books(books, ScoreConfig::default()),
        Err(ScoreError::Catalogue(CatalogueError::DuplicateBook {
            title: "Twice".to_owned(),
            author: "Ursula K. Le Guin".to_owned(),
        }))
    );
}

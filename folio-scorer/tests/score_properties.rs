//! Property-based tests for weighted scoring.
//!
//! # Invariants tested
//!
//! - **Shrinkage:** each weighted score lies between the global mean and the
//!   book's own average rating.
//! - **Threshold range:** the minimum-votes threshold never exceeds the
//!   largest ratings count nor falls below the smallest.
//! - **Row count:** scoring keeps one row per aggregated book.

use folio_core::AggregatedBook;
use folio_scorer::{ScoreConfig, score_books};
use proptest::prelude::*;

fn corpus_strategy() -> impl Strategy<Value = Vec<AggregatedBook>> {
    prop::collection::vec((1_u8..=10, 1_u64..500), 1..30).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(idx, (rating, count))| AggregatedBook {
                title: format!("Volume {idx}"),
                author: "Anonymous".to_owned(),
                cover_image_url: format!("http://img/{idx}.jpg"),
                avg_rating: f64::from(rating),
                ratings_count: count,
            })
            .collect()
    })
}

#[expect(
    clippy::float_arithmetic,
    reason = "bounds allow for rounding in the weighted mean"
)]
fn within(value: f64, a: f64, b: f64) -> bool {
    let tolerance = 1e-9;
    value >= a.min(b) - tolerance && value <= a.max(b) + tolerance
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn scores_shrink_towards_global_mean(books in corpus_strategy(), quantile in 0.0_f64..=1.0) {
        let expected_rows = books.len();
        let smallest = books.iter().map(|book| book.ratings_count).min();
        let largest = books.iter().map(|book| book.ratings_count).max();
        let config = ScoreConfig::default().with_min_votes_quantile(quantile);

        let catalogue = score_books(books, config).map_err(|err| TestCaseError::fail(err.to_string()))?;

        let summary = catalogue.summary();
        prop_assert_eq!(catalogue.len(), expected_rows);
        prop_assert!(smallest.is_some_and(|low| summary.min_votes >= low));
        prop_assert!(largest.is_some_and(|high| summary.min_votes <= high));
        for scored in catalogue.books() {
            prop_assert!(
                within(scored.weighted_score, summary.global_mean, scored.book.avg_rating),
                "{} scored {} with mean {} and average {}",
                scored.book.title,
                scored.weighted_score,
                summary.global_mean,
                scored.book.avg_rating
            );
        }
    }
}

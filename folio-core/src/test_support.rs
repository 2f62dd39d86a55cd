//! Test-only catalogue builders used by unit and behaviour tests.

use crate::{
    AggregatedBook, Catalogue, DEFAULT_DISPLAY_PRECISION, ScoreSummary, ScoredBook,
};

/// Build small catalogues from `(title, author, score)` triples.
///
/// Rows are kept in insertion order. Average ratings equal the supplied score
/// and every book carries a single rating.
#[derive(Debug, Default)]
pub struct CatalogueBuilder {
    books: Vec<ScoredBook>,
}

impl CatalogueBuilder {
    /// Start an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a book with the given weighted score.
    #[must_use]
    pub fn book(mut self, title: &str, author: &str, weighted_score: f64) -> Self {
        let slug = title.trim().to_lowercase().replace(' ', "-");
        self.books.push(ScoredBook {
            book: AggregatedBook {
                title: title.to_owned(),
                author: author.to_owned(),
                cover_image_url: format!("http://covers.example/{slug}.jpg"),
                avg_rating: weighted_score,
                ratings_count: 1,
            },
            weighted_score,
        });
        self
    }

    /// Finish the catalogue.
    ///
    /// # Panics
    /// Panics when no books were added or a `(title, author)` pair repeats.
    #[must_use]
    pub fn build(self) -> Catalogue {
        let summary = ScoreSummary {
            global_mean: 0.0,
            min_votes: 1,
        };
        match Catalogue::new(self.books, summary, DEFAULT_DISPLAY_PRECISION) {
            Ok(catalogue) => catalogue,
            Err(err) => panic!("test catalogue is invalid: {err}"),
        }
    }
}

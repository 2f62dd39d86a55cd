//! End-to-end coverage: CSV exports in, recommendations out.

use std::fmt::Write as _;
use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use folio::{
    BuildError, Recommendation, ScoreConfig, ScoreError, SourcePaths, SourceTables,
    build_catalogue, load_catalogue, recommend,
};
use rstest::{fixture, rstest};
use tempfile::TempDir;

#[fixture]
fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("create temporary directory: {err}"),
    }
}

fn utf8(dir: &TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(dir.path().to_path_buf())
        .unwrap_or_else(|path| panic!("temporary directory {path:?} is not UTF-8"))
}

fn write(dir: &Utf8Path, name: &str, contents: &str) {
    let path = dir.join(name);
    fs::write(path.as_std_path(), contents).unwrap_or_else(|err| panic!("write {path}: {err}"));
}

/// Book A: ten ratings of 8. Book B: ratings 5 and 7. User 1 appears twice.
/// User 12 names `other` as a real state.
fn write_exports(dir: &Utf8Path) {
    write(
        dir,
        "books.csv",
        "ISBN,Book-Title,Book-Author,Year-Of-Publication,Image-URL-M\n\
         A,Book A,Author X,1999,http://img/a.jpg\n\
         B,Book B,Author X,2001,http://img/b.jpg\n\
         C,Book C,Author Y,2003,http://img/c.jpg\n",
    );

    let mut users = String::from("User-ID,Location,Age\n");
    for id in 1..=11 {
        let _ = writeln!(users, "{id},\"york, n/a, united kingdom\",");
    }
    users.push_str("12,\"york, other, united kingdom\",\n");
    users.push_str("1,\"york, n/a, united kingdom\",\n");
    write(dir, "users.csv", &users);

    let mut ratings = String::from("User-ID,ISBN,Book-Rating\n");
    for id in 1..=10 {
        let _ = writeln!(ratings, "{id},A,8");
    }
    ratings.push_str("11,A,0\n11,B,5\n12,B,7\n99,C,9\n");
    write(dir, "ratings.csv", &ratings);
}

#[rstest]
fn recommends_from_csv_exports(temp_dir: TempDir) {
    let dir = utf8(&temp_dir);
    write_exports(&dir);

    let (catalogue, report) = load_catalogue(&SourcePaths::in_dir(&dir), ScoreConfig::default())
        .unwrap_or_else(|err| panic!("pipeline should succeed: {err}"));

    assert_eq!(report.users_loaded, 13);
    assert_eq!(report.users_kept, 12);
    assert_eq!(report.repeated_user_ids, 0);
    assert_eq!(report.locations.missing_state, 12);
    assert_eq!(report.locations.missing_country, 0);
    assert_eq!(report.aggregation.explicit_ratings, 13);
    assert_eq!(report.aggregation.joined_rows, 12);
    assert_eq!(report.aggregation.books, 2);
    assert_eq!(report.summary.min_votes, 9);

    match recommend("Book A", 1, &catalogue) {
        Ok(Recommendation::Found { author, books, .. }) => {
            assert_eq!(author, "Author X");
            let titles: Vec<&str> = books.iter().map(|book| book.title.as_str()).collect();
            assert_eq!(titles, vec!["Book B"]);
            assert_eq!(books.first().map(|book| book.weighted_score), Some(6.82));
        }
        other => panic!("expected a recommendation, got {other:?}"),
    }
}

#[rstest]
fn books_without_matching_users_are_unknown(temp_dir: TempDir) {
    let dir = utf8(&temp_dir);
    write_exports(&dir);

    let (catalogue, _) = load_catalogue(&SourcePaths::in_dir(&dir), ScoreConfig::default())
        .unwrap_or_else(|err| panic!("pipeline should succeed: {err}"));

    let outcome = recommend("Book C", 3, &catalogue)
        .unwrap_or_else(|err| panic!("query should succeed: {err}"));
    assert!(outcome.is_not_found());
}

#[rstest]
fn missing_exports_fail_to_load(temp_dir: TempDir) {
    let dir = utf8(&temp_dir);

    let result = load_catalogue(&SourcePaths::in_dir(&dir), ScoreConfig::default());

    assert!(matches!(result, Err(BuildError::Ingest(_))), "got {result:?}");
}

#[rstest]
fn empty_tables_cannot_be_scored() {
    let result = build_catalogue(SourceTables::default(), ScoreConfig::default());

    assert!(
        matches!(result, Err(BuildError::Score(ScoreError::EmptyCorpus))),
        "got {result:?}"
    );
}

//! Text and JSON rendering of command output.

use std::io::Write;

use clap::ValueEnum;
use folio::{PipelineReport, Recommendation};
use serde::{Deserialize, Serialize};

use crate::CliError;

/// Reply printed when the queried title is unknown.
pub(crate) const NOT_FOUND_MESSAGE: &str = "Book not found. Try checking the title spelling.";
/// Reply printed when the author wrote nothing else.
pub(crate) const EMPTY_MESSAGE: &str = "No recommendations found for the given book.";

/// Output encoding shared by every subcommand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    /// Human-readable Markdown-flavoured text.
    #[default]
    Text,
    /// One JSON document per outcome.
    Json,
}

/// Write a recommendation outcome.
///
/// `count` is the number of books that was asked for, which the text heading
/// repeats even when fewer are available. Text ratings always show
/// `precision` decimal places.
pub(crate) fn write_recommendation(
    writer: &mut dyn Write,
    outcome: &Recommendation,
    count: usize,
    precision: u8,
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => write_json(writer, outcome),
        OutputFormat::Text => write_recommendation_text(writer, outcome, count, precision)
            .map_err(CliError::WriteOutput),
    }
}

fn write_recommendation_text(
    writer: &mut dyn Write,
    outcome: &Recommendation,
    count: usize,
    precision: u8,
) -> std::io::Result<()> {
    let decimals = usize::from(precision);
    match outcome {
        Recommendation::NotFound { .. } => writeln!(writer, "{NOT_FOUND_MESSAGE}"),
        Recommendation::Found {
            title,
            author,
            books,
        } => {
            writeln!(writer, "The author of the book **{title}** is **{author}**")?;
            writeln!(writer, "Here are the top {count} books from the same author:")?;
            writeln!(writer)?;
            if books.is_empty() {
                return writeln!(writer, "{EMPTY_MESSAGE}");
            }
            for book in books {
                writeln!(writer, "### {}", book.title)?;
                writeln!(writer, "**Rating:** {:.decimals$}", book.weighted_score)?;
                writeln!(writer, "{}", book.cover_image_url)?;
                writeln!(writer, "---")?;
            }
            Ok(())
        }
    }
}

/// Write the pipeline report.
pub(crate) fn write_report(
    writer: &mut dyn Write,
    report: &PipelineReport,
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => write_json(writer, report),
        OutputFormat::Text => write_report_text(writer, report).map_err(CliError::WriteOutput),
    }
}

fn write_report_text(writer: &mut dyn Write, report: &PipelineReport) -> std::io::Result<()> {
    let rows: [(&str, String); 11] = [
        ("users loaded", report.users_loaded.to_string()),
        ("users kept", report.users_kept.to_string()),
        ("users sharing an id", report.repeated_user_ids.to_string()),
        ("users without a state", report.locations.missing_state.to_string()),
        (
            "users without a country",
            report.locations.missing_country.to_string(),
        ),
        (
            "explicit ratings",
            report.aggregation.explicit_ratings.to_string(),
        ),
        ("joined rows", report.aggregation.joined_rows.to_string()),
        ("rating groups", report.aggregation.groups.to_string()),
        ("books", report.aggregation.books.to_string()),
        (
            "global mean rating (C)",
            format!("{:.4}", report.summary.global_mean),
        ),
        ("minimum votes (m)", report.summary.min_votes.to_string()),
    ];
    for (label, value) in rows {
        writeln!(writer, "{label}: {value}")?;
    }
    Ok(())
}

fn write_json<T: Serialize + ?Sized>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

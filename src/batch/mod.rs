//! CSV batch scoring.
//!
//! Reads a CSV with a header row containing `text1` and `text2`, scores
//! every row with [`SimilarityScorer::compute_similarity`], and writes the
//! input back out with a `similarity_score` column appended. The header and
//! every row are checked before anything is written; a row wider than the
//! header is rejected, a shorter one is padded.

mod error;

#[cfg(test)]
mod tests;

pub use error::BatchError;

use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Writer};
use tracing::{debug, info};

use crate::scoring::SimilarityScorer;

pub const TEXT1_COLUMN: &str = "text1";
pub const TEXT2_COLUMN: &str = "text2";
pub const SCORE_COLUMN: &str = "similarity_score";

#[derive(Debug, Clone, Copy)]
struct TextColumns {
    text1: usize,
    text2: usize,
    width: usize,
}

impl TextColumns {
    fn locate(headers: &StringRecord) -> Result<Self, BatchError> {
        let find = |name: &'static str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or(BatchError::MissingColumn { column: name })
        };

        Ok(Self {
            text1: find(TEXT1_COLUMN)?,
            text2: find(TEXT2_COLUMN)?,
            width: headers.len(),
        })
    }
}

/// Scores every row of `input` into `output`; returns the number of rows.
///
/// The whole input is read and checked before anything is written, so a
/// malformed row leaves `output` untouched.
pub fn score_csv<R: Read, W: Write>(
    scorer: &SimilarityScorer,
    input: R,
    output: W,
) -> Result<usize, BatchError> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(input);
    let (headers, columns, records) = read_checked(&mut reader)?;

    write_scored(scorer, &headers, columns, records, Writer::from_writer(output))
}

/// File-to-file variant of [`score_csv`]. The output file is only created
/// once the whole input has been read and checked.
pub fn score_csv_file(
    scorer: &SimilarityScorer,
    input: &Path,
    output: &Path,
) -> Result<usize, BatchError> {
    let mut reader = ReaderBuilder::new().flexible(true).from_path(input)?;
    let (headers, columns, records) = read_checked(&mut reader)?;

    let rows = write_scored(scorer, &headers, columns, records, Writer::from_path(output)?)?;

    info!(
        input = %input.display(),
        output = %output.display(),
        rows = rows,
        "Batch scoring complete"
    );
    Ok(rows)
}

/// Formats a score the way the batch output has always carried it: at least
/// one decimal place (`0.0`, `1.0`, `0.57`).
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{:.1}", score)
    } else {
        score.to_string()
    }
}

fn read_checked<R: Read>(
    reader: &mut csv::Reader<R>,
) -> Result<(StringRecord, TextColumns, Vec<StringRecord>), BatchError> {
    let headers = reader.headers()?.clone();
    let columns = TextColumns::locate(&headers)?;

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.len() > columns.width {
            return Err(BatchError::RaggedRow {
                line: record.position().map_or(0, |p| p.line()),
                expected: columns.width,
                found: record.len(),
            });
        }
        records.push(record);
    }

    Ok((headers, columns, records))
}

fn write_scored<W: Write>(
    scorer: &SimilarityScorer,
    headers: &StringRecord,
    columns: TextColumns,
    records: Vec<StringRecord>,
    mut writer: Writer<W>,
) -> Result<usize, BatchError> {
    let mut out_headers = headers.clone();
    out_headers.push_field(SCORE_COLUMN);
    writer.write_record(&out_headers)?;

    let mut rows = 0usize;
    for mut record in records {
        let text1 = record.get(columns.text1).unwrap_or("");
        let text2 = record.get(columns.text2).unwrap_or("");
        let score = scorer.compute_similarity(text1, text2);
        debug!(row = rows, score = score, "Scored row");

        // Short rows are padded so the score lands under its header.
        while record.len() < columns.width {
            record.push_field("");
        }
        record.push_field(&format_score(score));
        writer.write_record(&record)?;

        rows += 1;
    }

    writer.flush()?;
    Ok(rows)
}

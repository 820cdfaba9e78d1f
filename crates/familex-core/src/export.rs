//! The export artifact: CSV serialization of a session's ratings.
//!
//! One row per rating record in insertion order, header `word,rating`.
//! Fields are quoted RFC-4180 style when they contain a comma, quote, or
//! newline, so the text round-trips through common spreadsheet tools.

use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::error::SurveyError;
use crate::model::{Rating, RatingRecord};

/// Header row of every export artifact.
pub const CSV_HEADER: &str = "word,rating";

/// The tabular serialization of one session's ratings.
///
/// Derived from the ratings at thank-you entry and recomputed per render;
/// it carries the row data alongside the text so previews don't re-parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    records: Vec<RatingRecord>,
    csv: String,
}

impl ExportArtifact {
    /// Serialize ratings into an artifact.
    pub fn from_ratings(records: &[RatingRecord]) -> Self {
        let mut csv = String::with_capacity(CSV_HEADER.len() + 1 + records.len() * 12);
        csv.push_str(CSV_HEADER);
        csv.push('\n');
        for record in records {
            csv.push_str(&csv_escape(&record.word));
            csv.push(',');
            csv.push_str(&record.rating.to_string());
            csv.push('\n');
        }
        ExportArtifact {
            records: records.to_vec(),
            csv,
        }
    }

    /// Parse artifact text back into records — the inverse of
    /// [`ExportArtifact::from_ratings`].
    pub fn parse(text: &str) -> Result<Self, SurveyError> {
        let mut lines = text.lines().enumerate();

        match lines.next() {
            Some((_, header)) if header.trim_end() == CSV_HEADER => {}
            other => {
                return Err(SurveyError::BadCsvHeader {
                    found: other.map(|(_, l)| l.to_string()).unwrap_or_default(),
                })
            }
        }

        let mut records = Vec::new();
        for (index, line) in lines {
            if line.is_empty() {
                continue;
            }
            let line_no = index + 1;
            let (word, rating_field) =
                split_row(line).ok_or_else(|| SurveyError::MalformedCsv {
                    line: line_no,
                    reason: "expected two comma-separated fields".into(),
                })?;
            let value: u8 =
                rating_field
                    .trim()
                    .parse()
                    .map_err(|_| SurveyError::MalformedCsv {
                        line: line_no,
                        reason: format!("'{}' is not a rating", rating_field.trim()),
                    })?;
            let rating = Rating::new(value).map_err(|_| SurveyError::MalformedCsv {
                line: line_no,
                reason: format!("rating {value} is outside the 1..=7 scale"),
            })?;
            records.push(RatingRecord::new(word, rating));
        }

        Ok(ExportArtifact::from_ratings(&records))
    }

    /// Load an artifact from a CSV file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read results from {}", path.display()))?;
        let artifact = Self::parse(&text)
            .with_context(|| format!("failed to parse results from {}", path.display()))?;
        Ok(artifact)
    }

    /// Write the artifact to `dir` under the suggested filename.
    pub fn save(&self, dir: &Path, participant_id: &str) -> Result<PathBuf> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory {}", dir.display()))?;
        let path = dir.join(suggested_filename(participant_id));
        std::fs::write(&path, &self.csv)
            .with_context(|| format!("failed to write results to {}", path.display()))?;
        Ok(path)
    }

    /// The raw CSV text.
    pub fn csv(&self) -> &str {
        &self.csv
    }

    /// The rows behind the text, in insertion order.
    pub fn records(&self) -> &[RatingRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl fmt::Display for ExportArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.csv)
    }
}

/// Download filename for a participant's results.
pub fn suggested_filename(participant_id: &str) -> String {
    format!("results_{participant_id}.csv")
}

/// Quote a field when it would break the row structure.
fn csv_escape(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Split a data row into its word and rating fields, honoring quoting.
fn split_row(line: &str) -> Option<(String, &str)> {
    let Some(rest) = line.strip_prefix('"') else {
        let (word, rating) = line.split_once(',')?;
        return Some((word.to_string(), rating));
    };

    let mut word = String::new();
    let mut chars = rest.char_indices();
    while let Some((_, c)) = chars.next() {
        if c != '"' {
            word.push(c);
            continue;
        }
        match chars.next() {
            // A doubled quote is an escaped quote inside the field.
            Some((_, '"')) => word.push('"'),
            Some((i, ',')) => return Some((word, &rest[i + 1..])),
            _ => return None,
        }
    }
    None
}

//! Core error types.
//!
//! These errors represent contract violations and malformed inputs. Defined
//! in `familex-core` so callers can classify failures without string
//! matching: front-end bugs (bad rating, event in the wrong page) are
//! distinguished from bad data files.

use thiserror::Error;

use crate::session::Page;

/// Errors raised by the survey core.
#[derive(Debug, Error)]
pub enum SurveyError {
    /// A rating outside the 1..=7 familiarity scale was supplied.
    #[error("rating {value} is outside the familiarity scale 1..=7")]
    RatingOutOfRange { value: i64 },

    /// An event arrived that the current page cannot accept.
    #[error("event '{event}' is not valid on the {page} page")]
    UnexpectedEvent { page: Page, event: String },

    /// A survey definition contained a blank word entry.
    #[error("word entry {index} in survey '{survey}' is blank")]
    BlankWord { survey: String, index: usize },

    /// An exported artifact had an unrecognized header row.
    #[error("bad CSV header: expected 'word,rating', found '{found}'")]
    BadCsvHeader { found: String },

    /// An exported artifact row could not be parsed.
    #[error("malformed CSV row at line {line}: {reason}")]
    MalformedCsv { line: usize, reason: String },
}

impl SurveyError {
    /// Returns `true` if this error indicates a front-end contract violation
    /// rather than bad user-supplied data. The seven rating affordances form
    /// a closed set, so these are reachable only through a rendering bug.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            SurveyError::RatingOutOfRange { .. } | SurveyError::UnexpectedEvent { .. }
        )
    }
}

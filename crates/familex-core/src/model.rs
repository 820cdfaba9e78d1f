//! Core data model types for familex.
//!
//! These are the fundamental types the whole instrument is built on: the
//! validated familiarity rating, one collected observation, the word list
//! under test, and the survey definition that ties them together.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

use crate::error::SurveyError;

/// A self-reported familiarity rating on the fixed 1..=7 scale.
///
/// 1 means the word is not known at all, 7 means it is extremely familiar.
/// Construction validates the range, so a `Rating` held anywhere in the
/// system is always in-scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Lowest point on the scale ("not at all familiar").
    pub const MIN: u8 = 1;
    /// Highest point on the scale ("extremely familiar").
    pub const MAX: u8 = 7;

    /// Every scale point in presentation order.
    pub const ALL: [Rating; 7] = [
        Rating(1),
        Rating(2),
        Rating(3),
        Rating(4),
        Rating(5),
        Rating(6),
        Rating(7),
    ];

    /// Validate and wrap a raw scale value.
    pub fn new(value: u8) -> Result<Self, SurveyError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Rating(value))
        } else {
            Err(SurveyError::RatingOutOfRange {
                value: value as i64,
            })
        }
    }

    /// The raw scale value.
    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = SurveyError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> u8 {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One collected observation: a presented word and the rating it received.
///
/// Records are appended once per survey submission and never mutated, so
/// repeated words in the list produce separate records in presentation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingRecord {
    /// The word exactly as presented.
    pub word: String,
    /// The familiarity rating the participant chose.
    pub rating: Rating,
}

impl RatingRecord {
    pub fn new(word: impl Into<String>, rating: Rating) -> Self {
        Self {
            word: word.into(),
            rating,
        }
    }
}

/// An ordered, immutable list of lowercase words to be rated.
///
/// Duplicates are kept deliberately: a word appearing twice probes rating
/// consistency. Entries are lowercased on construction, which is the only
/// way in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList(Vec<String>);

impl WordList {
    pub fn new(words: impl IntoIterator<Item = impl Into<String>>) -> Self {
        WordList(
            words
                .into_iter()
                .map(|w| w.into().to_lowercase())
                .collect(),
        )
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }
}

impl Deref for WordList {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.0
    }
}

/// A named survey definition: instructional text plus the word list.
#[derive(Debug, Clone)]
pub struct SurveyDef {
    /// Unique identifier for this survey.
    pub id: String,
    /// Human-readable title, shown on the instructions page.
    pub name: String,
    /// Static instructional text presented before the first word.
    pub instructions: String,
    /// The words to rate, in presentation order.
    pub words: WordList,
}

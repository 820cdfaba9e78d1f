//! Per-participant session state.
//!
//! A `Session` is the single source of truth for where one participant is
//! and what they have answered. Sessions live in a `SessionStore` keyed by
//! an opaque id, never in ambient global state, so multiple simultaneous
//! participants each get an independently owned instance.

use std::collections::HashMap;
use std::fmt;

use chrono::Local;
use uuid::Uuid;

use crate::model::{Rating, RatingRecord};

/// The three pages of the instrument, in flow order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Instructions,
    Survey,
    ThankYou,
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Page::Instructions => write!(f, "instructions"),
            Page::Survey => write!(f, "survey"),
            Page::ThankYou => write!(f, "thank-you"),
        }
    }
}

/// One participant's run through the instrument.
///
/// `page` and `current_word_index` are private: `transition_to` is the only
/// way the page changes, and `record_rating` is the only way the index
/// advances, which keeps the index monotonic and `ratings.len()` equal to
/// the number of words answered.
#[derive(Debug, Clone)]
pub struct Session {
    /// Opaque session identifier.
    pub id: Uuid,
    /// Participant identifier, by default the creation timestamp.
    pub participant_id: String,
    page: Page,
    current_word_index: usize,
    ratings: Vec<RatingRecord>,
}

impl Session {
    /// Create a fresh session on the instructions page.
    pub fn new(participant_id: impl Into<String>) -> Self {
        Session {
            id: Uuid::new_v4(),
            participant_id: participant_id.into(),
            page: Page::Instructions,
            current_word_index: 0,
            ratings: Vec::new(),
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn current_word_index(&self) -> usize {
        self.current_word_index
    }

    /// All ratings collected so far, in presentation order.
    pub fn ratings(&self) -> &[RatingRecord] {
        &self.ratings
    }

    /// Append one rating record and advance to the next word.
    ///
    /// Deciding whether the survey is now exhausted is the flow
    /// controller's job, not this method's.
    pub fn record_rating(&mut self, word: &str, rating: Rating) {
        self.ratings.push(RatingRecord::new(word, rating));
        self.current_word_index += 1;
        tracing::debug!(
            session = %self.id,
            word,
            rating = rating.value(),
            index = self.current_word_index,
            "rating recorded"
        );
    }

    /// Move to another page. The sole mutation point for `page`.
    pub fn transition_to(&mut self, page: Page) {
        tracing::debug!(session = %self.id, from = %self.page, to = %page, "page transition");
        self.page = page;
    }
}

/// Participant identifier from the current local time, second granularity.
pub fn timestamp_participant_id() -> String {
    Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Owned session contexts keyed by opaque id.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<Uuid, Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the session for `id`, creating it if absent.
    ///
    /// Idempotent on live sessions: opening an id that already exists
    /// returns the in-progress session untouched, and `participant_id` is
    /// ignored for it.
    pub fn open(&mut self, id: Uuid, participant_id: &str) -> &mut Session {
        self.sessions.entry(id).or_insert_with(|| {
            tracing::info!(session = %id, participant = participant_id, "session created");
            Session {
                id,
                ..Session::new(participant_id)
            }
        })
    }

    pub fn get(&self, id: &Uuid) -> Option<&Session> {
        self.sessions.get(id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rating(v: u8) -> Rating {
        Rating::new(v).unwrap()
    }

    #[test]
    fn new_session_starts_on_instructions() {
        let session = Session::new("p1");
        assert_eq!(session.page(), Page::Instructions);
        assert_eq!(session.current_word_index(), 0);
        assert!(session.ratings().is_empty());
    }

    #[test]
    fn record_rating_appends_and_advances_only() {
        let mut session = Session::new("p1");
        session.transition_to(Page::Survey);

        session.record_rating("run", rating(5));

        assert_eq!(session.current_word_index(), 1);
        assert_eq!(session.ratings().len(), 1);
        assert_eq!(session.ratings()[0].word, "run");
        assert_eq!(session.ratings()[0].rating.value(), 5);
        // No other field changes.
        assert_eq!(session.page(), Page::Survey);
        assert_eq!(session.participant_id, "p1");
    }

    #[test]
    fn ratings_len_tracks_index() {
        let mut session = Session::new("p1");
        session.transition_to(Page::Survey);
        for (i, v) in [3u8, 7, 1].iter().enumerate() {
            session.record_rating("word", rating(*v));
            assert_eq!(session.ratings().len(), i + 1);
            assert_eq!(session.current_word_index(), session.ratings().len());
        }
    }

    #[test]
    fn store_open_is_idempotent_for_live_sessions() {
        let mut store = SessionStore::new();
        let id = Uuid::new_v4();

        let session = store.open(id, "p1");
        session.transition_to(Page::Survey);
        session.record_rating("run", rating(4));

        // Opening again must not reset anything, even with a new participant.
        let session = store.open(id, "someone-else");
        assert_eq!(session.page(), Page::Survey);
        assert_eq!(session.current_word_index(), 1);
        assert_eq!(session.ratings().len(), 1);
        assert_eq!(session.participant_id, "p1");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn store_keys_sessions_independently() {
        let mut store = SessionStore::new();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        store.open(a, "p1").transition_to(Page::Survey);
        store.open(a, "p1").record_rating("run", rating(2));
        store.open(b, "p2");

        assert_eq!(store.get(&a).unwrap().ratings().len(), 1);
        assert!(store.get(&b).unwrap().ratings().is_empty());
        assert_eq!(store.get(&b).unwrap().page(), Page::Instructions);
    }

    #[test]
    fn timestamp_participant_id_is_second_granular() {
        let id = timestamp_participant_id();
        // YYYYMMDD_HHMMSS
        assert_eq!(id.len(), 15);
        assert_eq!(id.as_bytes()[8], b'_');
        assert!(id.chars().filter(|c| *c != '_').all(|c| c.is_ascii_digit()));
    }
}

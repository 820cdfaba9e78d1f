//! The page-flow controller.
//!
//! A three-state machine (instructions, survey, thank-you) expressed as an
//! explicit step function over [`Session`]: each participant input is one
//! synchronous `handle_event` call that mutates the session and returns the
//! next view to render. The controller never talks to a terminal itself;
//! rendering goes through the [`Frontend`] seam, so the whole flow is
//! unit-testable with a scripted front end.

use std::fmt;

use anyhow::Result;

use crate::error::SurveyError;
use crate::export::ExportArtifact;
use crate::model::{Rating, SurveyDef};
use crate::session::{Page, Session};

/// One participant input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The single confirmation affordance on the instructions page.
    Confirm,
    /// One of the seven rating affordances on the survey page.
    Rate(Rating),
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Confirm => write!(f, "confirm"),
            Event::Rate(rating) => write!(f, "rate({rating})"),
        }
    }
}

/// What the front end should render next.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    /// Static instructional content plus a confirmation affordance.
    Instructions { name: String, instructions: String },
    /// The current word, its 1-based position, and the progress fraction.
    Survey {
        word: String,
        position: usize,
        total: usize,
        progress: f64,
    },
    /// Completion acknowledgment with the export artifact to offer.
    Complete { artifact: ExportArtifact },
}

/// The view for the session's current page, without consuming an input.
///
/// Takes `&mut Session` because rendering the survey page runs the
/// exhaustion check, which may transition to thank-you (the degenerate
/// empty-word-list case lands here).
pub fn current_view(session: &mut Session, survey: &SurveyDef) -> View {
    match session.page() {
        Page::Instructions => View::Instructions {
            name: survey.name.clone(),
            instructions: survey.instructions.clone(),
        },
        Page::Survey => survey_view(session, survey),
        Page::ThankYou => complete_view(session),
    }
}

/// Apply one participant input to the session and return the next view.
///
/// Rating submission records the rating and runs the exhaustion check in
/// the same step, so the final word's rating is never lost and the
/// thank-you transition needs no extra render cycle.
pub fn handle_event(
    session: &mut Session,
    survey: &SurveyDef,
    event: Event,
) -> Result<View, SurveyError> {
    match (session.page(), event) {
        (Page::Instructions, Event::Confirm) => {
            session.transition_to(Page::Survey);
            Ok(survey_view(session, survey))
        }
        (Page::Survey, Event::Rate(rating)) => {
            // The survey render path transitions exhausted sessions before
            // any rating affordance can be shown, so a missing word here is
            // a front-end contract violation, not an index to clamp.
            let Some(word) = survey
                .words
                .get(session.current_word_index())
                .map(str::to_string)
            else {
                tracing::error!(session = %session.id, "rate event with no word on display");
                return Err(SurveyError::UnexpectedEvent {
                    page: Page::Survey,
                    event: event.to_string(),
                });
            };
            session.record_rating(&word, rating);
            Ok(survey_view(session, survey))
        }
        // Redundant confirms are reachable from a human at a keyboard;
        // they re-render the current page.
        (_, Event::Confirm) => Ok(current_view(session, survey)),
        (page, event @ Event::Rate(_)) => {
            tracing::error!(session = %session.id, %page, %event, "event outside survey page");
            Err(SurveyError::UnexpectedEvent {
                page,
                event: event.to_string(),
            })
        }
    }
}

/// Survey render path. The exhaustion check always runs before any word
/// lookup; an out-of-bounds lookup is structurally unreachable.
fn survey_view(session: &mut Session, survey: &SurveyDef) -> View {
    let total = survey.words.len();
    let index = session.current_word_index();
    if index >= total {
        session.transition_to(Page::ThankYou);
        tracing::info!(
            session = %session.id,
            participant = %session.participant_id,
            ratings = session.ratings().len(),
            "survey complete"
        );
        return complete_view(session);
    }
    View::Survey {
        word: survey.words[index].clone(),
        position: index + 1,
        total,
        progress: (index + 1) as f64 / total as f64,
    }
}

/// Thank-you render path: the artifact is re-derived on every render.
fn complete_view(session: &Session) -> View {
    View::Complete {
        artifact: ExportArtifact::from_ratings(session.ratings()),
    }
}

/// The rendering collaborator.
///
/// `present` displays a view and collects the participant's next input;
/// `Ok(None)` means the participant abandoned the session.
pub trait Frontend {
    fn present(&mut self, view: &View) -> Result<Option<Event>>;
}

/// Front end that abandons immediately. A stand-in for tests and dry runs.
#[derive(Debug, Default)]
pub struct NoopFrontend;

impl Frontend for NoopFrontend {
    fn present(&mut self, _view: &View) -> Result<Option<Event>> {
        Ok(None)
    }
}

/// How a drive loop ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    /// Every word was rated; the artifact is ready to offer.
    Completed(ExportArtifact),
    /// The participant quit early. No artifact is produced.
    Abandoned,
}

/// Drive one session to completion or abandonment.
///
/// Synchronous request/response: render, collect one input, step, repeat.
/// The rendered view is never left inconsistent with the session — every
/// mutation is followed by a fresh render.
pub fn run_session(
    session: &mut Session,
    survey: &SurveyDef,
    frontend: &mut dyn Frontend,
) -> Result<SessionOutcome> {
    let mut view = current_view(session, survey);
    loop {
        if let View::Complete { artifact } = &view {
            frontend.present(&view)?;
            return Ok(SessionOutcome::Completed(artifact.clone()));
        }
        match frontend.present(&view)? {
            Some(event) => view = handle_event(session, survey, event)?,
            None => {
                tracing::info!(session = %session.id, "session abandoned");
                return Ok(SessionOutcome::Abandoned);
            }
        }
    }
}

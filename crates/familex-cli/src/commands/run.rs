//! The `familex run` command.

use std::path::PathBuf;

use anyhow::Result;
use uuid::Uuid;

use familex_core::flow::{run_session, SessionOutcome};
use familex_core::model::SurveyDef;
use familex_core::parser;
use familex_core::session::{timestamp_participant_id, SessionStore};

use crate::commands::preview::records_table;
use crate::tui::TerminalFrontend;

pub fn execute(
    survey_path: Option<PathBuf>,
    participant: Option<String>,
    output: PathBuf,
    no_save: bool,
) -> Result<()> {
    let survey = match &survey_path {
        Some(path) => parser::parse_survey(path)?,
        None => SurveyDef::builtin(),
    };
    for warning in parser::survey_warnings(&survey) {
        eprintln!("Warning: {warning}");
    }

    let participant_id = participant.unwrap_or_else(timestamp_participant_id);
    anyhow::ensure!(
        !participant_id.trim().is_empty(),
        "participant id must not be blank"
    );

    let mut store = SessionStore::new();
    let session = store.open(Uuid::new_v4(), &participant_id);
    tracing::info!(survey = %survey.id, participant = %participant_id, "starting session");

    let mut frontend = TerminalFrontend::new()?;
    let outcome = run_session(session, &survey, &mut frontend);
    // Leave raw mode before anything is printed, even on error.
    frontend.restore()?;

    match outcome? {
        SessionOutcome::Completed(artifact) => {
            println!(
                "You rated all {} words. Thank you for participating!",
                artifact.records().len()
            );

            println!("\nCopy the block below and send it to the researcher:");
            println!("{}", "-".repeat(40));
            print!("{artifact}");
            println!("{}", "-".repeat(40));

            println!("\nPreview of your submission:");
            println!("{}", records_table(artifact.records()));

            if !no_save {
                let path = artifact.save(&output, &participant_id)?;
                println!("\nResults written to {}", path.display());
            }
        }
        SessionOutcome::Abandoned => {
            println!("Session abandoned; no results were produced.");
        }
    }

    Ok(())
}

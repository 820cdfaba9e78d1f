//! The `familex validate` command.

use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;

use familex_core::parser;

#[derive(Serialize)]
struct SurveySummary {
    id: String,
    name: String,
    words: usize,
    warnings: Vec<String>,
}

pub fn execute(survey_path: PathBuf, format: String) -> Result<()> {
    let surveys = if survey_path.is_dir() {
        parser::load_survey_directory(&survey_path)?
    } else {
        vec![parser::parse_survey(&survey_path)?]
    };

    let summaries: Vec<SurveySummary> = surveys
        .iter()
        .map(|s| SurveySummary {
            id: s.id.clone(),
            name: s.name.clone(),
            words: s.words.len(),
            warnings: parser::survey_warnings(s),
        })
        .collect();

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&summaries)?),
        _ => {
            for summary in &summaries {
                println!(
                    "{}: {} ({} words)",
                    summary.id, summary.name, summary.words
                );
                for warning in &summary.warnings {
                    println!("  warning: {warning}");
                }
            }
            println!("\nAll surveys valid ({} checked)", summaries.len());
        }
    }

    Ok(())
}

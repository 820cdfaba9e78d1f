//! TOML survey definition parser.
//!
//! Loads survey definitions from TOML files and directories, and surfaces
//! non-fatal findings for the `validate` command.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::SurveyError;
use crate::model::{SurveyDef, WordList};

/// Intermediate TOML structure for parsing survey files.
#[derive(Debug, Deserialize)]
struct TomlSurveyFile {
    survey: TomlSurveyHeader,
}

#[derive(Debug, Deserialize)]
struct TomlSurveyHeader {
    id: String,
    name: String,
    #[serde(default)]
    instructions: String,
    #[serde(default)]
    words: Vec<String>,
}

/// Parse a single TOML file into a `SurveyDef`.
pub fn parse_survey(path: &Path) -> Result<SurveyDef> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read survey file: {}", path.display()))?;

    parse_survey_str(&content, path)
}

/// Parse a TOML string into a `SurveyDef` (useful for testing).
pub fn parse_survey_str(content: &str, source_path: &Path) -> Result<SurveyDef> {
    let parsed: TomlSurveyFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    for (index, word) in parsed.survey.words.iter().enumerate() {
        if word.trim().is_empty() {
            return Err(SurveyError::BlankWord {
                survey: parsed.survey.id.clone(),
                index,
            }
            .into());
        }
    }

    Ok(SurveyDef {
        id: parsed.survey.id,
        name: parsed.survey.name,
        instructions: parsed.survey.instructions,
        words: WordList::new(parsed.survey.words),
    })
}

/// Load every `.toml` survey in a directory, sorted by path.
pub fn load_survey_directory(dir: &Path) -> Result<Vec<SurveyDef>> {
    let mut entries: Vec<_> = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read survey directory: {}", dir.display()))?
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|e| e.path());

    let mut surveys = Vec::new();
    for entry in entries {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) == Some("toml") {
            surveys.push(parse_survey(&path)?);
        }
    }

    anyhow::ensure!(
        !surveys.is_empty(),
        "no .toml survey files found in {}",
        dir.display()
    );
    Ok(surveys)
}

/// Non-fatal findings about a parsed survey.
///
/// An empty word list is legal (the survey completes immediately) but
/// almost certainly not what the author meant.
pub fn survey_warnings(survey: &SurveyDef) -> Vec<String> {
    let mut warnings = Vec::new();
    if survey.words.is_empty() {
        warnings.push("word list is empty; the survey completes immediately".to_string());
    }
    if survey.instructions.trim().is_empty() {
        warnings.push("instructions are empty".to_string());
    }
    warnings
}

//! The `familex preview` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use familex_core::export::ExportArtifact;
use familex_core::model::RatingRecord;

pub fn execute(results: PathBuf, format: String) -> Result<()> {
    let artifact = ExportArtifact::load(&results)?;

    match format.as_str() {
        "csv" => print!("{artifact}"),
        "json" => println!("{}", serde_json::to_string_pretty(artifact.records())?),
        _ => {
            println!("{}", records_table(artifact.records()));
            println!("{} rating(s)", artifact.records().len());
        }
    }

    Ok(())
}

/// Tabular rendering shared with the end-of-session preview.
pub(crate) fn records_table(records: &[RatingRecord]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Word", "Rating"]);
    for record in records {
        table.add_row(vec![
            Cell::new(&record.word),
            Cell::new(record.rating.to_string()),
        ]);
    }
    table
}

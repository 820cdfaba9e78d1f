//! familex CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod tui;

#[derive(Parser)]
#[command(name = "familex", version, about = "Word familiarity rating instrument")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an interactive rating session
    Run {
        /// Path to a .toml survey definition (defaults to the built-in survey)
        #[arg(long)]
        survey: Option<PathBuf>,

        /// Participant identifier (defaults to a second-granularity timestamp)
        #[arg(long)]
        participant: Option<String>,

        /// Directory the results file is written to
        #[arg(long, default_value = "./results")]
        output: PathBuf,

        /// Print the CSV but skip writing a results file
        #[arg(long)]
        no_save: bool,
    },

    /// Validate survey definition files
    Validate {
        /// Path to a survey file or directory
        #[arg(long)]
        survey: PathBuf,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Create a starter survey definition
    Init,

    /// Preview an exported results file
    Preview {
        /// Path to a results .csv file
        results: PathBuf,

        /// Output format: table, csv, json
        #[arg(long, default_value = "table")]
        format: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("familex=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            survey,
            participant,
            output,
            no_save,
        } => commands::run::execute(survey, participant, output, no_save),
        Commands::Validate { survey, format } => commands::validate::execute(survey, format),
        Commands::Init => commands::init::execute(),
        Commands::Preview { results, format } => commands::preview::execute(results, format),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

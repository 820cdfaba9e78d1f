//! The `familex init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    std::fs::create_dir_all("surveys")?;
    let example_path = std::path::Path::new("surveys/example.toml");
    if example_path.exists() {
        println!("surveys/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_SURVEY)?;
        println!("Created surveys/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit surveys/example.toml with your word list");
    println!("  2. Run: familex validate --survey surveys/example.toml");
    println!("  3. Run: familex run --survey surveys/example.toml");

    Ok(())
}

const EXAMPLE_SURVEY: &str = r#"[survey]
id = "example"
name = "Example Familiarity Survey"
instructions = """
You will see one word at a time. Rate how familiar each word feels to you
on a scale from 1 (not at all familiar) to 7 (extremely familiar).

Repeated words are intentional; rate each presentation on its own.
"""

words = [
    "run",
    "sit",
    "leave",
    "run",
]
"#;

//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn familex() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("familex").unwrap()
}

const SURVEY: &str = r#"[survey]
id = "verbs"
name = "Verb Familiarity"
instructions = "Rate each word."

words = ["run", "sit", "run"]
"#;

#[test]
fn validate_valid_survey() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("verbs.toml");
    std::fs::write(&path, SURVEY).unwrap();

    familex()
        .arg("validate")
        .arg("--survey")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("3 words"))
        .stdout(predicate::str::contains("All surveys valid"));
}

#[test]
fn validate_directory() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("a.toml"), SURVEY.replace("verbs", "a")).unwrap();
    std::fs::write(dir.path().join("b.toml"), SURVEY.replace("verbs", "b")).unwrap();

    familex()
        .arg("validate")
        .arg("--survey")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("a: Verb Familiarity"))
        .stdout(predicate::str::contains("b: Verb Familiarity"))
        .stdout(predicate::str::contains("All surveys valid (2 checked)"));
}

#[test]
fn validate_warns_on_empty_word_list() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.toml");
    std::fs::write(
        &path,
        "[survey]\nid = \"empty\"\nname = \"Empty\"\ninstructions = \"x\"\n",
    )
    .unwrap();

    familex()
        .arg("validate")
        .arg("--survey")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("warning: word list is empty"));
}

#[test]
fn validate_json_format() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("verbs.toml");
    std::fs::write(&path, SURVEY).unwrap();

    familex()
        .arg("validate")
        .arg("--survey")
        .arg(&path)
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": \"verbs\""))
        .stdout(predicate::str::contains("\"words\": 3"));
}

#[test]
fn validate_nonexistent_file() {
    familex()
        .arg("validate")
        .arg("--survey")
        .arg("nonexistent.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn validate_rejects_blank_word() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, SURVEY.replace("\"sit\"", "\"  \"")).unwrap();

    familex()
        .arg("validate")
        .arg("--survey")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("blank"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    familex()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created surveys/example.toml"));

    assert!(dir.path().join("surveys/example.toml").exists());
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    familex()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    familex()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn init_output_validates() {
    let dir = TempDir::new().unwrap();

    familex()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    familex()
        .current_dir(dir.path())
        .arg("validate")
        .arg("--survey")
        .arg("surveys/example.toml")
        .assert()
        .success()
        .stdout(predicate::str::contains("All surveys valid"));
}

#[test]
fn preview_renders_a_table() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("results.csv");
    std::fs::write(&path, "word,rating\nrun,5\nsit,2\n").unwrap();

    familex()
        .arg("preview")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("sit"))
        .stdout(predicate::str::contains("2 rating(s)"));
}

#[test]
fn preview_csv_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("results.csv");
    std::fs::write(&path, "word,rating\nrun,5\nsit,2\n").unwrap();

    familex()
        .arg("preview")
        .arg(&path)
        .arg("--format")
        .arg("csv")
        .assert()
        .success()
        .stdout(predicate::eq("word,rating\nrun,5\nsit,2\n"));
}

#[test]
fn preview_json_uses_raw_rating_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("results.csv");
    std::fs::write(&path, "word,rating\nrun,5\n").unwrap();

    familex()
        .arg("preview")
        .arg(&path)
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"word\": \"run\""))
        .stdout(predicate::str::contains("\"rating\": 5"));
}

#[test]
fn preview_rejects_out_of_scale_ratings() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("results.csv");
    std::fs::write(&path, "word,rating\nrun,9\n").unwrap();

    familex()
        .arg("preview")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn preview_rejects_bad_header() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("results.csv");
    std::fs::write(&path, "word;rating\nrun,5\n").unwrap();

    familex()
        .arg("preview")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("bad CSV header"));
}

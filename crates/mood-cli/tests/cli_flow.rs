//! End-to-end tests for the `mood` binary.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

const EXPORT: &str = r#"{"date":"2023-03-01","time":"21:15","mood":"good","activities":"gym | Alice","note":"felt great"}
{"date":"2023-03-02","time":"20:00","mood":"rad","activities":"gym | run","note":"sunny<br>long run"}
{"date":"2023-03-03","time":"22:30","mood":"bad","activities":"work","note":"sad day"}
{"date":"2023-03-04","time":"19:45","mood":"meh","activities":"work | Alice","note":""}
"#;

fn mood_binary() -> &'static str {
    env!("CARGO_BIN_EXE_mood")
}

fn write_journal(temp: &TempDir) -> PathBuf {
    let path = temp.path().join("journal.jsonl");
    std::fs::write(&path, EXPORT).unwrap();
    path
}

/// Runs `mood` isolated from the user's config and environment.
fn run(home: &Path, args: &[&str]) -> Output {
    Command::new(mood_binary())
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("XDG_DATA_HOME", home.join(".local/share"))
        .env_remove("MOOD_JOURNAL_PATH")
        .env_remove("MOOD_ANALYZE_MIN_COUNT")
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_query_with_condition_flags() {
    let temp = TempDir::new().unwrap();
    let journal = write_journal(&temp);

    let output = run(
        temp.path(),
        &[
            "--file",
            journal.to_str().unwrap(),
            "query",
            "--has",
            "gym",
            "--mood-min",
            "4",
        ],
    );

    assert!(output.status.success(), "query failed: {output:?}");
    let stdout = stdout(&output);
    assert!(stdout.contains("Condition: ((4.00 <= mood < ...) & gym)"), "{stdout}");
    assert!(stdout.contains("Matched 2 of 4 entries"), "{stdout}");
    assert!(stdout.contains("[01.03.2023 21:15] 4.0 Alice, gym"), "{stdout}");
    assert!(stdout.contains("[02.03.2023 20:00] 5.0 gym, run"), "{stdout}");
}

#[test]
fn test_query_unknown_activity_suggests_tag() {
    let temp = TempDir::new().unwrap();
    let journal = write_journal(&temp);

    let output = run(
        temp.path(),
        &["--file", journal.to_str().unwrap(), "query", "--has", "jym"],
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains(r#"unknown activity: "jym". Did you mean "gym"?"#),
        "{stderr}"
    );
}

#[test]
fn test_query_conflicting_filter_fails() {
    let temp = TempDir::new().unwrap();
    let journal = write_journal(&temp);

    let output = run(
        temp.path(),
        &[
            "--file",
            journal.to_str().unwrap(),
            "query",
            "--include",
            "gym",
            "--exclude",
            "gym",
        ],
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("included and excluded at the same time"),
        "{stderr}"
    );
}

#[test]
fn test_stats_json() {
    let temp = TempDir::new().unwrap();
    let journal = write_journal(&temp);

    let output = run(
        temp.path(),
        &[
            "--file",
            journal.to_str().unwrap(),
            "stats",
            "--people",
            "--json",
        ],
    );

    assert!(output.status.success(), "stats failed: {output:?}");
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["condition"], "PEOPLE");
    assert_eq!(value["entries"], 2);
    assert_eq!(value["mood"]["mean"], 3.5);
}

#[test]
fn test_activities_and_analyze() {
    let temp = TempDir::new().unwrap();
    let journal = write_journal(&temp);
    let journal = journal.to_str().unwrap();

    let output = run(temp.path(), &["--file", journal, "activities"]);
    assert!(output.status.success(), "activities failed: {output:?}");
    let listed: Vec<String> = stdout(&output)
        .lines()
        .filter_map(|line| line.split_whitespace().next().map(str::to_string))
        .collect();
    assert_eq!(listed, ["Alice", "gym", "run", "work"]);

    let output = run(
        temp.path(),
        &["--file", journal, "analyze", "--min-count", "2"],
    );
    assert!(output.status.success(), "analyze failed: {output:?}");
    let stdout = stdout(&output);
    assert!(stdout.starts_with("gym (2 entries)"), "{stdout}");
    assert!(stdout.contains("work (2 entries)"), "{stdout}");
}

#[test]
fn test_journal_path_from_config_file() {
    let temp = TempDir::new().unwrap();
    let journal = write_journal(&temp);

    let config_file = temp.path().join("config.toml");
    std::fs::write(
        &config_file,
        format!(r#"journal_path = "{}""#, journal.display()),
    )
    .unwrap();

    let output = run(
        temp.path(),
        &["--config", config_file.to_str().unwrap(), "query"],
    );

    assert!(output.status.success(), "query failed: {output:?}");
    assert!(stdout(&output).contains("Matched 4 of 4 entries"));
}

#[test]
fn test_missing_journal_reports_path() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope.jsonl");

    let output = run(
        temp.path(),
        &["--file", missing.to_str().unwrap(), "stats"],
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to open"), "{stderr}");
}

//! Stats command for summarizing matching journal entries.

use std::io::Write;

use anyhow::Result;
use mood_core::{Journal, StatsResult};
use serde::Serialize;

use crate::cli::StatsArgs;

/// JSON output shape of `mood stats --json`.
#[derive(Debug, Serialize)]
struct StatsOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    condition: Option<String>,
    #[serde(flatten)]
    stats: StatsResult,
}

pub fn run<W: Write>(writer: &mut W, journal: &Journal, args: &StatsArgs) -> Result<()> {
    let (condition, selected) = args.filters.select(journal)?;

    let Some(stats) = StatsResult::compute(&selected) else {
        if args.json {
            writeln!(writer, "null")?;
        } else {
            writeln!(writer, "No matching entries.")?;
        }
        return Ok(());
    };

    if args.json {
        let output = StatsOutput {
            condition: condition.as_ref().map(ToString::to_string),
            stats,
        };
        writeln!(writer, "{}", serde_json::to_string_pretty(&output)?)?;
        return Ok(());
    }

    if let Some(condition) = &condition {
        writeln!(writer, "Condition: {condition}")?;
    }
    writeln!(writer, "{stats}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    use crate::cli::FilterArgs;

    const EXPORT: &str = r#"{"date":"2023-03-01","time":"09:00","mood":"good","activities":"gym | Alice","note":"felt great"}
{"date":"2023-03-02","time":"09:00","mood":"rad","activities":"gym","note":"best day"}
{"date":"2023-03-03","time":"09:00","mood":"meh","activities":"work","note":""}
"#;

    fn journal() -> Journal {
        Journal::from_reader(EXPORT.as_bytes()).unwrap()
    }

    #[test]
    fn stats_for_activity() {
        let args = StatsArgs {
            filters: FilterArgs {
                has: vec!["gym".to_string()],
                ..FilterArgs::default()
            },
            json: false,
        };
        let mut output = Vec::new();
        run(&mut output, &journal(), &args).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_snapshot!(output, @r"
        Condition: gym
        Stats(
            - entries: 2
            - mood: 4.500 ± 0.500
            - note length: 9.000 ± 1.000 symbols
            - number of activities: 3
            - entries frequency: 2.000 entries per day (once every 12 hours)
        )
        ");
    }

    #[test]
    fn stats_json() {
        let args = StatsArgs {
            filters: FilterArgs {
                mood: vec![3.0],
                ..FilterArgs::default()
            },
            json: true,
        };
        let mut output = Vec::new();
        run(&mut output, &journal(), &args).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["entries"], 1);
        assert_eq!(value["mood"]["mean"], 3.0);
        assert!(value["entries_frequency"].is_null());
        assert!(value.get("condition").is_none());
    }

    #[test]
    fn stats_without_matches() {
        let args = StatsArgs {
            filters: FilterArgs {
                exclude: vec!["gym".to_string(), "work".to_string()],
                ..FilterArgs::default()
            },
            json: false,
        };
        let mut output = Vec::new();
        run(&mut output, &journal(), &args).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "No matching entries.\n");
    }
}

//! Analyze command for comparing mood with and without each activity.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;
use mood_core::{ActivityAnalysis, Journal, analyze_activities};

use crate::Config;
use crate::cli::AnalyzeArgs;

pub fn run<W: Write>(
    writer: &mut W,
    journal: &Journal,
    args: &AnalyzeArgs,
    config: &Config,
) -> Result<()> {
    let min_count = args.min_count.unwrap_or(config.analyze_min_count);
    let records: Vec<_> = journal.records().iter().collect();
    let analyses = analyze_activities(&records, min_count);
    tracing::debug!(min_count, activities = analyses.len(), "analyzed activities");

    write!(writer, "{}", format_analysis(&analyses, min_count))?;
    Ok(())
}

/// Formats one block per activity, best mood change first.
pub fn format_analysis(analyses: &[ActivityAnalysis], min_count: usize) -> String {
    let mut output = String::new();
    if analyses.is_empty() {
        writeln!(
            output,
            "No activity occurs in at least {min_count} entries (and is missing from others)."
        )
        .unwrap();
        return output;
    }

    for (i, analysis) in analyses.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        writeln!(
            output,
            "{} ({} entries)",
            analysis.activity, analysis.occurrences
        )
        .unwrap();
        for line in analysis.mood.to_string().lines() {
            writeln!(output, "  {line}").unwrap();
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    const EXPORT: &str = r#"{"date":"2023-03-01","time":"09:00","mood":"good","activities":"gym | Alice","note":""}
{"date":"2023-03-02","time":"09:00","mood":"rad","activities":"gym","note":""}
{"date":"2023-03-03","time":"09:00","mood":"meh","activities":"work","note":""}
{"date":"2023-03-05","time":"09:00","mood":"bad","activities":"work | Alice","note":""}
"#;

    fn config() -> Config {
        Config {
            journal_path: "unused.jsonl".into(),
            analyze_min_count: 2,
        }
    }

    #[test]
    fn analyze_orders_by_change() {
        let journal = Journal::from_reader(EXPORT.as_bytes()).unwrap();
        let mut output = Vec::new();
        run(&mut output, &journal, &AnalyzeArgs::default(), &config()).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_snapshot!(output, @r"
        gym (2 entries)
          with:    4.500 ± 0.500
          without: 2.500 ± 0.500
          change:  80.00%

        Alice (2 entries)
          with:    3.000 ± 1.000
          without: 4.000 ± 1.000
          change:  -25.00%

        work (2 entries)
          with:    2.500 ± 0.500
          without: 4.500 ± 0.500
          change:  -44.44%
        ");
    }

    #[test]
    fn format_analysis_indents_each_block() {
        let journal = Journal::from_reader(EXPORT.as_bytes()).unwrap();
        let records: Vec<_> = journal.records().iter().collect();
        let analyses = analyze_activities(&records, 2);

        let output = format_analysis(&analyses[..1], 2);
        assert_eq!(
            output,
            "gym (2 entries)\n  with:    4.500 ± 0.500\n  without: 2.500 ± 0.500\n  change:  80.00%\n"
        );
    }

    #[test]
    fn analyze_respects_min_count_flag() {
        let journal = Journal::from_reader(EXPORT.as_bytes()).unwrap();
        let mut output = Vec::new();
        let args = AnalyzeArgs { min_count: Some(3) };
        run(&mut output, &journal, &args, &config()).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_snapshot!(
            output,
            @"No activity occurs in at least 3 entries (and is missing from others)."
        );
    }
}

//! Activities command for listing the journal's vocabulary.

use std::io::Write;

use anyhow::Result;
use mood_core::Journal;
use mood_core::stats::activity_counts;

use crate::cli::ActivitiesArgs;

pub fn run<W: Write>(writer: &mut W, journal: &Journal, args: &ActivitiesArgs) -> Result<()> {
    let vocabulary = journal.vocabulary();
    let tags = if args.people {
        vocabulary.people()
    } else {
        vocabulary.activities()
    };

    if tags.is_empty() {
        writeln!(writer, "No activities recorded.")?;
        return Ok(());
    }

    let records: Vec<_> = journal.records().iter().collect();
    let counts = activity_counts(&records);
    let width = tags.iter().map(|t| t.chars().count()).max().unwrap_or(0);
    for tag in tags {
        let count = counts.get(tag).copied().unwrap_or(0);
        writeln!(writer, "{tag:<width$}  {count:>4}")?;
    }
    Ok(())
}

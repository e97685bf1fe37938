//! Query command for listing matching journal entries.

use std::io::Write;

use anyhow::Result;
use mood_core::Journal;

use crate::cli::QueryArgs;
use crate::commands::util::format_records;

/// Runs the query command against a loaded journal.
pub fn run<W: Write>(writer: &mut W, journal: &Journal, args: &QueryArgs) -> Result<()> {
    let (condition, mut selected) = args.filters.select(journal)?;

    if let Some(condition) = &condition {
        writeln!(writer, "Condition: {condition}")?;
    }
    writeln!(
        writer,
        "Matched {} of {} entries",
        selected.len(),
        journal.len()
    )?;

    if let Some(limit) = args.limit {
        let skip = selected.len().saturating_sub(limit);
        selected.drain(..skip);
    }
    if !selected.is_empty() {
        writeln!(writer)?;
        write!(writer, "{}", format_records(&selected, args.notes))?;
    }

    Ok(())
}

//! Shared utilities for CLI commands.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use mood_core::{Journal, Record};

/// Opens and parses the journal export at `path`.
pub fn load_journal(path: &Path) -> Result<Journal> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    Journal::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to read journal {}", path.display()))
}

/// Renders records one per line, optionally followed by their notes.
pub fn format_records(records: &[&Record], notes: bool) -> String {
    let mut output = String::new();
    for record in records {
        if notes {
            output.push_str(&record.verbose());
        } else {
            output.push_str(&record.to_string());
        }
        output.push('\n');
    }
    output
}

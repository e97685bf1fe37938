//! A loaded journal: chronologically ordered records plus their vocabulary.

use std::io::BufRead;

use crate::condition::Condition;
use crate::error::Error;
use crate::matcher::RecordFilter;
use crate::record::{RawRecord, Record};
use crate::vocabulary::Vocabulary;

/// Records of one journal export.
///
/// Loading registers every activity that occurs in the journal as the
/// vocabulary, so conditions can be validated against it.
#[derive(Debug, Clone, Default)]
pub struct Journal {
    records: Vec<Record>,
    vocabulary: Vocabulary,
}

impl Journal {
    pub fn new(mut records: Vec<Record>) -> Self {
        records.sort_by_key(Record::timestamp);
        let mut vocabulary = Vocabulary::new();
        vocabulary.register(
            records
                .iter()
                .flat_map(|r| r.activities().iter().cloned()),
        );
        Self {
            records,
            vocabulary,
        }
    }

    /// Reads a JSON Lines export, one [`RawRecord`] per line.
    ///
    /// Blank lines are skipped. Errors carry the 1-based line number.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut records = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let invalid = |message: String| Error::InvalidLine {
                line: line_no,
                message,
            };
            let line = line.map_err(|e| invalid(e.to_string()))?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let raw: RawRecord =
                serde_json::from_str(trimmed).map_err(|e| invalid(e.to_string()))?;
            let record = Record::from_row(&raw).map_err(|e| invalid(e.to_string()))?;
            records.push(record);
        }
        let journal = Self::new(records);
        tracing::debug!(
            records = journal.records.len(),
            activities = journal.vocabulary.activities().len(),
            "loaded journal"
        );
        Ok(journal)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub const fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records satisfying `condition`.
    pub fn select(&self, condition: &Condition) -> Vec<&Record> {
        let selected: Vec<&Record> = self
            .records
            .iter()
            .filter(|record| condition.check(record))
            .collect();
        tracing::debug!(condition = %condition, selected = selected.len(), "evaluated condition");
        selected
    }

    /// Records accepted by `filter`.
    pub fn filter(&self, filter: &RecordFilter<'_>) -> Result<Vec<&Record>, Error> {
        filter.apply(&self.records)
    }
}

//! Journal records.

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::mood::Mood;

/// Format of the combined `date` + `time` fields in exported rows.
pub const TIMESTAMP_FORMAT_READ: &str = "%Y-%m-%d %H:%M";

/// Format used when printing a record.
pub const TIMESTAMP_FORMAT_SHOW: &str = "%d.%m.%Y %H:%M";

/// Separator between activities in an exported row.
const ACTIVITY_SEPARATOR: &str = " | ";

/// Line-break marker used by the exporter inside notes.
const LINE_BREAK_MARKER: &str = "<br>";

/// A row as exported by the journaling app, one string per field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Calendar date, `YYYY-MM-DD`.
    #[serde(alias = "full_date")]
    pub date: String,
    /// Time of day, `HH:MM`.
    pub time: String,
    /// Mood level name.
    pub mood: String,
    /// Activities joined with `" | "`; empty when there are none.
    #[serde(default)]
    pub activities: String,
    /// Free text with `<br>` line breaks.
    #[serde(default)]
    pub note: String,
}

/// One journal entry.
///
/// Records are value objects: every field is fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    timestamp: NaiveDateTime,
    mood: Mood,
    activities: BTreeSet<String>,
    note: String,
}

impl Record {
    pub fn new<I, S>(
        timestamp: NaiveDateTime,
        mood: Mood,
        activities: I,
        note: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            timestamp,
            mood,
            activities: activities.into_iter().map(Into::into).collect(),
            note: note.into(),
        }
    }

    /// Builds a record from an exported row.
    pub fn from_row(row: &RawRecord) -> Result<Self, Error> {
        let datetime = format!("{} {}", row.date.trim(), row.time.trim());
        let timestamp = NaiveDateTime::parse_from_str(&datetime, TIMESTAMP_FORMAT_READ)
            .map_err(|_| Error::InvalidTimestamp(datetime.clone()))?;
        let mood = row.mood.trim().parse()?;
        let activities: Vec<&str> = if row.activities.is_empty() {
            Vec::new()
        } else {
            row.activities.split(ACTIVITY_SEPARATOR).collect()
        };
        let note = row.note.replace(LINE_BREAK_MARKER, "\n");
        Ok(Self::new(timestamp, mood, activities, note))
    }

    pub const fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub const fn mood(&self) -> Mood {
        self.mood
    }

    /// Numeric mood score.
    pub const fn score(&self) -> f64 {
        self.mood.score()
    }

    pub const fn activities(&self) -> &BTreeSet<String> {
        &self.activities
    }

    pub fn has(&self, activity: &str) -> bool {
        self.activities.contains(activity)
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    /// The record line followed by the note in braces.
    pub fn verbose(&self) -> String {
        format!("{self}\n{{{}}}", self.note)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let activities: Vec<&str> = self.activities.iter().map(String::as_str).collect();
        write!(
            f,
            "[{}] {:.1} {}",
            self.timestamp.format(TIMESTAMP_FORMAT_SHOW),
            self.score(),
            activities.join(", ")
        )
    }
}

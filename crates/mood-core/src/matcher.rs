//! Ad-hoc record filter for simple queries that don't need a condition tree.
//!
//! Every parameter takes one value or many; both forms mean a set.

use std::collections::BTreeSet;
use std::fmt;

use regex::Regex;

use crate::error::Error;
use crate::record::Record;

/// A single value or a collection of values.
#[derive(Debug, Clone, PartialEq)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        match self {
            Self::One(value) => std::slice::from_ref(value).iter(),
            Self::Many(values) => values.iter(),
        }
    }
}

impl From<&str> for OneOrMany<String> {
    fn from(value: &str) -> Self {
        Self::One(value.to_string())
    }
}

impl From<Vec<String>> for OneOrMany<String> {
    fn from(values: Vec<String>) -> Self {
        Self::Many(values)
    }
}

impl<const N: usize> From<[&str; N]> for OneOrMany<String> {
    fn from(values: [&str; N]) -> Self {
        Self::Many(values.iter().map(|v| (*v).to_string()).collect())
    }
}

impl From<f64> for OneOrMany<f64> {
    fn from(value: f64) -> Self {
        Self::One(value)
    }
}

impl From<Vec<f64>> for OneOrMany<f64> {
    fn from(values: Vec<f64>) -> Self {
        Self::Many(values)
    }
}

impl From<Regex> for OneOrMany<Regex> {
    fn from(pattern: Regex) -> Self {
        Self::One(pattern)
    }
}

impl From<Vec<Regex>> for OneOrMany<Regex> {
    fn from(patterns: Vec<Regex>) -> Self {
        Self::Many(patterns)
    }
}

type Predicate<'a> = Box<dyn Fn(&Record) -> bool + 'a>;

/// Include/exclude/mood/note/predicate filter over records.
///
/// All configured parts are combined with AND.
#[derive(Default)]
pub struct RecordFilter<'a> {
    include: BTreeSet<String>,
    exclude: BTreeSet<String>,
    mood: Option<OneOrMany<f64>>,
    note: Option<OneOrMany<Regex>>,
    predicate: Option<Predicate<'a>>,
}

impl<'a> RecordFilter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires at least one of these activities.
    #[must_use]
    pub fn include(mut self, activities: impl Into<OneOrMany<String>>) -> Self {
        self.include.extend(activities.into().iter().cloned());
        self
    }

    /// Forbids all of these activities.
    #[must_use]
    pub fn exclude(mut self, activities: impl Into<OneOrMany<String>>) -> Self {
        self.exclude.extend(activities.into().iter().cloned());
        self
    }

    /// Requires the mood score to equal the value, or be one of the values.
    #[must_use]
    pub fn mood(mut self, mood: impl Into<OneOrMany<f64>>) -> Self {
        self.mood = Some(mood.into());
        self
    }

    /// Requires the note to match the pattern, or any one of the patterns.
    #[must_use]
    pub fn note(mut self, patterns: impl Into<OneOrMany<Regex>>) -> Self {
        self.note = Some(patterns.into());
        self
    }

    #[must_use]
    pub fn predicate(mut self, predicate: impl Fn(&Record) -> bool + 'a) -> Self {
        self.predicate = Some(Box::new(predicate));
        self
    }

    /// Evaluates the filter against a record.
    ///
    /// Fails when an activity is both included and excluded, whatever the record.
    /// The predicate runs twice: as an early exit and again in the final conjunction.
    #[expect(clippy::float_cmp, reason = "mood scores are exact level values")]
    pub fn matches(&self, record: &Record) -> Result<bool, Error> {
        let overlap: Vec<String> = self.include.intersection(&self.exclude).cloned().collect();
        if !overlap.is_empty() {
            return Err(Error::ConflictingActivities { overlap });
        }

        if let Some(predicate) = &self.predicate {
            if !predicate(record) {
                return Ok(false);
            }
        }

        let activities = record.activities();
        let included = self.include.is_empty() || !self.include.is_disjoint(activities);
        let not_excluded = self.exclude.is_disjoint(activities);
        let mood_matches = self
            .mood
            .as_ref()
            .is_none_or(|mood| mood.iter().any(|value| *value == record.score()));
        let note_matches = self
            .note
            .as_ref()
            .is_none_or(|patterns| patterns.iter().any(|re| re.is_match(record.note())));

        Ok(included
            && not_excluded
            && mood_matches
            && note_matches
            && self.predicate.as_ref().is_none_or(|predicate| predicate(record)))
    }

    /// Keeps the records that match.
    pub fn apply<'r, I>(&self, records: I) -> Result<Vec<&'r Record>, Error>
    where
        I: IntoIterator<Item = &'r Record>,
    {
        let mut matched = Vec::new();
        for record in records {
            if self.matches(record)? {
                matched.push(record);
            }
        }
        tracing::debug!(matched = matched.len(), filter = ?self, "applied record filter");
        Ok(matched)
    }
}

impl fmt::Debug for RecordFilter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordFilter")
            .field("include", &self.include)
            .field("exclude", &self.exclude)
            .field("mood", &self.mood)
            .field("note", &self.note)
            .field("predicate", &self.predicate.is_some())
            .finish()
    }
}

/// Free-function form of [`RecordFilter::matches`].
pub fn matches(record: &Record, filter: &RecordFilter<'_>) -> Result<bool, Error> {
    filter.matches(record)
}

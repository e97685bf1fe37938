//! Descriptive statistics over a set of (already filtered) records.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{NaiveDateTime, TimeDelta};
use serde::Serialize;

use crate::record::Record;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Mean and population standard deviation of a sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MeanStd {
    pub mean: f64,
    pub std: f64,
}

impl MeanStd {
    /// Returns `None` for an empty sample.
    #[expect(clippy::cast_precision_loss, reason = "sample sizes are small")]
    pub fn from_values<I: IntoIterator<Item = f64>>(values: I) -> Option<Self> {
        let values: Vec<f64> = values.into_iter().collect();
        if values.is_empty() {
            return None;
        }
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        Some(Self {
            mean,
            std: variance.sqrt(),
        })
    }
}

impl fmt::Display for MeanStd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} ± {:.3}", self.mean, self.std)
    }
}

/// Mood on days with an activity versus days without it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoodWithWithout {
    pub with: MeanStd,
    pub without: MeanStd,
}

impl MoodWithWithout {
    /// Relative change of the mean mood, `(with - without) / without`.
    pub fn change(&self) -> f64 {
        (self.with.mean - self.without.mean) / self.without.mean
    }
}

impl fmt::Display for MoodWithWithout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "with:    {}", self.with)?;
        writeln!(f, "without: {}", self.without)?;
        write!(f, "change:  {:.2}%", self.change() * 100.0)
    }
}

/// Impact of one activity on mood.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityAnalysis {
    pub activity: String,
    pub mood: MoodWithWithout,
    pub occurrences: usize,
}

/// Summary of a set of records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsResult {
    pub entries: usize,
    pub mood: MeanStd,
    /// Note length in characters.
    pub note_length: MeanStd,
    /// Entries per day over the covered period; absent when it spans no time.
    pub entries_frequency: Option<f64>,
    /// Total number of activity occurrences.
    pub number_of_activities: usize,
}

impl StatsResult {
    /// Returns `None` when there are no records.
    #[expect(clippy::cast_precision_loss, reason = "counts and lengths are small")]
    pub fn compute(records: &[&Record]) -> Option<Self> {
        let mood = MeanStd::from_values(records.iter().map(|r| r.score()))?;
        let note_length =
            MeanStd::from_values(records.iter().map(|r| r.note().chars().count() as f64))?;
        let number_of_activities = records.iter().map(|r| r.activities().len()).sum();

        let first = records.iter().map(|r| r.timestamp()).min()?;
        let last = records.iter().map(|r| r.timestamp()).max()?;
        let span_days = (last - first).num_seconds() as f64 / SECONDS_PER_DAY;
        let entries_frequency = (span_days > 0.0).then(|| records.len() as f64 / span_days);

        Some(Self {
            entries: records.len(),
            mood,
            note_length,
            entries_frequency,
            number_of_activities,
        })
    }
}

impl fmt::Display for StatsResult {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "cadence is bounded by the journal's span"
    )]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Stats(")?;
        writeln!(f, "    - entries: {}", with_thousands(self.entries))?;
        writeln!(f, "    - mood: {}", self.mood)?;
        writeln!(f, "    - note length: {} symbols", self.note_length)?;
        writeln!(
            f,
            "    - number of activities: {}",
            with_thousands(self.number_of_activities)
        )?;
        if let Some(frequency) = self.entries_frequency {
            let every = TimeDelta::seconds((SECONDS_PER_DAY / frequency) as i64);
            writeln!(
                f,
                "    - entries frequency: {frequency:.3} entries per day (once every {})",
                humanize_duration(every)
            )?;
        }
        write!(f, ")")
    }
}

/// Mood with and without `activity`. `None` unless both sides are non-empty.
pub fn mood_with_without(records: &[&Record], activity: &str) -> Option<MoodWithWithout> {
    let (with, without): (Vec<&Record>, Vec<&Record>) =
        records.iter().partition(|r| r.has(activity));
    Some(MoodWithWithout {
        with: MeanStd::from_values(with.iter().map(|r| r.score()))?,
        without: MeanStd::from_values(without.iter().map(|r| r.score()))?,
    })
}

/// Analyses every activity occurring at least `min_count` times.
///
/// Sorted by relative mood change, largest first.
pub fn analyze_activities(records: &[&Record], min_count: usize) -> Vec<ActivityAnalysis> {
    let mut analyses: Vec<ActivityAnalysis> = activity_counts(records)
        .into_iter()
        .filter(|(_, count)| *count >= min_count)
        .filter_map(|(activity, occurrences)| {
            let mood = mood_with_without(records, &activity)?;
            Some(ActivityAnalysis {
                activity,
                mood,
                occurrences,
            })
        })
        .collect();
    analyses.sort_by(|a, b| b.mood.change().total_cmp(&a.mood.change()));
    analyses
}

/// Number of records carrying each activity.
pub fn activity_counts(records: &[&Record]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        for activity in record.activities() {
            *counts.entry(activity.clone()).or_insert(0) += 1;
        }
    }
    counts
}

/// Renders a duration as e.g. `"1 day 2 hours 5 minutes"`.
///
/// Years are 365 days and months 1/12 of that. Leading zero units are dropped,
/// zero units in the middle are skipped. A zero duration renders as `""`.
pub fn humanize_duration(duration: TimeDelta) -> String {
    const UNITS: [(&str, i64); 6] = [
        ("year", 31_536_000),
        ("month", 2_628_000),
        ("day", 86_400),
        ("hour", 3_600),
        ("minute", 60),
        ("second", 1),
    ];

    let mut remainder = duration.num_seconds().max(0);
    let mut parts = Vec::new();
    for (word, seconds) in UNITS {
        let value = remainder / seconds;
        remainder %= seconds;
        if value > 0 {
            let plural = if value > 1 { "s" } else { "" };
            parts.push(format!("{value} {word}{plural}"));
        }
    }
    parts.join(" ")
}

/// How long before `now` the timestamp `then` is.
pub fn time_since(then: NaiveDateTime, now: NaiveDateTime) -> String {
    let humanized = humanize_duration(now - then);
    if humanized.is_empty() {
        "just now".to_string()
    } else {
        format!("{humanized} ago")
    }
}

fn with_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

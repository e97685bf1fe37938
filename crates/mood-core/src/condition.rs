//! Boolean condition algebra over journal records.
//!
//! A [`Condition`] is an immutable expression tree. Leaves test a single
//! record attribute; `And`/`Or`/`Not` combine them. Trees are built with the
//! leaf constructors and the [`and`](Condition::and), [`or`](Condition::or)
//! and [`negate`](Condition::negate) builders:
//!
//! ```
//! use mood_core::{Condition, Vocabulary};
//!
//! let vocabulary = Vocabulary::with_activities(["gym", "Alice"]);
//! let query = Condition::has(&vocabulary, "gym")?
//!     .and(Condition::mood_interval(Some(3.0), Some(5.0)))
//!     .and(Condition::has_people(&vocabulary)?.negate());
//! assert_eq!(query.to_string(), "(gym & (3.00 <= mood < 5.00) & !PEOPLE)");
//! # Ok::<(), mood_core::Error>(())
//! ```
//!
//! # Rendering
//!
//! `Display` gives the compact human form used in CLI output. `Debug` gives
//! the fully qualified form, e.g. `And(Has(gym), MoodInterval(3.0, 5.0))`.

use std::collections::BTreeSet;
use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::Error;
use crate::record::Record;
use crate::vocabulary::Vocabulary;

/// Accepted date formats for interval bounds, tried in order.
const DATE_FORMATS: [&str; 3] = ["%d.%m.%Y", "%d %b %Y", "%d %B %Y"];

/// Format used when rendering interval bounds.
const DATE_FORMAT_SHOW: &str = "%d.%m.%Y";

/// Rendering of an absent interval bound.
const OPEN_BOUND: &str = "...";

/// A node of the condition tree.
#[derive(Clone, PartialEq)]
pub enum Condition {
    /// `start <= timestamp < end`; a missing bound is unbounded.
    DateInterval {
        start: Option<NaiveDateTime>,
        end: Option<NaiveDateTime>,
    },
    /// `low <= mood < high`.
    MoodInterval { low: f64, high: f64 },
    /// Case-insensitive substring of the note. Stored lowercase.
    NoteContains(String),
    /// The record carries this activity.
    Has(String),
    /// The record carries at least one of these people.
    HasPeople(BTreeSet<String>),
    Not(Box<Condition>),
    Or(Vec<Condition>),
    And(Vec<Condition>),
}

impl Condition {
    /// Date interval from `DD.MM.YYYY`, `DD Mon YYYY` or `DD Month YYYY` bounds.
    pub fn date_interval(start: Option<&str>, end: Option<&str>) -> Result<Self, Error> {
        let start = start.filter(|s| !s.is_empty());
        let end = end.filter(|s| !s.is_empty());
        if start.is_none() && end.is_none() {
            return Err(Error::EmptyDateInterval);
        }
        Ok(Self::DateInterval {
            start: start.map(parse_date).transpose()?,
            end: end.map(parse_date).transpose()?,
        })
    }

    /// Mood interval; missing bounds default to negative/positive infinity.
    pub const fn mood_interval(low: Option<f64>, high: Option<f64>) -> Self {
        let low = match low {
            Some(low) => low,
            None => f64::NEG_INFINITY,
        };
        let high = match high {
            Some(high) => high,
            None => f64::INFINITY,
        };
        Self::MoodInterval { low, high }
    }

    pub fn note_contains(word: &str) -> Self {
        Self::NoteContains(word.to_lowercase())
    }

    /// Presence of a registered activity.
    pub fn has(vocabulary: &Vocabulary, activity: &str) -> Result<Self, Error> {
        vocabulary.validate(activity)?;
        Ok(Self::Has(activity.to_string()))
    }

    /// Presence of any person from the vocabulary.
    pub fn has_people(vocabulary: &Vocabulary) -> Result<Self, Error> {
        vocabulary.require_registered()?;
        Ok(Self::people(vocabulary.people().iter().cloned()))
    }

    /// Presence of any of the given people, without vocabulary validation.
    pub fn people<I, S>(people: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::HasPeople(people.into_iter().map(Into::into).collect())
    }

    /// Conjunction. An `And` on the left absorbs `other` as a new child.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        match self {
            Self::And(mut children) => {
                children.push(other);
                Self::And(children)
            }
            lhs => Self::And(vec![lhs, other]),
        }
    }

    /// Disjunction. An `Or` on the left absorbs `other` as a new child.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Or(mut children) => {
                children.push(other);
                Self::Or(children)
            }
            lhs => Self::Or(vec![lhs, other]),
        }
    }

    /// Negation; always wraps.
    #[must_use]
    pub fn negate(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// Folds conditions with [`and`](Self::and). `None` when empty.
    pub fn all<I: IntoIterator<Item = Self>>(conditions: I) -> Option<Self> {
        conditions.into_iter().reduce(Self::and)
    }

    /// Folds conditions with [`or`](Self::or). `None` when empty.
    pub fn any<I: IntoIterator<Item = Self>>(conditions: I) -> Option<Self> {
        conditions.into_iter().reduce(Self::or)
    }

    /// Direct children of a combinator; empty for leaves.
    pub fn children(&self) -> &[Self] {
        match self {
            Self::And(children) | Self::Or(children) => children,
            Self::Not(child) => std::slice::from_ref(child.as_ref()),
            _ => &[],
        }
    }

    /// Evaluates the condition against a record.
    pub fn check(&self, record: &Record) -> bool {
        match self {
            Self::DateInterval { start, end } => {
                let timestamp = record.timestamp();
                start.is_none_or(|start| start <= timestamp)
                    && end.is_none_or(|end| timestamp < end)
            }
            Self::MoodInterval { low, high } => {
                let score = record.score();
                *low <= score && score < *high
            }
            Self::NoteContains(word) => record.note().to_lowercase().contains(word.as_str()),
            Self::Has(activity) => record.has(activity),
            Self::HasPeople(people) => !record.activities().is_disjoint(people),
            Self::Not(child) => !child.check(record),
            Self::Or(children) => children.iter().any(|child| child.check(record)),
            Self::And(children) => children.iter().all(|child| child.check(record)),
        }
    }
}

fn parse_date(date: &str) -> Result<NaiveDateTime, Error> {
    let date = date.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(date, format).ok())
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .ok_or_else(|| Error::DateParse(date.to_string()))
}

fn format_bound(bound: Option<&NaiveDateTime>) -> String {
    bound.map_or_else(String::new, |b| b.format(DATE_FORMAT_SHOW).to_string())
}

fn format_mood_bound(bound: f64) -> String {
    if bound.is_infinite() {
        OPEN_BOUND.to_string()
    } else {
        format!("{bound:.2}")
    }
}

fn join<T, F>(items: &[T], separator: &str, render: F) -> String
where
    F: Fn(&T) -> String,
{
    items.iter().map(render).collect::<Vec<_>>().join(separator)
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DateInterval { start, end } => write!(
                f,
                "({}{OPEN_BOUND}{})",
                format_bound(start.as_ref()),
                format_bound(end.as_ref())
            ),
            Self::MoodInterval { low, high } => write!(
                f,
                "({} <= mood < {})",
                format_mood_bound(*low),
                format_mood_bound(*high)
            ),
            Self::NoteContains(word) => write!(f, "(note with '{word}')"),
            Self::Has(activity) => write!(f, "{activity}"),
            Self::HasPeople(_) => write!(f, "PEOPLE"),
            Self::Not(child) => write!(f, "!{child}"),
            Self::Or(children) => write!(f, "({})", join(children, " | ", ToString::to_string)),
            Self::And(children) => write!(f, "({})", join(children, " & ", ToString::to_string)),
        }
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DateInterval { start, end } => {
                let render = |bound: Option<&NaiveDateTime>| {
                    bound.map_or_else(
                        || OPEN_BOUND.to_string(),
                        |b| b.format(DATE_FORMAT_SHOW).to_string(),
                    )
                };
                write!(
                    f,
                    "DateInterval({}, {})",
                    render(start.as_ref()),
                    render(end.as_ref())
                )
            }
            Self::MoodInterval { low, high } => write!(f, "MoodInterval({low:?}, {high:?})"),
            Self::NoteContains(word) => write!(f, "NoteContains({word})"),
            Self::Has(activity) => write!(f, "Has({activity})"),
            Self::HasPeople(_) => write!(f, "Has(PEOPLE)"),
            Self::Not(child) => write!(f, "Not({child:?})"),
            Self::Or(children) => {
                write!(f, "Or({})", join(children, ", ", |c| format!("{c:?}")))
            }
            Self::And(children) => {
                write!(f, "And({})", join(children, ", ", |c| format!("{c:?}")))
            }
        }
    }
}

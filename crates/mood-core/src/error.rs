//! Error type shared by record construction, conditions and the matcher.

use std::fmt;

use thiserror::Error;

/// Broad category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Something was used before it was set up (e.g. an empty vocabulary).
    Configuration,
    /// A value is well-formed but not acceptable.
    Validation,
    /// A string could not be parsed.
    Parse,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Configuration => "configuration",
            Self::Validation => "validation",
            Self::Parse => "parse",
        };
        write!(f, "{s}")
    }
}

/// Errors raised while loading records or building and evaluating queries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A vocabulary-dependent condition was built before any activity was registered.
    #[error("no activities are registered; register the journal's activities first")]
    VocabularyNotRegistered,

    /// The activity is not part of the registered vocabulary.
    #[error("unknown activity: {activity:?}.{}", suggestion_suffix(.suggestion.as_deref()))]
    UnknownActivity {
        activity: String,
        suggestion: Option<String>,
    },

    /// The same activity was both required and forbidden.
    #[error("activities are included and excluded at the same time: {}", .overlap.join(", "))]
    ConflictingActivities { overlap: Vec<String> },

    /// The mood name is not one of the known levels.
    #[error("unknown mood: {0:?} (expected one of awful, bad, meh, good, rad)")]
    UnknownMood(String),

    /// A date interval was requested without any bound.
    #[error("at least one bound of a date interval must be given")]
    EmptyDateInterval,

    /// None of the accepted date formats matched.
    #[error("could not parse date: {0:?} (expected DD.MM.YYYY, DD Mon YYYY or DD Month YYYY)")]
    DateParse(String),

    /// The date/time fields of a row could not be combined into a timestamp.
    #[error("invalid timestamp: {0:?}")]
    InvalidTimestamp(String),

    /// A journal line could not be turned into a record.
    #[error("invalid journal line {line}: {message}")]
    InvalidLine { line: usize, message: String },
}

impl Error {
    /// Returns the category this error belongs to.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::VocabularyNotRegistered => ErrorKind::Configuration,
            Self::UnknownActivity { .. }
            | Self::ConflictingActivities { .. }
            | Self::UnknownMood(_)
            | Self::EmptyDateInterval => ErrorKind::Validation,
            Self::DateParse(_) | Self::InvalidTimestamp(_) | Self::InvalidLine { .. } => {
                ErrorKind::Parse
            }
        }
    }
}

fn suggestion_suffix(suggestion: Option<&str>) -> String {
    suggestion.map_or_else(String::new, |s| format!(" Did you mean {s:?}?"))
}

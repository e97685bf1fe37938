//! Core domain logic for the mood journal.
//!
//! This crate contains the fundamental types and logic for:
//! - Records: journal entries with a timestamp, mood, activities and a note
//! - Conditions: a boolean query algebra evaluated against records
//! - Matching: an ad-hoc include/exclude/mood/note filter
//! - Statistics: mood, note length and cadence summaries of matching records

pub mod condition;
mod error;
pub mod journal;
pub mod matcher;
pub mod mood;
pub mod record;
pub mod stats;
pub mod vocabulary;

pub use condition::Condition;
pub use error::{Error, ErrorKind};
pub use journal::Journal;
pub use matcher::{OneOrMany, RecordFilter, matches};
pub use mood::Mood;
pub use record::{RawRecord, Record};
pub use stats::{
    ActivityAnalysis, MeanStd, MoodWithWithout, StatsResult, analyze_activities, humanize_duration,
    mood_with_without, time_since,
};
pub use vocabulary::Vocabulary;

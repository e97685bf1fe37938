//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Mood journal query tool.
///
/// Filters journal entries with composable conditions and summarizes how
/// mood relates to activities.
#[derive(Debug, Parser)]
#[command(name = "mood", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Journal export to read (JSON Lines). Overrides the configured path.
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List entries matching the filters.
    Query(QueryArgs),

    /// Summarize entries matching the filters.
    Stats(StatsArgs),

    /// List registered activities with their number of entries.
    Activities(ActivitiesArgs),

    /// Compare mood with and without each activity.
    Analyze(AnalyzeArgs),
}

/// Filters shared by `query` and `stats`.
///
/// Condition flags are combined with AND into a condition tree; the
/// include/exclude/mood/regex flags feed the simple record filter. An entry
/// must pass both.
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Start date (inclusive), e.g. 01.01.2023, "1 Jan 2023" or "1 January 2023".
    #[arg(long)]
    pub from: Option<String>,

    /// End date (exclusive).
    #[arg(long)]
    pub to: Option<String>,

    /// Lowest mood score (inclusive).
    #[arg(long)]
    pub mood_min: Option<f64>,

    /// Highest mood score (exclusive).
    #[arg(long)]
    pub mood_max: Option<f64>,

    /// Entry has this activity; repeat to accept any of several.
    #[arg(long = "has", value_name = "ACTIVITY")]
    pub has: Vec<String>,

    /// Entry does not have this activity; repeatable.
    #[arg(long = "not-has", value_name = "ACTIVITY")]
    pub not_has: Vec<String>,

    /// Note contains this word (case-insensitive).
    #[arg(long)]
    pub note: Option<String>,

    /// Entry mentions at least one person.
    #[arg(long)]
    pub people: bool,

    /// Entry has at least one of these activities; repeatable.
    #[arg(long, value_name = "ACTIVITY")]
    pub include: Vec<String>,

    /// Entry has none of these activities; repeatable.
    #[arg(long, value_name = "ACTIVITY")]
    pub exclude: Vec<String>,

    /// Exact mood score; repeat to accept several.
    #[arg(long = "mood", value_name = "SCORE")]
    pub mood: Vec<f64>,

    /// Note matches this regular expression; repeat to accept any of several.
    #[arg(long = "note-regex", value_name = "PATTERN")]
    pub note_regex: Vec<String>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct QueryArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Print each entry's note below it.
    #[arg(long)]
    pub notes: bool,

    /// Show at most this many entries (most recent last).
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct StatsArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Default, Args)]
pub struct ActivitiesArgs {
    /// Only list people.
    #[arg(long)]
    pub people: bool,
}

#[derive(Debug, Clone, Default, Args)]
pub struct AnalyzeArgs {
    /// Skip activities with fewer entries than this. Defaults to the configured value.
    #[arg(long)]
    pub min_count: Option<usize>,
}

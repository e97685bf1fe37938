//! Mood journal CLI library.
//!
//! This crate provides the CLI interface for querying a mood journal.

mod cli;
pub mod commands;
mod config;

pub use cli::{ActivitiesArgs, AnalyzeArgs, Cli, Commands, FilterArgs, QueryArgs, StatsArgs};
pub use config::Config;

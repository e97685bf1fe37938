//! CLI subcommand implementations.

pub mod activities;
pub mod analyze;
mod filter;
pub mod query;
pub mod stats;
pub mod util;

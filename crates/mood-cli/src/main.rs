use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mood_cli::commands::{activities, analyze, query, stats, util};
use mood_cli::{Cli, Commands, Config};

/// Load config and the journal it points at (or the `--file` override).
fn open_journal(
    config_path: Option<&Path>,
    file: Option<&Path>,
) -> Result<(mood_core::Journal, Config)> {
    let mut config = Config::load_from(config_path).context("failed to load configuration")?;
    if let Some(file) = file {
        config.journal_path = file.to_path_buf();
    }
    tracing::debug!(?config, "loaded configuration");

    let journal = util::load_journal(&config.journal_path)?;
    Ok((journal, config))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let Some(command) = &cli.command else {
        // No subcommand, show help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let (journal, config) = open_journal(cli.config.as_deref(), cli.file.as_deref())?;
    let mut stdout = io::stdout().lock();

    match command {
        Commands::Query(args) => query::run(&mut stdout, &journal, args)?,
        Commands::Stats(args) => stats::run(&mut stdout, &journal, args)?,
        Commands::Activities(args) => activities::run(&mut stdout, &journal, args)?,
        Commands::Analyze(args) => analyze::run(&mut stdout, &journal, args, &config)?,
    }

    Ok(())
}

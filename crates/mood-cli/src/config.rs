//! Layered settings for the `mood` binary.
//!
//! Later layers win: built-in defaults, the user's `config.toml`, the file
//! passed with `--config`, then `MOOD_*` environment variables.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// File name of the journal export inside the data directory.
const JOURNAL_FILE: &str = "journal.jsonl";

/// Prefix of the environment variables that override settings.
const ENV_PREFIX: &str = "MOOD_";

const DEFAULT_ANALYZE_MIN_COUNT: usize = 5;

/// Settings shared by every subcommand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the journal export (JSON Lines).
    pub journal_path: PathBuf,
    /// Minimum number of entries for an activity to appear in `mood analyze`.
    pub analyze_min_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs_data_path().unwrap_or_else(|| PathBuf::from("."));
        Self {
            journal_path: data_dir.join(JOURNAL_FILE),
            analyze_min_count: DEFAULT_ANALYZE_MIN_COUNT,
        }
    }
}

impl Config {
    /// Resolves the settings, with `config_path` layered over the user's file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let user_file = dirs_config_path().map(|dir| dir.join("config.toml"));
        let figment = [user_file.as_deref(), config_path]
            .into_iter()
            .flatten()
            .fold(
                Figment::from(Serialized::defaults(Self::default())),
                |figment, file| figment.merge(Toml::file(file)),
            )
            .merge(Env::prefixed(ENV_PREFIX));

        figment.extract()
    }
}

/// `mood` directory under the platform config dir (`~/.config/mood` on Linux).
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("mood"))
}

/// `mood` directory under the platform data dir (`~/.local/share/mood` on Linux).
pub fn dirs_data_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("mood"))
}

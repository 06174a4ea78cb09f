//! Tally configuration.
//!
//! Loaded from `~/.tally/config.toml`. Every field is optional and a
//! missing file means defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Tally configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Tracing filter used when `RUST_LOG` is unset (e.g. `"debug"`).
    pub log_filter: String,

    /// Where the TUI writes its log.
    /// Defaults to `~/.tally/tally.log`.
    pub log_file: Option<PathBuf>,

    /// Start the TUI on the history view instead of the keypad.
    pub open_history: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            log_file: None,
            open_history: false,
        }
    }
}

impl Config {
    /// Load config from `~/.tally/config.toml`, or defaults if there is none.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from an explicit path. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The config file path: `~/.tally/config.toml`.
    pub fn path() -> Option<PathBuf> {
        Self::home().map(|h| h.join("config.toml"))
    }

    /// The log file for the TUI, falling back to `~/.tally/tally.log`.
    pub fn log_file(&self) -> Option<PathBuf> {
        self.log_file
            .clone()
            .or_else(|| Self::home().map(|h| h.join("tally.log")))
    }

    fn home() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".tally"))
    }
}

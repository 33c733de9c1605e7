//! # Configuration
//!
//! Settings resolve in order: defaults → config file → CLI flags.
//!
//! The config file lives at `~/.puz-reader/config.toml`. Every field is
//! optional, so a sparse file only overrides what it names.
//!
//! ```toml
//! [general]
//! log_level = "info"
//! start_direction = "down"
//!
//! [state]
//! autosave = true
//! dir = "/home/me/.local/share/puz-reader/state"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::{LevelFilter, debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::puz::persist::SnapshotStore;
use crate::puz::types::models::Direction;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PuzConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub state: StateConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
    pub start_direction: Option<Direction>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StateConfig {
    pub autosave: Option<bool>,
    pub dir: Option<PathBuf>,
}

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

/// Concrete settings after every layer has been applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub log_level: LevelFilter,
    pub start_direction: Direction,
    pub autosave: bool,
    /// `None` when neither the config nor the platform names a directory.
    pub state_dir: Option<PathBuf>,
}

/// Values given on the command line. `None` leaves the lower layer alone.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub log_level: Option<LevelFilter>,
    pub start_direction: Option<Direction>,
    pub autosave: Option<bool>,
    pub state_dir: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Returns the path to `~/.puz-reader/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".puz-reader").join("config.toml"))
}

impl PuzConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);
        Ok(config)
    }

    /// Load from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Apply CLI overrides on top of this file's values and the defaults.
    pub fn resolve(&self, cli: &CliOverrides) -> ResolvedConfig {
        let file_level = self
            .general
            .log_level
            .as_deref()
            .and_then(|s| s.parse::<LevelFilter>().ok());
        ResolvedConfig {
            log_level: cli.log_level.or(file_level).unwrap_or(DEFAULT_LOG_LEVEL),
            start_direction: cli
                .start_direction
                .or(self.general.start_direction)
                .filter(|d| *d != Direction::Unknown)
                .unwrap_or(Direction::Across),
            autosave: cli.autosave.or(self.state.autosave).unwrap_or(false),
            state_dir: cli
                .state_dir
                .clone()
                .or_else(|| self.state.dir.clone())
                .or_else(|| SnapshotStore::default_location().map(|s| s.dir().to_path_buf())),
        }
    }
}

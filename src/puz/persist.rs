//! # Solver State Persistence
//!
//! Save/load solving progress as JSON, one file per puzzle source.
//!
//! Files live under a store directory (by default the platform's local data
//! directory, `puz-reader/state/`). The file name is the source identifier
//! with every character outside `[A-Za-z0-9._-]` replaced by `_`.
//!
//! All writes use atomic rename (write `.tmp`, then `rename()`).

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::types::error::Result;
use super::types::models::{Direction, Position};

/// Everything needed to resume a solving session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub cursor_x: usize,
    pub cursor_y: usize,
    /// One cell code per square, row-major.
    pub grid: String,
    pub zoom: u8,
    pub direction: Direction,
    pub reveal_solution: bool,
    pub highlight_word_nbr: u16,
    pub highlight_extent: Vec<Position>,
    pub last_click: Option<Position>,
}

/// Directory of snapshots keyed by puzzle source identifier.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The platform default location, if a data directory can be found.
    pub fn default_location() -> Option<Self> {
        dirs::data_local_dir().map(|d| Self::new(d.join("puz-reader").join("state")))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the snapshot file for `source_id`.
    pub fn path_for(&self, source_id: &str) -> PathBuf {
        let name: String = source_id
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') { c } else { '_' })
            .collect();
        self.dir.join(format!("{}.json", name))
    }

    /// Write `snapshot` for `source_id`, replacing any previous one.
    pub fn save(&self, source_id: &str, snapshot: &Snapshot) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(source_id);
        let tmp_path = path.with_extension("tmp");
        let json = serde_json::to_string_pretty(snapshot)?;
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &path)?;
        info!("Saved solver state for {} to {}", source_id, path.display());
        Ok(())
    }

    /// Load the snapshot for `source_id`, or `None` if there is none.
    pub fn load(&self, source_id: &str) -> Result<Option<Snapshot>> {
        let path = self.path_for(source_id);
        if !path.exists() {
            debug!("No saved state at {}", path.display());
            return Ok(None);
        }
        let json = fs::read_to_string(&path)?;
        let snapshot = serde_json::from_str(&json)?;
        debug!("Loaded solver state from {}", path.display());
        Ok(Some(snapshot))
    }

    /// Delete the snapshot for `source_id`. Missing files are not an error.
    pub fn remove(&self, source_id: &str) -> Result<()> {
        let path = self.path_for(source_id);
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }
}

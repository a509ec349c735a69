use crate::error::{BoardError, Result};
use crate::types::score::Leaderboard;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedBoard {
    pub version: String,
    pub saved_at: DateTime<Utc>,
    pub leaderboard: Leaderboard,
}

/// Single-slot store for the most recent successful leaderboard.
pub struct ResultCache {
    path: PathBuf,
}

impl ResultCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Best effort: a failed write is logged, never surfaced.
    pub fn store(&self, leaderboard: &Leaderboard) {
        if let Err(err) = self.try_store(leaderboard) {
            tracing::warn!(path = %self.path.display(), "could not write cache: {err}");
        }
    }

    fn try_store(&self, leaderboard: &Leaderboard) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(BoardError::Io)?;
        }
        let entry = CachedBoard {
            version: env!("CARGO_PKG_VERSION").to_string(),
            saved_at: Utc::now(),
            leaderboard: leaderboard.clone(),
        };
        let json = serde_json::to_string_pretty(&entry)?;
        fs::write(&self.path, json).map_err(BoardError::Io)?;
        tracing::debug!(path = %self.path.display(), "cache written");
        Ok(())
    }

    /// `None` when the slot is empty or unreadable.
    pub fn load(&self) -> Option<CachedBoard> {
        let content = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&content) {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), "ignoring corrupt cache: {err}");
                None
            }
        }
    }

    /// Returns whether a cache file was removed.
    pub fn clear(&self) -> Result<bool> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(BoardError::Io(err)),
        }
    }
}

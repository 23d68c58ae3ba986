//! Append-only command history persistence.
//!
//! One executed composite command per line. The log is created on first
//! append (including its containing directory), grows monotonically and is
//! never pruned or rewritten; deduplication only happens in the browsing
//! view returned by [`HistoryStore::browse`].

use std::fs;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use itertools::Itertools;
use log::debug;

use crate::config::HISTORY_FILE_NAME;
use crate::error::{Error, Result};

pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    #[must_use]
    pub fn new(state_dir: &Path) -> Self {
        Self {
            path: state_dir.join(HISTORY_FILE_NAME),
        }
    }

    /// Appends a command to the history log, creating the log and its
    /// directory if they do not exist yet. Prior content is never touched.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be created or
    /// written to.
    pub fn append(&self, command: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::io_error("history".to_string(), parent.display().to_string(), e)
            })?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                Error::io_error("history".to_string(), self.path.display().to_string(), e)
            })?;

        writeln!(file, "{command}").map_err(|e| {
            Error::io_error("history".to_string(), self.path.display().to_string(), e)
        })?;

        debug!("Appended to history: `{command}`");
        Ok(())
    }

    /// Reads the full history, oldest first. A missing log is an empty
    /// history, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the log exists but cannot be read.
    pub fn read_all(&self) -> Result<Vec<String>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path).map_err(|e| {
            Error::io_error("history".to_string(), self.path.display().to_string(), e)
        })?;

        let trimmed = contents.trim();
        if trimmed.is_empty() {
            return Ok(Vec::new());
        }

        Ok(trimmed.lines().map(ToString::to_string).collect())
    }

    /// The most recently appended command, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the log exists but cannot be read.
    pub fn most_recent(&self) -> Result<Option<String>> {
        Ok(self.read_all()?.pop())
    }

    /// History entries for interactive browsing: most recent first, with
    /// repeated commands collapsed to their most recent occurrence. The
    /// underlying log is left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the log exists but cannot be read.
    pub fn browse(&self) -> Result<Vec<String>> {
        Ok(self.read_all()?.into_iter().rev().unique().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> HistoryStore {
        HistoryStore::new(&dir.path().join("wsr"))
    }

    #[test]
    fn test_append_then_read_all_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.append("yarn workspace api build").unwrap();
        store.append("yarn workspace web test").unwrap();

        let all = store.read_all().unwrap();
        assert_eq!(
            all,
            vec!["yarn workspace api build", "yarn workspace web test"]
        );
    }

    #[test]
    fn test_append_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("deep").join("wsr");
        let store = HistoryStore::new(&nested);

        store.append("yarn workspace api build").unwrap();
        assert!(nested.join(HISTORY_FILE_NAME).exists());
    }

    #[test]
    fn test_read_all_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert!(store.read_all().unwrap().is_empty());
        assert!(store.most_recent().unwrap().is_none());
        assert!(store.browse().unwrap().is_empty());
    }

    #[test]
    fn test_read_all_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.append("yarn workspace api build").unwrap();

        let first = store.read_all().unwrap();
        let second = store.read_all().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_most_recent_is_last_appended() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.append("yarn workspace api build").unwrap();
        store.append("yarn workspace api test").unwrap();

        assert_eq!(
            store.most_recent().unwrap(),
            Some("yarn workspace api test".to_string())
        );
    }

    #[test]
    fn test_browse_deduplicates_most_recent_first() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.append("yarn workspace api build").unwrap();
        store.append("yarn workspace web test").unwrap();
        store.append("yarn workspace api build").unwrap();

        let browsed = store.browse().unwrap();
        assert_eq!(
            browsed,
            vec!["yarn workspace api build", "yarn workspace web test"]
        );

        // The log itself keeps the duplicates
        assert_eq!(store.read_all().unwrap().len(), 3);
    }
}

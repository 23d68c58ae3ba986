//! Single-value last-command / last-workspace state files.
//!
//! Unlike the history log these are overwritten on every successful
//! composition; each file holds exactly one value. A missing file reads
//! back as `None`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{LAST_COMMAND_FILE_NAME, LAST_WORKSPACE_FILE_NAME};
use crate::error::{Error, Result};

pub struct StateStore {
    state_dir: PathBuf,
}

impl StateStore {
    #[must_use]
    pub fn new(state_dir: &Path) -> Self {
        Self {
            state_dir: state_dir.to_path_buf(),
        }
    }

    /// The last composed command, verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn last_command(&self) -> Result<Option<String>> {
        self.read_value(LAST_COMMAND_FILE_NAME)
    }

    /// The last resolved workspace name.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn last_workspace(&self) -> Result<Option<String>> {
        self.read_value(LAST_WORKSPACE_FILE_NAME)
    }

    /// # Errors
    ///
    /// Returns an error if the state directory or file cannot be written.
    pub fn write_last_command(&self, command: &str) -> Result<()> {
        self.write_value(LAST_COMMAND_FILE_NAME, command)
    }

    /// # Errors
    ///
    /// Returns an error if the state directory or file cannot be written.
    pub fn write_last_workspace(&self, workspace: &str) -> Result<()> {
        self.write_value(LAST_WORKSPACE_FILE_NAME, workspace)
    }

    fn read_value(&self, file_name: &str) -> Result<Option<String>> {
        let path = self.state_dir.join(file_name);
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&path)
            .map_err(|e| Error::io_error(file_name.to_string(), path.display().to_string(), e))?;

        let trimmed = contents.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        Ok(Some(trimmed.to_string()))
    }

    fn write_value(&self, file_name: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.state_dir).map_err(|e| {
            Error::io_error(
                file_name.to_string(),
                self.state_dir.display().to_string(),
                e,
            )
        })?;

        let path = self.state_dir.join(file_name);
        fs::write(&path, format!("{value}\n"))
            .map_err(|e| Error::io_error(file_name.to_string(), path.display().to_string(), e))
    }
}

//! Configuration constants and path policy for wsr.
//!
//! This module decides where per-project state (command history, last
//! command, last workspace) lives, and holds the constants naming the
//! external package manager and the state files.

use std::path::{Path, PathBuf};

use log::debug;

/// The package manager the tool wraps
pub const PACKAGE_MANAGER: &str = "yarn";

/// Default shell to use for command execution
pub const DEFAULT_SHELL: &str = "/bin/bash";

/// First editor marker directory, also the no-marker default
const FIRST_MARKER: &str = ".vscode";
/// Second editor marker directory
const SECOND_MARKER: &str = ".idea";
/// Subdirectory inside the marker directory holding wsr's state
const STATE_SUBDIR: &str = "wsr";

/// File name of the append-only command history log
pub const HISTORY_FILE_NAME: &str = "command-history.txt";
/// File name storing the last composed command verbatim
pub const LAST_COMMAND_FILE_NAME: &str = "last-command.txt";
/// File name storing the last resolved workspace name
pub const LAST_WORKSPACE_FILE_NAME: &str = "last-workspace.txt";

/// Resolves the state directory for the current invocation.
///
/// If a custom directory is provided, uses that directory with shell
/// expansions like `~` resolved. Otherwise applies the marker-directory
/// policy of [`state_dir_for`] to the current working directory.
pub fn get_state_dir(state_dir_arg: &Option<String>) -> PathBuf {
    match state_dir_arg {
        Some(state_dir) => PathBuf::from(shellexpand::tilde(state_dir).to_string()),
        None => state_dir_for(Path::new(".")),
    }
}

/// Chooses the state directory under a project root.
///
/// Prefers `.vscode/wsr` when `.vscode` exists, else `.idea/wsr` when
/// `.idea` exists. When neither marker exists, `.vscode/wsr` is still the
/// deterministic default; the directory is created on first write.
pub fn state_dir_for(project_root: &Path) -> PathBuf {
    let marker = if project_root.join(FIRST_MARKER).is_dir() {
        FIRST_MARKER
    } else if project_root.join(SECOND_MARKER).is_dir() {
        SECOND_MARKER
    } else {
        FIRST_MARKER
    };

    let state_dir = project_root.join(marker).join(STATE_SUBDIR);
    debug!("State directory: `{}`", state_dir.display());
    state_dir
}

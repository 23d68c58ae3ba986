//! Command-line argument parsing and validation.
//!
//! This module defines the command-line interface structure using the
//! `clap` crate.

use clap::Parser;

/// Command-line arguments for the wsr CLI tool.
///
/// This structure defines all available command-line options and arguments
/// that can be passed to the `wsr` binary. It supports direct invocation,
/// interactive selection and several replay modes.
#[derive(Parser, Debug)]
#[command(version, disable_version_flag = true, term_width = 0)] // term_width just to make testing across clap features easier
#[allow(clippy::struct_excessive_bools)] // silence clippy's warning on this struct
pub struct Args {
    /// The name of the workspace.
    ///
    /// Matched fuzzily against the workspace catalog. When the repository
    /// has exactly one workspace this is treated as the start of the
    /// command instead.
    #[arg(num_args(1))]
    pub workspace_name: Option<String>,

    /// The command to run in the workspace.
    ///
    /// When omitted, the workspace's declared scripts are offered
    /// interactively, with `run` for a free-form command.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,

    /// Replay the last composed command verbatim.
    #[arg(long, short = 'l', action)]
    pub last_command: bool,

    /// Re-run the most recent command history entry.
    #[arg(long, short = 'r', action)]
    pub re_run: bool,

    /// Reuse the previously selected workspace and only ask for the command.
    #[arg(long, short = 'w', action)]
    pub reuse_workspace: bool,

    /// Pick a command to re-run from the deduplicated history.
    #[arg(long, short = 'c', action)]
    pub command_history: bool,

    /// Directory for the history and last-command state files.
    ///
    /// If not provided, `.vscode/wsr` in the current directory is used, or
    /// `.idea/wsr` when only an `.idea` marker directory exists.
    #[arg(long)]
    pub state_dir: Option<String>,

    /// Output the current version.
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    version: Option<bool>,
}

impl Args {
    /// Whether any history/state replay short-circuit was requested.
    #[must_use]
    pub fn replay_requested(&self) -> bool {
        self.last_command || self.re_run || self.command_history
    }
}

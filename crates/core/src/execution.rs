use std::env;
use std::process::{Command, Stdio};

use log::info;

use crate::config::DEFAULT_SHELL;
use crate::error::{Error, Result};

/// Runs a composite command through the user's shell.
///
/// # Errors
///
/// Returns an error if the shell cannot be spawned or the child exits with
/// a non-success status; the child's exit code is carried so callers can
/// mirror it.
pub fn execute_composite(composite: &str) -> Result<()> {
    let shell = env::var("SHELL").unwrap_or_else(|_| DEFAULT_SHELL.to_string());
    info!("Executing `{composite}` via `{shell}`");

    let mut command = Command::new(shell);
    command.args(["-c", composite]);

    execute_command(command)
}

/// Executes a command with standard streams inherited from the parent, so
/// interactive sub-programs work transparently. Blocks until the child
/// exits.
///
/// # Errors
///
/// Returns an error if command execution fails or exits with non-zero
/// status.
pub fn execute_command(mut command: Command) -> Result<()> {
    let status = command
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()?
        .wait()?;

    if status.success() {
        Ok(())
    } else {
        Err(Error::SubProcessExit(status.code()))
    }
}

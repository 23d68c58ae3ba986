//! Composite command assembly.

use crate::config::PACKAGE_MANAGER;

/// Assembles the composite command from a resolved workspace name and a
/// resolved script or free-form command.
#[must_use]
pub fn compose(workspace_name: &str, command: &str) -> String {
    format!("{PACKAGE_MANAGER} workspace {workspace_name} {command}")
}

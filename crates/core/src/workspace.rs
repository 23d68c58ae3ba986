//! Workspace catalog loading.
//!
//! Invokes the package manager's workspace-listing command and parses its
//! newline-delimited JSON output into an ordered name → location mapping.
//! The record describing the repository root itself is excluded.

use std::process::Command;

use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;

use crate::config::PACKAGE_MANAGER;
use crate::error::{Error, Result};

/// Location of the repository root in the workspace listing
const ROOT_LOCATION: &str = ".";

/// A single workspace record from the package manager's listing.
#[derive(Deserialize, Debug, Clone)]
pub struct Workspace {
    pub name: String,
    pub location: String,
}

/// Ordered mapping from workspace name to its location on disk.
pub type Catalog = IndexMap<String, String>;

/// Checks that the package manager is installed and answers a version query.
///
/// # Errors
///
/// Returns [`Error::PackageManagerMissing`] if the binary cannot be spawned
/// or reports a non-success exit.
pub fn verify_package_manager() -> Result<()> {
    let output = Command::new(PACKAGE_MANAGER)
        .arg("--version")
        .output()
        .map_err(|_| Error::PackageManagerMissing(PACKAGE_MANAGER.to_string()))?;

    if output.status.success() {
        debug!(
            "{PACKAGE_MANAGER} version: {}",
            String::from_utf8_lossy(&output.stdout).trim()
        );
        Ok(())
    } else {
        Err(Error::PackageManagerMissing(PACKAGE_MANAGER.to_string()))
    }
}

/// Loads the workspace catalog by invoking `yarn workspaces list --json`.
///
/// The catalog is rebuilt fresh on every invocation; nothing is cached.
///
/// # Errors
///
/// Returns [`Error::WorkspaceList`] if the listing command cannot be run,
/// exits with a non-success code, or produces undecodable output.
pub fn load_catalog() -> Result<Catalog> {
    let output = Command::new(PACKAGE_MANAGER)
        .args(["workspaces", "list", "--json"])
        .output()
        .map_err(|e| Error::workspace_list(e.to_string()))?;

    if !output.status.success() {
        return Err(Error::workspace_list(format!(
            "`{PACKAGE_MANAGER} workspaces list` exited with {}",
            output.status
        )));
    }

    parse_catalog(&String::from_utf8_lossy(&output.stdout))
}

/// Parses the newline-delimited JSON workspace listing.
///
/// Blank lines are skipped and the repository-root record (location `.`)
/// is filtered out, so the catalog only contains real sub-packages.
///
/// # Errors
///
/// Returns [`Error::WorkspaceList`] if any non-blank line fails to decode.
pub fn parse_catalog(raw: &str) -> Result<Catalog> {
    let mut catalog = Catalog::new();

    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let workspace: Workspace =
            serde_json::from_str(line).map_err(|e| Error::workspace_list(e.to_string()))?;

        if workspace.location == ROOT_LOCATION {
            debug!("Skipping root workspace `{}`", workspace.name);
            continue;
        }

        catalog.insert(workspace.name, workspace.location);
    }

    Ok(catalog)
}

//! Script catalog loading from a workspace manifest.

use std::fs::File;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Reserved script-list entry meaning "type a free-form command instead"
pub const RUN_SENTINEL: &str = "run";

const MANIFEST_FILE_NAME: &str = "package.json";

#[derive(Deserialize, Debug, Default)]
struct Manifest {
    // Declaration order matters for display, so not a HashMap
    #[serde(default)]
    scripts: IndexMap<String, String>,
}

/// Loads the invocable script names declared by a workspace's manifest.
///
/// A manifest with no `scripts` field yields no declared scripts without
/// failing. The `run` sentinel is unconditionally prepended so it is always
/// offered as the first choice.
///
/// # Errors
///
/// Returns an error if the manifest cannot be read or is not valid JSON.
/// The location came from the workspace catalog, so either is an
/// environment problem rather than a resolution miss.
pub fn load_scripts(workspace_location: &str) -> Result<Vec<String>> {
    let path = Path::new(workspace_location).join(MANIFEST_FILE_NAME);
    let path_display = path.display().to_string();

    let reader = File::open(&path)
        .map_err(|e| Error::io_error("manifest".to_string(), path_display.clone(), e))?;

    let manifest: Manifest = serde_json::from_reader(reader).map_err(|e| {
        Error::json_error(
            "reading".to_string(),
            "manifest".to_string(),
            path_display,
            e,
        )
    })?;

    let mut scripts: Vec<String> = manifest.scripts.into_keys().collect();
    scripts.insert(0, RUN_SENTINEL.to_string());

    Ok(scripts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_manifest(dir: &TempDir, contents: &str) -> String {
        fs::write(dir.path().join(MANIFEST_FILE_NAME), contents).unwrap();
        dir.path().to_str().unwrap().to_string()
    }

    #[test]
    fn test_load_scripts_sentinel_first() {
        let dir = TempDir::new().unwrap();
        let location = write_manifest(
            &dir,
            r#"{"name":"api","scripts":{"build":"tsc","test":"jest"}}"#,
        );

        let scripts = load_scripts(&location).unwrap();
        assert_eq!(scripts, vec!["run", "build", "test"]);
    }

    #[test]
    fn test_load_scripts_preserves_declaration_order() {
        let dir = TempDir::new().unwrap();
        let location = write_manifest(
            &dir,
            r#"{"scripts":{"zeta":"z","alpha":"a","mid":"m"}}"#,
        );

        let scripts = load_scripts(&location).unwrap();
        assert_eq!(scripts, vec!["run", "zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_load_scripts_missing_scripts_field() {
        let dir = TempDir::new().unwrap();
        let location = write_manifest(&dir, r#"{"name":"api","version":"1.0.0"}"#);

        let scripts = load_scripts(&location).unwrap();
        assert_eq!(scripts, vec!["run"]);
    }

    #[test]
    fn test_load_scripts_empty_scripts_object() {
        let dir = TempDir::new().unwrap();
        let location = write_manifest(&dir, r#"{"scripts":{}}"#);

        let scripts = load_scripts(&location).unwrap();
        assert_eq!(scripts, vec!["run"]);
    }

    #[test]
    fn test_load_scripts_missing_manifest() {
        let dir = TempDir::new().unwrap();
        let location = dir.path().to_str().unwrap().to_string();

        let result = load_scripts(&location);
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_load_scripts_malformed_manifest() {
        let dir = TempDir::new().unwrap();
        let location = write_manifest(&dir, "{not json");

        let result = load_scripts(&location);
        assert!(matches!(result, Err(Error::Json { .. })));
    }
}

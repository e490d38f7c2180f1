//! Input document loading for CLI commands.
//!
//! Documents are read as JSON when the file ends in `.json` and as YAML
//! otherwise (YAML also accepts JSON).

use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::debug;

use crate::error::{DocumentError, InventoryError, Result};
use crate::inventory::{ChangeSet, ExclusionSet, Inventory};
use crate::object::ExternalReference;

/// Reads and deserializes a document.
///
/// # Errors
///
/// Returns a document error if the file is missing or cannot be parsed.
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(DocumentError::NotFound {
            path: path.to_path_buf(),
        }
        .into());
    }

    let content = std::fs::read_to_string(path)?;
    let parse_error = |message: String| {
        InventoryError::Document(DocumentError::Parse {
            path: path.to_path_buf(),
            message,
        })
    };

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    debug!(
        "Reading {} document: {}",
        if is_json { "JSON" } else { "YAML" },
        path.display()
    );

    if is_json {
        serde_json::from_str(&content).map_err(|e| parse_error(e.to_string()))
    } else {
        serde_yaml::from_str(&content).map_err(|e| parse_error(e.to_string()))
    }
}

/// Loads an inventory document.
///
/// # Errors
///
/// Returns a document error if the file is missing or cannot be parsed.
pub fn load_inventory(path: &Path) -> Result<Inventory> {
    load_document(path)
}

/// Loads a change set document.
///
/// # Errors
///
/// Returns a document error if the file is missing or cannot be parsed.
pub fn load_change_set(path: &Path) -> Result<ChangeSet> {
    load_document(path)
}

/// Loads a list of external references.
///
/// # Errors
///
/// Returns a document error if the file is missing or cannot be parsed.
pub fn load_references(path: &Path) -> Result<Vec<ExternalReference>> {
    load_document(path)
}

/// Builds the exclusion set from command-line ids and an optional file.
///
/// The file holds one encoded identifier per line; blank lines and lines
/// starting with `#` are skipped.
///
/// # Errors
///
/// Returns an error if the file cannot be read or any id is malformed.
pub fn load_exclusions(ids: &[String], file: Option<&Path>) -> Result<ExclusionSet> {
    let mut all: Vec<String> = ids.to_vec();

    if let Some(file) = file {
        if !file.exists() {
            return Err(DocumentError::NotFound {
                path: file.to_path_buf(),
            }
            .into());
        }
        let content = std::fs::read_to_string(file)?;
        all.extend(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(String::from),
        );
    }

    ExclusionSet::from_ids(&all)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::ResourceIdentity;

    #[test]
    fn test_load_json_and_yaml_inventories() {
        let dir = tempfile::tempdir().unwrap();
        let json = dir.path().join("inv.json");
        let yaml = dir.path().join("inv.yaml");
        std::fs::write(&json, r#"{"entries":[{"id":"ns/foo/apps/Deployment","version":"v1"}]}"#).unwrap();
        std::fs::write(&yaml, "entries:\n  - id: ns/foo/apps/Deployment\n    v: v1\n").unwrap();

        assert_eq!(load_inventory(&json).unwrap(), load_inventory(&yaml).unwrap());
    }

    #[test]
    fn test_load_missing_document() {
        let err = load_inventory(Path::new("/no/such/inventory.json")).unwrap_err();
        assert!(matches!(err, InventoryError::Document(DocumentError::NotFound { .. })));
    }

    #[test]
    fn test_load_malformed_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inv.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = load_inventory(&path).unwrap_err();
        assert!(matches!(err, InventoryError::Document(DocumentError::Parse { .. })));
    }

    #[test]
    fn test_load_exclusions_from_file_and_args() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("skip.txt");
        std::fs::write(&path, "# managed elsewhere\nns/a/apps/Deployment\n\n/ns//Namespace\n").unwrap();

        let set = load_exclusions(&[String::from("ns/b/apps/Deployment")], Some(&path)).unwrap();
        assert_eq!(set.len(), 3);
        assert!(set.contains(&ResourceIdentity::new("", "Namespace", "", "ns")));
    }
}

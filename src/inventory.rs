//! Inventory snapshot loading and saving.
//!
//! Inventories live on disk as flat JSON objects mapping device names
//! to IP address strings. Loading returns a typed error so callers can
//! apply the best-effort policy themselves: a missing or malformed
//! snapshot collapses to an empty inventory at the call site, with the
//! failure still observable here.

use log::info;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Mapping from device name to IP address string.
///
/// A `BTreeMap` keeps listing and serialization order deterministic.
pub type Inventory = BTreeMap<String, String>;

/// Why an inventory snapshot could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read inventory snapshot: {0}")]
    Io(#[from] std::io::Error),
    #[error("inventory snapshot is not a JSON object of strings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Why a snapshot could not be written.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write snapshot: {0}")]
    Io(#[from] std::io::Error),
}

/// Load an inventory snapshot from a JSON file.
///
/// # Arguments
/// * `path` - Path to a JSON object of device-name -> IP string
///
/// # Returns
/// * `Ok(Inventory)` with the parsed mapping
/// * `Err(LoadError::Io)` if the file cannot be read
/// * `Err(LoadError::Parse)` if the contents are not such an object
pub fn load_inventory(path: &Path) -> Result<Inventory, LoadError> {
    let content = fs::read_to_string(path)?;
    let inventory: Inventory = serde_json::from_str(&content)?;
    info!("Loaded {} device(s) from {:?}", inventory.len(), path);
    Ok(inventory)
}

/// Write a value as a pretty-printed JSON snapshot.
///
/// Used for both session outputs: the updated-device mapping and the
/// invalid-address list.
pub fn save_snapshot<T: Serialize>(path: &Path, data: &T) -> Result<(), SaveError> {
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_inventory() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, r#"{{"router1": "1.1.1.1", "router2": "2.2.2.2"}}"#).unwrap();

        let inventory = load_inventory(temp_file.path()).unwrap();
        assert_eq!(inventory.len(), 2);
        assert_eq!(inventory.get("router1"), Some(&"1.1.1.1".to_string()));
        assert_eq!(inventory.get("router2"), Some(&"2.2.2.2".to_string()));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_inventory(&dir.path().join("no_such_file.txt"));
        assert!(matches!(result, Err(LoadError::Io(_))));
    }

    #[test]
    fn test_load_malformed_snapshot_is_parse_error() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "this is not json").unwrap();
        assert!(matches!(
            load_inventory(temp_file.path()),
            Err(LoadError::Parse(_))
        ));

        // Valid JSON of the wrong shape is malformed too
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, r#"["router1", "switch1"]"#).unwrap();
        assert!(matches!(
            load_inventory(temp_file.path()),
            Err(LoadError::Parse(_))
        ));
    }

    #[test]
    fn test_load_error_collapses_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let inventory = load_inventory(&dir.path().join("missing.txt")).unwrap_or_default();
        assert!(inventory.is_empty());
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let mut updated = Inventory::new();
        updated.insert("router1".to_string(), "10.10.10.10".to_string());
        updated.insert("switch2".to_string(), "10.10.10.20".to_string());

        let temp_file = NamedTempFile::new().unwrap();
        save_snapshot(temp_file.path(), &updated).unwrap();

        let reloaded = load_inventory(temp_file.path()).unwrap();
        assert_eq!(reloaded, updated);
    }

    #[test]
    fn test_save_snapshot_list_is_json_array() {
        let invalid = vec!["999.1.1.1".to_string(), "300.300.300.300".to_string()];
        let temp_file = NamedTempFile::new().unwrap();
        save_snapshot(temp_file.path(), &invalid).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        let reloaded: Vec<String> = serde_json::from_str(&content).unwrap();
        assert_eq!(reloaded, invalid);
    }
}

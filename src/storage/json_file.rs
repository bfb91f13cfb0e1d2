//! JSON file snapshot adapter.
//!
//! Persists the roster as a single pretty-printed JSON array of records
//! with integer `id`/`age` and string `name`/`class`. There is no
//! versioning field. Reads are forgiving: anything missing, unreadable,
//! or unparsable counts as no snapshot.

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;

use crate::roster::student::Student;
use crate::storage::{SnapshotStore, StorageError};

/// Snapshot store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Location of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> Option<Vec<Student>> {
        if !self.path.exists() {
            return None;
        }

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) => {
                warn!("failed to read snapshot {}: {err}", self.path.display());
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(records) => Some(records),
            Err(err) => {
                warn!("malformed snapshot {}: {err}", self.path.display());
                None
            }
        }
    }

    fn save(&self, roster: &[Student]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StorageError::Write {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let content = serde_json::to_string_pretty(roster)?;

        // Write-then-rename keeps the previous snapshot intact if the
        // write dies halfway.
        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, content).map_err(|e| StorageError::Write {
            path: tmp_path.clone(),
            source: e,
        })?;
        fs::rename(&tmp_path, &self.path).map_err(|e| StorageError::Write {
            path: self.path.clone(),
            source: e,
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn sample_roster() -> Vec<Student> {
        vec![
            Student {
                id: 1,
                name: "Nguyễn Văn A".to_string(),
                class: "CNTT1".to_string(),
                age: 20,
            },
            Student {
                id: 2,
                name: "Trần Thị B".to_string(),
                class: "CNTT2".to_string(),
                age: 21,
            },
        ]
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("roster.json"));
        assert!(store.load().is_none());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("roster.json"));

        let roster = sample_roster();
        store.save(&roster).unwrap();

        assert_eq!(store.load(), Some(roster));
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested").join("roster.json"));

        store.save(&sample_roster()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_load_malformed_json_is_none() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("roster.json");
        fs::write(&path, "{not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(store.load().is_none());
    }

    #[test]
    fn test_load_wrong_shape_is_none() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("roster.json");
        fs::write(&path, r#"{"students": []}"#).unwrap();

        let store = JsonFileStore::new(&path);
        assert!(store.load().is_none());
    }

    #[test]
    fn test_snapshot_uses_plain_field_names() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("roster.json"));
        store.save(&sample_roster()).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        for key in ["\"id\"", "\"name\"", "\"class\"", "\"age\""] {
            assert!(content.contains(key), "snapshot is missing {key}");
        }
    }
}

//! JSON file storage backend

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::KeyValueStorage;
use crate::error::Result;

/// Storage persisted as a single JSON object file.
///
/// The whole mapping is loaded on open and rewritten on every change. Writes
/// go to a sibling temp file which is then renamed over the target.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStorage {
    /// Open the storage file at `path`.
    ///
    /// A missing file is an empty mapping. A file that cannot be parsed is
    /// moved aside to `<name>.corrupt-<timestamp>` and treated as empty.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) => Self::parse_or_quarantine(&path, &raw)?,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No storage file at {}, starting empty", path.display());
                BTreeMap::new()
            }
            Err(error) => return Err(error.into()),
        };

        Ok(Self { path, entries })
    }

    fn parse_or_quarantine(path: &Path, raw: &str) -> Result<BTreeMap<String, String>> {
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        match serde_json::from_str(raw) {
            Ok(entries) => Ok(entries),
            Err(error) => {
                tracing::warn!(
                    "Storage file {} is not a valid key/value document: {}",
                    path.display(),
                    error
                );
                Self::quarantine_corrupted_file(path)?;
                Ok(BTreeMap::new())
            }
        }
    }

    fn quarantine_corrupted_file(path: &Path) -> Result<()> {
        let Some(base_name) = path.file_name().and_then(|name| name.to_str()) else {
            return Ok(());
        };
        let timestamp = chrono::Utc::now().timestamp_millis();
        let backup_path = path.with_file_name(format!("{base_name}.corrupt-{timestamp}"));

        std::fs::rename(path, &backup_path)?;
        tracing::warn!(
            "Moved corrupted storage file from {} to {}",
            path.display(),
            backup_path.display()
        );
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let serialized = serde_json::to_string_pretty(&self.entries)?;
        let mut temp_name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        temp_name.push(".tmp");
        let temp_path = self.path.with_file_name(temp_name);

        std::fs::write(&temp_path, serialized)?;
        std::fs::rename(&temp_path, &self.path)?;
        tracing::debug!("Wrote {} keys to {}", self.entries.len(), self.path.display());
        Ok(())
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let previous = self.entries.insert(key.to_string(), value.to_string());
        if let Err(error) = self.flush() {
            match previous {
                Some(previous) => self.entries.insert(key.to_string(), previous),
                None => self.entries.remove(key),
            };
            return Err(error);
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let Some(previous) = self.entries.remove(key) else {
            return Ok(());
        };
        if let Err(error) = self.flush() {
            self.entries.insert(key.to_string(), previous);
            return Err(error);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path().join("notes.json")).unwrap();
        assert_eq!(storage.get("notes").unwrap(), None);
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("notes.json");

        let mut storage = FileStorage::open(&path).unwrap();
        storage.set("notes", "[]").unwrap();
        storage.set("notesapp-bg", "ocean").unwrap();

        let reopened = FileStorage::open(&path).unwrap();
        assert_eq!(reopened.get("notes").unwrap().as_deref(), Some("[]"));
        assert_eq!(reopened.get("notesapp-bg").unwrap().as_deref(), Some("ocean"));
        assert!(!path.with_file_name("notes.json.tmp").exists());
    }

    #[test]
    fn test_remove_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");

        let mut storage = FileStorage::open(&path).unwrap();
        storage.set("notesapp-bg", "grid").unwrap();
        storage.remove("notesapp-bg").unwrap();

        let reopened = FileStorage::open(&path).unwrap();
        assert_eq!(reopened.get("notesapp-bg").unwrap(), None);
    }

    #[test]
    fn test_corrupted_file_is_quarantined() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");
        std::fs::write(&path, "{not json").unwrap();

        let storage = FileStorage::open(&path).unwrap();
        assert_eq!(storage.get("notes").unwrap(), None);
        assert!(!path.exists());

        let backups = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(std::result::Result::ok)
            .filter(|entry| {
                entry
                    .file_name()
                    .to_string_lossy()
                    .starts_with("notes.json.corrupt-")
            })
            .count();
        assert_eq!(backups, 1);
    }
}

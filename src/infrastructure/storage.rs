// src/infrastructure/storage.rs
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

use crate::application::KeyValueStore;
use crate::domain::DomainError;

const STORAGE_FILE_EXTENSION: &str = "json";

/// Durable store keeping one file per key under `directory`
#[derive(Debug, Clone)]
pub struct FileStore {
    directory: PathBuf,
}

impl FileStore {
    /// The directory is created lazily on first write
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn ensure_directory(&self) -> Result<(), DomainError> {
        if self.directory.as_os_str().is_empty() {
            return Ok(()); // current directory
        }
        fs::create_dir_all(&self.directory).map_err(|e| {
            DomainError::Cache(format!(
                "Failed to create cache directory {}: {e}",
                self.directory.display()
            ))
        })
    }

    fn file_path(&self, key: &str) -> PathBuf {
        self.directory
            .join(format!("{}.{STORAGE_FILE_EXTENSION}", sanitize_key(key)))
    }
}

impl KeyValueStore for FileStore {
    #[instrument(level = "trace", skip(self))]
    fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        let path = self.file_path(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DomainError::Cache(format!(
                "Failed to read {}: {e}",
                path.display()
            ))),
        }
    }

    #[instrument(level = "trace", skip(self, value))]
    fn set(&mut self, key: &str, value: &str) -> Result<(), DomainError> {
        self.ensure_directory()?;
        let path = self.file_path(key);
        // Write-then-rename keeps the previous value intact if the write is cut short
        let tmp_path = path.with_extension(format!("{STORAGE_FILE_EXTENSION}.tmp"));
        fs::write(&tmp_path, value)
            .and_then(|_| fs::rename(&tmp_path, &path))
            .map_err(|e| DomainError::Cache(format!("Failed to write {}: {e}", path.display())))?;
        debug!(key, bytes = value.len(), "Stored cache entry");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), DomainError> {
        let path = self.file_path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DomainError::Cache(format!(
                "Failed to remove {}: {e}",
                path.display()
            ))),
        }
    }
}

/// Process-local store; contents vanish with the value
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), DomainError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), DomainError> {
        self.entries.remove(key);
        Ok(())
    }
}

fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn given_missing_key_when_getting_then_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().join("cache"));

        assert_eq!(store.get("notes").unwrap(), None);
    }

    #[test]
    fn given_value_when_setting_then_creates_directory_and_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileStore::new(temp_dir.path().join("nested/cache"));

        store.set("draft", r#"{"title":"A"}"#).unwrap();

        assert!(temp_dir.path().join("nested/cache/draft.json").exists());
        assert_eq!(store.get("draft").unwrap().as_deref(), Some(r#"{"title":"A"}"#));
    }

    #[test]
    fn given_two_stores_on_same_directory_when_reading_then_sees_other_writes() {
        let temp_dir = TempDir::new().unwrap();
        let mut writer = FileStore::new(temp_dir.path());
        let reader = FileStore::new(temp_dir.path());

        writer.set("notes", "[]").unwrap();

        assert_eq!(reader.get("notes").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn given_stored_key_when_removing_twice_then_both_succeed() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileStore::new(temp_dir.path());
        store.set("sessionAuthenticated", "true").unwrap();

        store.remove("sessionAuthenticated").unwrap();
        store.remove("sessionAuthenticated").unwrap();

        assert_eq!(store.get("sessionAuthenticated").unwrap(), None);
    }

    #[test]
    fn given_key_with_path_separators_when_storing_then_stays_inside_directory() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileStore::new(temp_dir.path().join("cache"));

        store.set("../escape", "x").unwrap();

        assert!(temp_dir.path().join("cache/___escape.json").exists());
        assert!(!temp_dir.path().join("escape.json").exists());
    }

    #[test]
    fn given_memory_store_when_overwriting_then_last_write_wins() {
        let mut store = MemoryStore::new();

        store.set("notes", "1").unwrap();
        store.set("notes", "2").unwrap();

        assert_eq!(store.get("notes").unwrap().as_deref(), Some("2"));
    }
}

// src/application/local_cache.rs
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::constants::{DRAFT_KEY, NOTES_KEY};
use crate::domain::{DomainError, Draft, Note};

/// Device-scoped durable string storage.
///
/// A missing key is `Ok(None)`, never an error.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, DomainError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), DomainError>;

    fn remove(&mut self, key: &str) -> Result<(), DomainError>;
}

/// Typed view over a [`KeyValueStore`] holding the last note snapshot and the draft
#[derive(Debug, Clone)]
pub struct LocalCache<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> LocalCache<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn save_snapshot(&mut self, notes: &[Note]) -> Result<(), DomainError> {
        debug!(count = notes.len(), "Writing note snapshot");
        self.write_json(NOTES_KEY, notes)
    }

    pub fn load_snapshot(&self) -> Result<Option<Vec<Note>>, DomainError> {
        self.read_json(NOTES_KEY)
    }

    pub fn save_draft(&mut self, draft: &Draft) -> Result<(), DomainError> {
        self.write_json(DRAFT_KEY, draft)
    }

    pub fn load_draft(&self) -> Result<Option<Draft>, DomainError> {
        self.read_json(DRAFT_KEY)
    }

    fn write_json<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), DomainError> {
        let serialized = serde_json::to_string(value)
            .map_err(|e| DomainError::Cache(format!("Failed to serialize {key}: {e}")))?;
        self.store.set(key, &serialized)
    }

    // Undecodable entries read as absent so a damaged cache never blocks fallback
    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, DomainError> {
        let Some(raw) = self.store.get(key)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!(key, error = %e, "Ignoring undecodable cache entry");
                Ok(None)
            }
        }
    }
}

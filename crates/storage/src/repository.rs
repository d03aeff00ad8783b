use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("conflict")]
    Conflict,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Repository contract for string entries stored under string keys.
///
/// Each call is atomic: a value is either fully written or not written at all.
#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// Fetch the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn get_entry(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Insert or replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be stored.
    async fn put_entry(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the entry under `key`. Deleting a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend rejects the delete.
    async fn remove_entry(&self, key: &str) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl EntryRepository for InMemoryRepository {
    async fn get_entry(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn put_entry(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn remove_entry(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(key);
        Ok(())
    }
}

/// Wraps the entry backend behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub entries: Arc<dyn EntryRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let entries: Arc<dyn EntryRepository> = Arc::new(InMemoryRepository::new());
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_replaces_previous_value() {
        let repo = InMemoryRepository::new();
        repo.put_entry("plan", "{\"a\":1}").await.unwrap();
        repo.put_entry("plan", "{\"a\":2}").await.unwrap();

        let value = repo.get_entry("plan").await.unwrap();
        assert_eq!(value.as_deref(), Some("{\"a\":2}"));
    }

    #[tokio::test]
    async fn remove_is_idempotent() {
        let repo = InMemoryRepository::new();
        repo.put_entry("plan", "x").await.unwrap();
        repo.remove_entry("plan").await.unwrap();
        repo.remove_entry("plan").await.unwrap();

        assert_eq!(repo.get_entry("plan").await.unwrap(), None);
    }

    #[tokio::test]
    async fn clones_share_entries() {
        let repo = InMemoryRepository::new();
        let other = repo.clone();
        repo.put_entry("k", "v").await.unwrap();
        assert_eq!(other.get_entry("k").await.unwrap().as_deref(), Some("v"));
        assert_eq!(other.get_entry("missing").await.unwrap(), None);
    }
}

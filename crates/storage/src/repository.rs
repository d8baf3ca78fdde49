use async_trait::async_trait;
use belajar_core::model::UnitId;
use belajar_core::model::content::{Unit, UnitSummary};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("io error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Durable key-value storage for serialized records.
///
/// Each key holds one opaque text value that is replaced wholesale on write.
#[async_trait]
pub trait BlobRepository: Send + Sync {
    /// Fetch the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn get_blob(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be stored.
    async fn put_blob(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    async fn delete_blob(&self, key: &str) -> Result<(), StorageError>;
}

/// Read-only access to bundled course content.
pub trait ContentRepository: Send + Sync {
    /// Unit index in display order.
    fn list_units(&self) -> Vec<UnitSummary>;

    /// Full content for a unit, if it has been authored.
    fn get_unit(&self, id: UnitId) -> Option<Arc<Unit>>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    blobs: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlobRepository for InMemoryRepository {
    async fn get_blob(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self.blobs.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(guard.get(key).cloned())
    }

    async fn put_blob(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self.blobs.lock().unwrap_or_else(PoisonError::into_inner);
        guard.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn delete_blob(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self.blobs.lock().unwrap_or_else(PoisonError::into_inner);
        guard.remove(key);
        Ok(())
    }
}

/// Aggregates the repositories the application needs.
#[derive(Clone)]
pub struct Storage {
    pub blobs: Arc<dyn BlobRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let blobs: Arc<dyn BlobRepository> = Arc::new(InMemoryRepository::new());
        Self { blobs }
    }
}

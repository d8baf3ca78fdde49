#![forbid(unsafe_code)]

pub mod content;
pub mod repository;
pub mod sqlite;

pub use content::JsonContentRepository;
pub use repository::{BlobRepository, ContentRepository, InMemoryRepository, Storage, StorageError};

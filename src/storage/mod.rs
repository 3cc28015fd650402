mod fs;
mod memory;

use async_trait::async_trait;
pub use fs::FileStore;
pub use memory::MemoryStore;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("The data is invalid: {0}")]
    InvalidData(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}

/// Abstract interface for the blob stores backing the waitlist.
///
/// Values are opaque UTF-8 blobs under fixed string keys; a write replaces
/// the whole blob.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Store the value identified by the given key
    async fn store(&self, key: &str, value: &str) -> Result<(), StorageError>;
    /// Get the value specified by the given key
    async fn load(&self, key: &str) -> Result<Option<String>, StorageError>;
    /// Delete the value associated with the given key
    async fn delete(&self, key: &str) -> Result<(), StorageError>;
}

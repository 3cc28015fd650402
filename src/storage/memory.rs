use std::{
    collections::HashMap,
    sync::RwLock,
};

use async_trait::async_trait;

use super::{Storage, StorageError};

/// In-memory blob store for tests and ephemeral runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryStore {
    async fn store(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.read().unwrap().get(key).cloned())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.entries.write().unwrap().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_round_trip() {
        let store = MemoryStore::new();

        store.store("waitlist_entries", "[]").await.unwrap();
        assert_eq!(
            store.load("waitlist_entries").await.unwrap().as_deref(),
            Some("[]")
        );

        store.delete("waitlist_entries").await.unwrap();
        assert!(store.load("waitlist_entries").await.unwrap().is_none());
    }
}

#[cfg(test)]
pub mod test {
    use std::sync::Arc;

    use async_trait::async_trait;

    use crate::{
        assets::AssetCatalog,
        config::{AssetsConfig, AudioConfig, FormConfig, ForwarderConfig, SheetConfig},
        forwarder::Forwarder,
        storage::{MemoryStore, Storage, StorageError},
        utils::state::AppState,
        waitlist::{WaitlistLedger, WaitlistService},
    };

    /// Forwarder configuration with every sink disabled.
    pub fn disabled_forwarder_config() -> ForwarderConfig {
        ForwarderConfig {
            form: FormConfig {
                enabled: false,
                submission_url: String::new(),
                email_field_id: String::new(),
            },
            sheet: SheetConfig {
                enabled: false,
                api_base: "https://sheets.googleapis.com".to_string(),
                spreadsheet_id: String::new(),
                api_key: String::new().into(),
                sheet_name: "Sheet1".to_string(),
            },
        }
    }

    pub fn default_assets_config() -> AssetsConfig {
        AssetsConfig {
            base_url: String::new(),
            audio: AudioConfig {
                normal: "/audio/normaltone.mp3".to_string(),
                personalized: "/audio/realistictone.mp3".to_string(),
                background: "/audio/bgmusic.mp3".to_string(),
            },
            image_dir: "/images".to_string(),
            animation_dir: "/animations".to_string(),
        }
    }

    /// App state backed by an in-memory store and a disabled forwarder.
    pub fn test_app_state() -> AppState {
        test_app_state_with(Arc::new(MemoryStore::new()))
    }

    pub fn test_app_state_with(store: Arc<dyn Storage>) -> AppState {
        let ledger = WaitlistLedger::new(store);
        let forwarder = Forwarder::new(disabled_forwarder_config());

        AppState {
            waitlist: Arc::new(WaitlistService::new(ledger, forwarder)),
            assets: Arc::new(AssetCatalog::from_config(&default_assets_config())),
        }
    }

    /// Store whose reads always fail, simulating corrupted local storage.
    /// Writes still land in the wrapped store so tests can inspect them.
    pub struct ReadFailingStore {
        pub inner: Arc<MemoryStore>,
    }

    #[async_trait]
    impl Storage for ReadFailingStore {
        async fn store(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.inner.store(key, value).await
        }

        async fn load(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Io(std::io::Error::other(
                "simulated read failure",
            )))
        }

        async fn delete(&self, key: &str) -> Result<(), StorageError> {
            self.inner.delete(key).await
        }
    }
}

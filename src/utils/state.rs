use std::sync::Arc;

use crate::{
    assets::AssetCatalog,
    config::Config,
    forwarder::Forwarder,
    storage::FileStore,
    waitlist::{WaitlistLedger, WaitlistService},
};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub waitlist: Arc<WaitlistService>,
    pub assets: Arc<AssetCatalog>,
}

/// Build the application state from configuration.
pub fn setup(config: &Config) -> AppState {
    let store = Arc::new(FileStore::new(config.storage.data_dir.clone()));
    let ledger = WaitlistLedger::new(store);
    let forwarder = Forwarder::new(config.forwarder.clone());

    AppState {
        waitlist: Arc::new(WaitlistService::new(ledger, forwarder)),
        assets: Arc::new(AssetCatalog::from_config(&config.assets)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sealed_test::prelude::*;

    #[sealed_test(env = [("APP_STORAGE__DATA_DIR", "./target/test-data")])]
    fn test_setup_builds_state_from_config() {
        let config = Config::load().expect("Failed to load config");
        let state = setup(&config);

        assert!(state.assets.resolve("audio.normal").is_some());
    }
}

use std::sync::Arc;

use chrono::Utc;

use crate::{
    models::{SignupRecord, WaitlistStats},
    storage::{Storage, StorageError},
};

/// Storage keys inherited from the original landing page blobs.
pub const RECORDS_KEY: &str = "waitlist_entries";
pub const STATS_KEY: &str = "waitlist_stats";

/// Append-only store of signup records plus the derived stats blob.
///
/// Reads fail soft: a missing, unreadable or unparsable records blob is
/// treated as an empty ledger rather than an error.
#[derive(Clone)]
pub struct WaitlistLedger {
    store: Arc<dyn Storage>,
}

impl WaitlistLedger {
    pub fn new(store: Arc<dyn Storage>) -> Self {
        Self { store }
    }

    /// All records, oldest first.
    pub async fn load(&self) -> Vec<SignupRecord> {
        let blob = match self.store.load(RECORDS_KEY).await {
            Ok(Some(blob)) => blob,
            Ok(None) => return Vec::new(),
            Err(err) => {
                tracing::warn!("Failed to read waitlist entries, treating ledger as empty: {err}");
                return Vec::new();
            }
        };

        match serde_json::from_str(&blob) {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(
                    "Stored waitlist entries are unparsable, treating ledger as empty: {err}"
                );
                Vec::new()
            }
        }
    }

    /// Append one record, rewriting the whole records blob, then recompute
    /// and persist the stats blob. A stats write failure is logged and does
    /// not fail the append.
    pub async fn append(&self, record: SignupRecord) -> Result<WaitlistStats, StorageError> {
        let mut records = self.load().await;
        records.push(record);

        let blob = serde_json::to_string(&records)
            .map_err(|err| StorageError::InvalidData(err.to_string()))?;
        self.store.store(RECORDS_KEY, &blob).await?;

        let stats = WaitlistStats::compute(&records, Utc::now());
        match serde_json::to_string(&stats) {
            Ok(blob) => {
                if let Err(err) = self.store.store(STATS_KEY, &blob).await {
                    tracing::error!("Failed to save waitlist stats: {err}");
                }
            }
            Err(err) => tracing::error!("Failed to serialize waitlist stats: {err}"),
        }

        Ok(stats)
    }

    /// Stored stats if present and parsable, else recomputed from the ledger.
    pub async fn load_stats(&self) -> WaitlistStats {
        if let Ok(Some(blob)) = self.store.load(STATS_KEY).await {
            match serde_json::from_str(&blob) {
                Ok(stats) => return stats,
                Err(err) => {
                    tracing::warn!(
                        "Stored waitlist stats are unparsable, recomputing from the ledger: {err}"
                    );
                }
            }
        }
        WaitlistStats::compute(&self.load().await, Utc::now())
    }
}

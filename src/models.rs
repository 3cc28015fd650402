use chrono::Utc;
use rand::distr::{Alphanumeric, SampleString};
use serde::{Deserialize, Serialize};

/// A single confirmed signup, as persisted in the ledger blob.
///
/// Records are created once and never mutated or removed. The email is the
/// natural key: the ledger never holds two records for the same address.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRecord {
    pub id: String,
    pub email: String,
    /// Creation time, milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl SignupRecord {
    /// Build a record for an already normalized (lower-cased) email.
    pub fn new(email: String) -> Self {
        let timestamp = Utc::now().timestamp_millis();
        let suffix = Alphanumeric.sample_string(&mut rand::rng(), 9);
        Self {
            id: format!("{timestamp}{suffix}"),
            email,
            timestamp,
        }
    }
}

/// Derived aggregate over the ledger, persisted for fast reads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistStats {
    pub total_signups: u64,
    /// Signups within the trailing 24 hours.
    pub recent_signups: u64,
}

/// Request payload for joining the waitlist.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupResponse {
    pub success: bool,
    pub already_exists: bool,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_signups: u64,
    pub recent_signups: u64,
    /// Compact display form of the total, e.g. "1.5k".
    pub formatted_total: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResponse {
    pub email: String,
    pub signed_up: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AssetResponse {
    pub key: String,
    pub url: String,
}

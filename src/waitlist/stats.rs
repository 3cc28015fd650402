use chrono::{DateTime, Duration, Utc};

use crate::models::{SignupRecord, WaitlistStats};

impl WaitlistStats {
    /// Derive the aggregate from the full ledger at the given instant.
    pub fn compute(records: &[SignupRecord], now: DateTime<Utc>) -> Self {
        let day_ago = (now - Duration::hours(24)).timestamp_millis();
        let recent = records.iter().filter(|r| r.timestamp >= day_ago).count();

        Self {
            total_signups: records.len() as u64,
            recent_signups: recent as u64,
        }
    }
}

/// Compact display form of a signup count: "41", "1.5k", "12k+".
pub fn format_signup_count(count: u64) -> String {
    if count < 1000 {
        count.to_string()
    } else if count < 10_000 {
        format!("{}k", (count / 100) as f64 / 10.0)
    } else {
        format!("{}k+", count / 1000)
    }
}

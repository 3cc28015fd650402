use tokio::sync::Mutex;

use crate::{
    forwarder::{ForwardOutcome, Forwarder},
    models::{SignupRecord, WaitlistStats},
};

use super::{format_signup_count, WaitlistLedger};

/// Result of a signup attempt.
///
/// The local write is the definitive success signal; forwarding is advisory
/// and a failed forward never negates `success`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupOutcome {
    pub success: bool,
    pub already_exists: bool,
    pub forwarding: ForwardOutcome,
}

/// Orchestrates the ledger and the external forwarder behind one entry point.
pub struct WaitlistService {
    ledger: WaitlistLedger,
    forwarder: Forwarder,
    // Serializes check-then-append so two concurrent signups for the same
    // email cannot both pass the duplicate scan.
    write_lock: Mutex<()>,
}

impl WaitlistService {
    pub fn new(ledger: WaitlistLedger, forwarder: Forwarder) -> Self {
        Self {
            ledger,
            forwarder,
            write_lock: Mutex::new(()),
        }
    }

    /// Register an email on the waitlist.
    ///
    /// Duplicates are reported, not written and not forwarded. A storage
    /// write failure is logged and the signup still reported as successful.
    pub async fn add_signup(&self, email: &str) -> SignupOutcome {
        let email = email.trim().to_lowercase();

        let record = {
            let _guard = self.write_lock.lock().await;

            let records = self.ledger.load().await;
            if records.iter().any(|r| r.email.to_lowercase() == email) {
                tracing::info!(%email, "Email is already on the waitlist");
                return SignupOutcome {
                    success: false,
                    already_exists: true,
                    forwarding: ForwardOutcome::Skipped,
                };
            }

            let record = SignupRecord::new(email.clone());
            if let Err(err) = self.ledger.append(record.clone()).await {
                tracing::error!(%email, "Failed to persist waitlist entry: {err}");
            }
            record
        };

        let forwarding = self.forwarder.forward(&email, record.timestamp).await;
        match forwarding {
            ForwardOutcome::Delivered => tracing::debug!(%email, "Signup forwarded"),
            ForwardOutcome::Skipped => {}
            ForwardOutcome::Failed => {
                tracing::warn!(%email, "Forwarding failed, signup kept locally only")
            }
        }

        SignupOutcome {
            success: true,
            already_exists: false,
            forwarding,
        }
    }

    /// Current waitlist statistics.
    pub async fn get_stats(&self) -> WaitlistStats {
        self.ledger.load_stats().await
    }

    /// Whether the email already has a ledger record, case-insensitively.
    pub async fn is_signed_up(&self, email: &str) -> bool {
        let email = email.trim().to_lowercase();
        self.ledger
            .load()
            .await
            .iter()
            .any(|r| r.email.to_lowercase() == email)
    }

    /// Compact display form of the total signup count.
    pub async fn formatted_count(&self) -> String {
        format_signup_count(self.get_stats().await.total_signups)
    }
}

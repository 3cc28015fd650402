mod form;
mod sheet;

use chrono::DateTime;
use thiserror::Error;

use crate::config::ForwarderConfig;

/// What happened to the external replication of one signup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ForwardOutcome {
    /// No sink is configured, or the signup never reached the forwarding step.
    Skipped,
    /// Every enabled sink accepted the dispatch.
    Delivered,
    /// At least one enabled sink failed. The signup is still kept locally.
    Failed,
}

#[derive(Debug, Error)]
pub enum ForwarderError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Sink rejected the submission with status {0}")]
    Rejected(reqwest::StatusCode),
}

/// Best-effort replication of signups to the configured external sinks.
///
/// One attempt per sink per signup; no retries, no queue. Failures are
/// logged and reported as an outcome, never as an error.
pub struct Forwarder {
    client: reqwest::Client,
    config: ForwarderConfig,
}

impl Forwarder {
    pub fn new(config: ForwarderConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.config.form.enabled || self.config.sheet.enabled
    }

    /// Fire one submission per enabled sink.
    pub async fn forward(&self, email: &str, timestamp_ms: i64) -> ForwardOutcome {
        if !self.is_configured() {
            return ForwardOutcome::Skipped;
        }

        let mut failed = false;

        if self.config.form.enabled {
            if let Err(err) =
                form::submit(&self.client, &self.config.form, email, timestamp_ms).await
            {
                tracing::warn!("Form submission failed: {err}");
                failed = true;
            }
        }

        if self.config.sheet.enabled {
            if let Err(err) =
                sheet::append_row(&self.client, &self.config.sheet, email, timestamp_ms).await
            {
                tracing::warn!("Sheet append failed: {err}");
                failed = true;
            }
        }

        if failed {
            ForwardOutcome::Failed
        } else {
            ForwardOutcome::Delivered
        }
    }
}

// RFC 3339 rendering of a record timestamp for the external sinks.
pub(crate) fn iso_timestamp(timestamp_ms: i64) -> String {
    DateTime::from_timestamp_millis(timestamp_ms)
        .unwrap_or(DateTime::UNIX_EPOCH)
        .to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test::disabled_forwarder_config;

    #[tokio::test]
    async fn test_forward_without_sinks_is_skipped() {
        let forwarder = Forwarder::new(disabled_forwarder_config());

        assert!(!forwarder.is_configured());
        let outcome = forwarder.forward("user@example.com", 0).await;
        assert_eq!(outcome, ForwardOutcome::Skipped);
    }

    #[test]
    fn test_iso_timestamp_renders_rfc3339() {
        assert_eq!(iso_timestamp(0), "1970-01-01T00:00:00+00:00");
        assert_eq!(iso_timestamp(1_500_000_000_000), "2017-07-14T02:40:00+00:00");
    }

    #[test]
    fn test_iso_timestamp_out_of_range_falls_back_to_epoch() {
        assert_eq!(iso_timestamp(i64::MAX), "1970-01-01T00:00:00+00:00");
    }
}

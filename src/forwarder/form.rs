use reqwest::{multipart::Form, Client};

use crate::config::FormConfig;

use super::{iso_timestamp, ForwarderError};

/// Dispatch the signup as a multipart form post.
///
/// The original page submits in no-cors mode, so the response cannot be
/// inspected: only a transport-level error counts as failure, the HTTP
/// status does not.
pub(super) async fn submit(
    client: &Client,
    config: &FormConfig,
    email: &str,
    timestamp_ms: i64,
) -> Result<(), ForwarderError> {
    let form = Form::new()
        .text(config.email_field_id.clone(), email.to_string())
        .text("timestamp", iso_timestamp(timestamp_ms));

    client
        .post(&config.submission_url)
        .multipart(form)
        .send()
        .await?;

    Ok(())
}

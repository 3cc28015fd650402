use reqwest::Client;
use secrecy::ExposeSecret;
use serde_json::json;

use crate::config::SheetConfig;

use super::{iso_timestamp, ForwarderError};

/// Append the signup as a new spreadsheet row.
///
/// Unlike the form sink, the append API responds normally, so a non-2xx
/// status is a failure.
pub(super) async fn append_row(
    client: &Client,
    config: &SheetConfig,
    email: &str,
    timestamp_ms: i64,
) -> Result<(), ForwarderError> {
    let response = client
        .post(append_url(config))
        .json(&row_payload(email, timestamp_ms))
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(ForwarderError::Rejected(response.status()));
    }
    Ok(())
}

// `.../values/{sheet}:append` with the API key as a query parameter. The key
// must never appear in logs.
fn append_url(config: &SheetConfig) -> String {
    format!(
        "{}/v4/spreadsheets/{}/values/{}:append?valueInputOption=RAW&key={}",
        config.api_base.trim_end_matches('/'),
        config.spreadsheet_id,
        config.sheet_name,
        config.api_key.expose_secret(),
    )
}

fn row_payload(email: &str, timestamp_ms: i64) -> serde_json::Value {
    json!({ "values": [[email, iso_timestamp(timestamp_ms)]] })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet_config() -> SheetConfig {
        SheetConfig {
            enabled: true,
            api_base: "https://sheets.googleapis.com".to_string(),
            spreadsheet_id: "1a2b3c".to_string(),
            api_key: "the-key".to_string().into(),
            sheet_name: "Sheet1".to_string(),
        }
    }

    #[test]
    fn test_append_url_shape() {
        assert_eq!(
            append_url(&sheet_config()),
            "https://sheets.googleapis.com/v4/spreadsheets/1a2b3c/values/Sheet1:append?valueInputOption=RAW&key=the-key"
        );
    }

    #[test]
    fn test_append_url_tolerates_trailing_slash_in_base() {
        let mut config = sheet_config();
        config.api_base = "https://sheets.googleapis.com/".to_string();

        assert!(append_url(&config)
            .starts_with("https://sheets.googleapis.com/v4/spreadsheets/1a2b3c"));
    }

    #[test]
    fn test_row_payload_is_one_row_of_email_and_timestamp() {
        let payload = row_payload("user@example.com", 0);

        assert_eq!(
            payload,
            json!({ "values": [["user@example.com", "1970-01-01T00:00:00+00:00"]] })
        );
    }
}

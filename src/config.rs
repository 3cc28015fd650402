use std::path::PathBuf;

use config::{Config as ConfigLib, ConfigError, Environment};
use secrecy::SecretString;
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_bool_from_anything;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub forwarder: ForwarderConfig,
    pub assets: AssetsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the persisted waitlist blobs.
    pub data_dir: PathBuf,
}

/// External sinks a new signup is replicated to. Both may be enabled at once.
#[derive(Debug, Clone, Deserialize)]
pub struct ForwarderConfig {
    pub form: FormConfig,
    pub sheet: SheetConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FormConfig {
    #[serde(deserialize_with = "deserialize_bool_from_anything")]
    pub enabled: bool,
    /// The form's submission endpoint, not its human-facing view URL.
    pub submission_url: String,
    pub email_field_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SheetConfig {
    #[serde(deserialize_with = "deserialize_bool_from_anything")]
    pub enabled: bool,
    pub api_base: String,
    pub spreadsheet_id: String,
    pub api_key: SecretString,
    pub sheet_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetsConfig {
    /// Prefix for every resolved asset URL, empty for same-origin paths.
    pub base_url: String,
    pub audio: AudioConfig,
    pub image_dir: String,
    pub animation_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AudioConfig {
    pub normal: String,
    pub personalized: String,
    pub background: String,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        // Build the config
        let config = ConfigLib::builder()
            // Set default values
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("storage.data_dir", "./data")?
            .set_default("forwarder.form.enabled", true)?
            .set_default(
                "forwarder.form.submission_url",
                "https://docs.google.com/forms/d/e/1FAIpQLSeEN03u9EGQ6wVte-6-hVBvbQ8GmJAG0-GvaokwkCPFMbbYyA/formResponse",
            )?
            .set_default("forwarder.form.email_field_id", "entry.551667936")?
            .set_default("forwarder.sheet.enabled", false)?
            .set_default("forwarder.sheet.api_base", "https://sheets.googleapis.com")?
            .set_default("forwarder.sheet.spreadsheet_id", "")?
            .set_default("forwarder.sheet.api_key", "")?
            .set_default("forwarder.sheet.sheet_name", "Sheet1")?
            .set_default("assets.base_url", "")?
            .set_default("assets.audio.normal", "/audio/normaltone.mp3")?
            .set_default("assets.audio.personalized", "/audio/realistictone.mp3")?
            .set_default("assets.audio.background", "/audio/bgmusic.mp3")?
            .set_default("assets.image_dir", "/images")?
            .set_default("assets.animation_dir", "/animations")?
            // Override config values via environment variables
            // The environment variables should be prefixed with 'APP_' and use '__' as a separator
            // Example: APP_FORWARDER__SHEET__ENABLED=true
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        config.try_deserialize()
    }
}

use std::collections::HashMap;

use crate::config::AssetsConfig;

/// Narration audio variant for a story preview.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioKind {
    Normal,
    Personalized,
}

const FEATURE_IMAGES: &[(&str, &str)] = &[
    ("image.features.normal", "normalasset.jpg"),
    ("image.features.personalized", "personalisedasset.jpg"),
];

const INTERACTIVE_IMAGES: &[&str] = &[
    "accessibility1.jpg",
    "accessibility2.jpg",
    "values1.jpeg",
    "values2.jpeg",
    "alive1.jpg",
    "alive2.jpg",
    "imagine1.jpg",
    "imagine2.jpg",
];

const ANIMATIONS: &[(&str, &str)] = &[
    ("animation.mimi", "mimi-animation.json"),
    ("animation.arrow", "arrow-animation.json"),
];

/// Deterministic mapping from canonical asset key to exactly one URL.
///
/// Built once from configuration; resolving never probes candidate paths or
/// touches the network. An unknown key resolves to nothing.
pub struct AssetCatalog {
    entries: HashMap<String, String>,
}

impl AssetCatalog {
    pub fn from_config(config: &AssetsConfig) -> Self {
        let base = config.base_url.trim_end_matches('/');
        let image_dir = config.image_dir.trim_end_matches('/');
        let animation_dir = config.animation_dir.trim_end_matches('/');

        let mut entries = HashMap::new();
        let mut insert = |key: String, path: String| {
            entries.insert(key, format!("{base}{path}"));
        };

        insert("audio.normal".to_string(), config.audio.normal.clone());
        insert(
            "audio.personalized".to_string(),
            config.audio.personalized.clone(),
        );
        insert(
            "audio.background".to_string(),
            config.audio.background.clone(),
        );

        for (key, file) in FEATURE_IMAGES {
            insert(key.to_string(), format!("{image_dir}/{file}"));
        }
        for file in INTERACTIVE_IMAGES {
            let stem = file.split('.').next().unwrap_or(file);
            insert(
                format!("image.interactive.{stem}"),
                format!("{image_dir}/{file}"),
            );
        }
        for (key, file) in ANIMATIONS {
            insert(key.to_string(), format!("{animation_dir}/{file}"));
        }

        Self { entries }
    }

    /// Resolve a canonical asset key to its configured URL.
    pub fn resolve(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Narration audio for a story preview mode.
    pub fn story_audio(&self, kind: AudioKind) -> Option<&str> {
        match kind {
            AudioKind::Normal => self.resolve("audio.normal"),
            AudioKind::Personalized => self.resolve("audio.personalized"),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

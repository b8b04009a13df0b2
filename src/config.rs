use serde::Deserialize;
use std::path::Path;

use crate::labels::Language;
use crate::progress::SortKey;

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "PROGRESSBOARD_CONFIG";

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SourceConfig {
    /// `http(s)://` URL, `file://` URL or plain path of the progress document.
    pub url: String,
    /// Append `ts=<unix millis>` to HTTP requests.
    pub cache_bust: bool,
    /// No timeout when unset.
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    pub language: Language,
    pub default_sort: String,
    /// Used when the document has no title of its own.
    pub page_title: Option<String>,
    pub window_width: f64,
    pub window_height: f64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1:8000/progress.json".into(),
            cache_bust: true,
            timeout_secs: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            language: Language::It,
            default_sort: SortKey::RangeAsc.as_str().into(),
            page_title: None,
            window_width: 1000.0,
            window_height: 800.0,
        }
    }
}

impl UiConfig {
    pub fn sort_key(&self) -> SortKey {
        let key = SortKey::from_key(&self.default_sort);
        if key.as_str() != self.default_sort.trim() {
            tracing::warn!(
                "Unknown sort key {:?}, falling back to {}",
                self.default_sort,
                key.as_str()
            );
        }
        key
    }

    pub fn fallback_title(&self) -> &str {
        self.page_title
            .as_deref()
            .unwrap_or(self.language.labels().page_title)
    }
}

impl Config {
    /// Load config from a TOML file. Falls back to defaults if file doesn't exist.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!("Config file {} not found, using defaults", path.display());
            return Self::default();
        }
        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    tracing::info!("Config loaded from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {e}, using defaults", path.display());
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read {}: {e}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Config path from `PROGRESSBOARD_CONFIG`, or `config.toml`.
    pub fn default_path() -> String {
        std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| "config.toml".into())
    }
}

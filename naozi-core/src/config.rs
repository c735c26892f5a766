//! Configuration management
//!
//! Settings live in `settings.json` inside the Naozi directory:
//! ```json
//! {
//!   "apiUrl": "https://script.google.com/macros/s/.../exec"
//! }
//! ```
//! Fields this client does not manage are preserved on save.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Default production Apps Script deployment
pub const NAOZI_PRODUCTION_URL: &str =
    "https://script.google.com/macros/s/naozi-print-orders/exec";

/// Environment variable to override the backend URL.
/// Set this to use a staging deployment or a mock server in tests.
pub const NAOZI_API_URL_ENV: &str = "NAOZI_API_URL";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    api_url: Option<String>,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// Naozi client configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Fully resolved backend URL
    pub api_url: String,
    // Keep the raw settings for preservation when saving
    _raw_settings: SettingsFile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: NAOZI_PRODUCTION_URL.to_string(),
            _raw_settings: SettingsFile::default(),
        }
    }
}

impl Config {
    /// Load config from the Naozi directory.
    ///
    /// The backend URL resolves in priority order:
    /// 1. `NAOZI_API_URL` environment variable (CI/testing/staging)
    /// 2. `apiUrl` in settings.json
    /// 3. The production deployment
    pub fn load(naozi_dir: &Path) -> Result<Self> {
        let settings_path = naozi_dir.join("settings.json");

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        let api_url = match std::env::var(NAOZI_API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => url,
            _ => raw
                .api_url
                .clone()
                .unwrap_or_else(|| NAOZI_PRODUCTION_URL.to_string()),
        };

        Ok(Self {
            api_url,
            _raw_settings: raw,
        })
    }

    /// Save config to the Naozi directory, preserving settings this client
    /// does not manage.
    pub fn save(&self, naozi_dir: &Path) -> Result<()> {
        let settings_path = naozi_dir.join("settings.json");

        let mut settings = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str::<SettingsFile>(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        settings.api_url = Some(self.api_url.clone());

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }
}

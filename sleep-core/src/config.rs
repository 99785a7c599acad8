//! Configuration management
//!
//! Settings live in `settings.json` under the app directory:
//! ```json
//! {
//!   "app": { "apiBaseUrl": "http://localhost:4000", "degradeToDemo": true, ... }
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

const DEFAULT_API_BASE_URL: &str = "http://localhost:4000";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    app: AppSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default = "default_api_base_url")]
    api_base_url: String,
    #[serde(default = "default_degrade_to_demo")]
    degrade_to_demo: bool,
    #[serde(default)]
    recompute_price_on_edit: bool,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_degrade_to_demo() -> bool {
    true
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            degrade_to_demo: default_degrade_to_demo(),
            recompute_price_on_edit: false,
            other: HashMap::new(),
        }
    }
}

/// Sleep configuration (simplified view of settings)
#[derive(Debug, Clone)]
pub struct Config {
    /// Base address of the REST backend
    pub api_base_url: String,
    /// Substitute demo fixtures / simulated successes when the backend
    /// is unreachable, instead of surfacing errors
    pub degrade_to_demo: bool,
    /// Recompute the booking total from the new date range on edit.
    /// Off by default: the total is frozen at creation time.
    pub recompute_price_on_edit: bool,
    // Keep the raw settings for preservation when saving
    _raw_settings: SettingsFile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            degrade_to_demo: true,
            recompute_price_on_edit: false,
            _raw_settings: SettingsFile::default(),
        }
    }
}

impl Config {
    /// Load config from the app directory
    ///
    /// Env overrides (for CI/testing):
    /// - `SLEEP_API_BASE` replaces the base URL
    /// - `SLEEP_DEGRADE_TO_DEMO` toggles the degradation policy
    pub fn load(app_dir: &Path) -> Result<Self> {
        let settings_path = app_dir.join("settings.json");

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        let api_base_url = std::env::var("SLEEP_API_BASE")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| raw.app.api_base_url.clone());

        let degrade_to_demo = match std::env::var("SLEEP_DEGRADE_TO_DEMO").ok().as_deref() {
            Some("true" | "1" | "yes" | "TRUE" | "YES") => true,
            Some("false" | "0" | "no" | "FALSE" | "NO") => false,
            _ => raw.app.degrade_to_demo,
        };

        Ok(Self {
            api_base_url,
            degrade_to_demo,
            recompute_price_on_edit: raw.app.recompute_price_on_edit,
            _raw_settings: raw,
        })
    }

    /// Save config to the app directory, preserving unmanaged settings
    pub fn save(&self, app_dir: &Path) -> Result<()> {
        let settings_path = app_dir.join("settings.json");

        let mut settings = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str::<SettingsFile>(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        settings.app.api_base_url = self.api_base_url.clone();
        settings.app.degrade_to_demo = self.degrade_to_demo;
        settings.app.recompute_price_on_edit = self.recompute_price_on_edit;

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_when_no_settings_file() {
        let tmp = TempDir::new().unwrap();
        let config = Config::load(tmp.path()).unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert!(config.degrade_to_demo);
        assert!(!config.recompute_price_on_edit);
    }

    #[test]
    fn test_round_trip_preserves_unmanaged_fields() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join("settings.json"),
            r#"{"app":{"apiBaseUrl":"http://10.0.2.2:4000","theme":"dark"}}"#,
        )
        .unwrap();

        let mut config = Config::load(tmp.path()).unwrap();
        assert_eq!(config.api_base_url, "http://10.0.2.2:4000");

        config.degrade_to_demo = false;
        config.save(tmp.path()).unwrap();

        let content = std::fs::read_to_string(tmp.path().join("settings.json")).unwrap();
        assert!(content.contains("theme"));
        assert!(content.contains("\"degradeToDemo\": false"));
    }
}

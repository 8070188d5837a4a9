//! Configuration management
//!
//! Settings live in `settings.json` in the data directory:
//! ```json
//! {
//!   "app": { "demoMode": false, ... }
//! }
//! ```
//! Fields this crate does not manage are preserved on save.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const SETTINGS_FILENAME: &str = "settings.json";
pub const STORE_FILENAME: &str = "daylog.duckdb";
pub const DEMO_STORE_FILENAME: &str = "demo.duckdb";

/// Environment variable overriding `app.demoMode`
pub const DEMO_MODE_ENV: &str = "DAYLOG_DEMO_MODE";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    app: AppSettings,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default)]
    demo_mode: bool,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

impl SettingsFile {
    /// Read settings.json; a missing or unreadable file yields defaults
    fn read(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(serde_json::from_str(&content).unwrap_or_default())
    }
}

/// Parse a boolean-ish environment value
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

/// Daylog configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub demo_mode: bool,
}

impl Config {
    /// Load config from the data directory
    ///
    /// `DAYLOG_DEMO_MODE` takes precedence over the settings file.
    pub fn load(daylog_dir: &Path) -> Result<Self> {
        let raw = SettingsFile::read(&daylog_dir.join(SETTINGS_FILENAME))?;

        let demo_mode = std::env::var(DEMO_MODE_ENV)
            .ok()
            .and_then(|v| parse_flag(&v))
            .unwrap_or(raw.app.demo_mode);

        Ok(Self { demo_mode })
    }

    /// Write the managed fields back, keeping everything else in the file
    pub fn save(&self, daylog_dir: &Path) -> Result<()> {
        let settings_path = daylog_dir.join(SETTINGS_FILENAME);
        let mut settings = SettingsFile::read(&settings_path)?;
        settings.app.demo_mode = self.demo_mode;

        std::fs::create_dir_all(daylog_dir)
            .with_context(|| format!("Failed to create {}", daylog_dir.display()))?;
        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)
            .with_context(|| format!("Failed to write {}", settings_path.display()))?;
        Ok(())
    }

    pub fn enable_demo_mode(&mut self) {
        self.demo_mode = true;
    }

    pub fn disable_demo_mode(&mut self) {
        self.demo_mode = false;
    }

    /// Store file for the current mode
    pub fn store_filename(&self) -> &'static str {
        if self.demo_mode {
            DEMO_STORE_FILENAME
        } else {
            STORE_FILENAME
        }
    }

    pub fn store_path(&self, daylog_dir: &Path) -> PathBuf {
        daylog_dir.join(self.store_filename())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_settings_default() {
        let dir = tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.store_path(dir.path()), dir.path().join("daylog.duckdb"));
    }

    #[test]
    fn test_save_preserves_unknown_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILENAME);
        std::fs::write(&path, r#"{"app":{"demoMode":false,"lastView":"expenses"},"extra":[1,2]}"#)
            .unwrap();

        let config = Config { demo_mode: true };
        config.save(dir.path()).unwrap();

        let saved: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved["app"]["demoMode"], true);
        assert_eq!(saved["app"]["lastView"], "expenses");
        assert_eq!(saved["extra"], serde_json::json!([1, 2]));
    }

    #[test]
    fn test_demo_store_filename() {
        let mut config = Config::default();
        assert_eq!(config.store_filename(), "daylog.duckdb");
        config.enable_demo_mode();
        assert_eq!(config.store_filename(), "demo.duckdb");
        config.disable_demo_mode();
        assert_eq!(config.store_filename(), "daylog.duckdb");
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("YES"), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}

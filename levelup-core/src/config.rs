//! Configuration management
//!
//! Settings live in `settings.json` inside the LevelUp directory:
//! ```json
//! {
//!   "api": { "baseUrl": "https://api.levelup.com/v1" }
//! }
//! ```
//! Keys this crate does not manage are preserved on save.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use url::Url;

/// Production API origin and version prefix
pub const DEFAULT_BASE_URL: &str = "https://api.levelup.com/v1";

/// Environment variable overriding the API base URL
pub const BASE_URL_ENV: &str = "LEVELUP_BASE_URL";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    api: ApiSettings,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    base_url: Option<String>,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// LevelUp configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Load config from the LevelUp directory
    ///
    /// The base URL can be set via:
    /// 1. Environment variable LEVELUP_BASE_URL (for testing against a local server)
    /// 2. Settings file
    /// 3. The built-in default
    pub fn load(levelup_dir: &Path) -> Result<Self> {
        let raw = read_settings(levelup_dir)?;
        let base_url = resolve_base_url(
            std::env::var(BASE_URL_ENV).ok().as_deref(),
            raw.api.base_url.as_deref(),
        );

        Ok(Self { base_url })
    }

    /// Save config to the LevelUp directory
    /// Preserves other settings that the CLI doesn't manage
    pub fn save(&self, levelup_dir: &Path) -> Result<()> {
        let settings_path = levelup_dir.join("settings.json");

        let mut settings = read_settings(levelup_dir)?;
        settings.api.base_url = if self.is_default() {
            None
        } else {
            Some(self.base_url.clone())
        };

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)
            .with_context(|| format!("Failed to write {:?}", settings_path))?;
        Ok(())
    }

    /// Set the API base URL; must be an absolute http(s) URL
    pub fn set_base_url(&mut self, base_url: &str) -> Result<()> {
        let normalized = resolve_base_url(Some(base_url), None);
        let parsed = Url::parse(&normalized)
            .with_context(|| format!("Invalid base URL: {}", base_url))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            bail!("Base URL must use http or https: {}", base_url);
        }
        self.base_url = normalized;
        Ok(())
    }

    pub fn is_default(&self) -> bool {
        self.base_url == DEFAULT_BASE_URL
    }
}

/// Read settings.json, falling back to defaults when missing or unreadable JSON
fn read_settings(levelup_dir: &Path) -> Result<SettingsFile> {
    let settings_path = levelup_dir.join("settings.json");
    if !settings_path.exists() {
        return Ok(SettingsFile::default());
    }
    let content = std::fs::read_to_string(&settings_path)
        .with_context(|| format!("Failed to read {:?}", settings_path))?;
    Ok(serde_json::from_str(&content).unwrap_or_default())
}

/// Pick the effective base URL: environment, then file, then default
///
/// Blank values are ignored and a trailing slash is dropped so endpoint
/// paths can be appended directly.
pub fn resolve_base_url(env_value: Option<&str>, file_value: Option<&str>) -> String {
    let chosen = [env_value, file_value]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|v| !v.is_empty())
        .unwrap_or(DEFAULT_BASE_URL);
    chosen.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_resolve_precedence() {
        assert_eq!(resolve_base_url(None, None), DEFAULT_BASE_URL);
        assert_eq!(
            resolve_base_url(None, Some("https://staging.levelup.com/v1")),
            "https://staging.levelup.com/v1"
        );
        assert_eq!(
            resolve_base_url(Some("http://127.0.0.1:8080"), Some("https://staging.levelup.com/v1")),
            "http://127.0.0.1:8080"
        );
    }

    #[test]
    fn test_resolve_ignores_blank_and_trailing_slash() {
        assert_eq!(resolve_base_url(Some("  "), Some("https://a.example/v2/")), "https://a.example/v2");
    }

    #[test]
    fn test_missing_settings_use_defaults() {
        let dir = tempdir().unwrap();
        let raw = read_settings(dir.path()).unwrap();
        assert!(raw.api.base_url.is_none());
    }

    #[test]
    fn test_save_preserves_unknown_keys() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{"api": {"baseUrl": "https://old.example/v1", "region": "eu"}, "theme": "dark"}"#,
        )
        .unwrap();

        let mut config = Config::default();
        config.set_base_url("https://new.example/v1").unwrap();
        config.save(dir.path()).unwrap();

        let raw = read_settings(dir.path()).unwrap();
        assert_eq!(raw.api.base_url.as_deref(), Some("https://new.example/v1"));
        assert_eq!(raw.api.other.get("region"), Some(&serde_json::json!("eu")));
        assert_eq!(raw.other.get("theme"), Some(&serde_json::json!("dark")));
    }

    #[test]
    fn test_set_base_url_validates() {
        let mut config = Config::default();
        assert!(config.set_base_url("not a url").is_err());
        assert!(config.set_base_url("ftp://files.example").is_err());
        assert!(config.is_default());

        config.set_base_url("http://127.0.0.1:8080/v1/").unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:8080/v1");
    }

    #[test]
    fn test_save_default_clears_key_and_reloads() {
        let dir = tempdir().unwrap();
        let mut config = Config::default();
        config.set_base_url("https://staging.levelup.com/v1").unwrap();
        config.save(dir.path()).unwrap();
        assert_eq!(
            read_settings(dir.path()).unwrap().api.base_url.as_deref(),
            Some("https://staging.levelup.com/v1")
        );

        config.set_base_url(DEFAULT_BASE_URL).unwrap();
        config.save(dir.path()).unwrap();
        assert!(read_settings(dir.path()).unwrap().api.base_url.is_none());
    }

    #[test]
    fn test_corrupt_settings_fall_back() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("settings.json"), "{ not json").unwrap();

        let raw = read_settings(dir.path()).unwrap();
        assert!(raw.api.base_url.is_none());
    }
}

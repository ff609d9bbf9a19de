use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::error::{Result, TranslateError};
use crate::fs::atomic_write;
use crate::paths;

/// Built-in default service.
pub const DEFAULT_SERVICE: &str = "youdao";
/// Built-in default source language (provider-side detection).
pub const DEFAULT_SOURCE_LANG: &str = "auto";
/// Built-in default target language.
pub const DEFAULT_TARGET_LANG: &str = "en";

/// Provider-issued credential pair used to sign requests.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    pub app_key: String,
    pub app_secret: String,
}

impl Credential {
    pub fn new(app_key: impl Into<String>, app_secret: impl Into<String>) -> Self {
        Self {
            app_key: app_key.into(),
            app_secret: app_secret.into(),
        }
    }

    /// Parses a credential supplied on the command line as JSON,
    /// e.g. `{"appKey":"...","appSecret":"..."}`.
    ///
    /// Both fields must be present and non-empty.
    pub fn from_json(input: &str) -> Result<Self> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct RawCredential {
            app_key: Option<String>,
            app_secret: Option<String>,
        }

        let raw: RawCredential = serde_json::from_str(input)
            .map_err(|e| TranslateError::ConfigFormat(e.to_string()))?;

        match (raw.app_key, raw.app_secret) {
            (Some(app_key), Some(app_secret)) if !app_key.is_empty() && !app_secret.is_empty() => {
                Ok(Self::new(app_key, app_secret))
            }
            _ => Err(TranslateError::ConfigFormat(
                "appKey and appSecret must both be non-empty".to_string(),
            )),
        }
    }

    /// Returns `true` if both halves of the pair are set.
    pub fn is_complete(&self) -> bool {
        !self.app_key.is_empty() && !self.app_secret.is_empty()
    }

    /// The app key with everything but its first four characters hidden.
    pub fn masked_key(&self) -> String {
        let visible: String = self.app_key.chars().take(4).collect();
        if visible.chars().count() < self.app_key.chars().count() {
            format!("{visible}****")
        } else {
            "****".to_string()
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("app_key", &self.masked_key())
            .field("app_secret", &"<redacted>")
            .finish()
    }
}

/// The persisted configuration document.
///
/// Stored as TOML at `~/.config/translate/config.toml`:
///
/// ```toml
/// defaultService = "youdao"
/// defaultSourceLang = "auto"
/// defaultTargetLang = "en"
///
/// [apiKeys.youdao]
/// appKey = "..."
/// appSecret = "..."
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub default_service: String,
    pub default_source_lang: String,
    pub default_target_lang: String,
    /// Credentials keyed by service name.
    pub api_keys: BTreeMap<String, Credential>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_service: DEFAULT_SERVICE.to_string(),
            default_source_lang: DEFAULT_SOURCE_LANG.to_string(),
            default_target_lang: DEFAULT_TARGET_LANG.to_string(),
            api_keys: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Returns the credential for `service` if a complete one is stored.
    pub fn credential(&self, service: &str) -> Option<&Credential> {
        self.api_keys.get(service).filter(|c| c.is_complete())
    }

    pub fn has_credential(&self, service: &str) -> bool {
        self.credential(service).is_some()
    }
}

/// Loads and saves the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a manager for `$XDG_CONFIG_HOME/translate/config.toml`
    /// or `~/.config/translate/config.toml`.
    pub fn new() -> Result<Self> {
        let dir = paths::config_dir().ok_or(TranslateError::ConfigDir)?;
        Ok(Self::with_path(dir.join("config.toml")))
    }

    /// Creates a manager backed by an explicit file.
    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn exists(&self) -> bool {
        self.config_path.exists()
    }

    pub fn load(&self) -> Result<Config> {
        let contents =
            fs::read_to_string(&self.config_path).map_err(|source| TranslateError::ConfigIo {
                path: self.config_path.clone(),
                source,
            })?;

        toml::from_str(&contents).map_err(|source| TranslateError::ConfigParse {
            path: self.config_path.clone(),
            source,
        })
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).map_err(|source| TranslateError::ConfigIo {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let contents = toml::to_string_pretty(config)?;

        atomic_write(&self.config_path, &contents).map_err(|source| TranslateError::ConfigIo {
            path: self.config_path.clone(),
            source,
        })
    }

    /// Reads the config, writing the built-in defaults first if no file exists yet.
    ///
    /// An existing file is never overwritten here, so user edits survive.
    pub fn load_or_seed(&self) -> Result<Config> {
        if self.exists() {
            return self.load();
        }

        tracing::debug!(path = %self.config_path.display(), "seeding default configuration");
        let config = Config::default();
        self.save(&config)?;
        Ok(config)
    }

    /// Applies `change` to the current config and persists the result.
    pub fn update<F>(&self, change: F) -> Result<Config>
    where
        F: FnOnce(&mut Config),
    {
        let mut config = self.load_or_seed()?;
        change(&mut config);
        self.save(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_manager(temp_dir: &TempDir) -> ConfigManager {
        ConfigManager::with_path(temp_dir.path().join("config.toml"))
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        let mut config = Config {
            default_service: "deepseek".to_string(),
            default_source_lang: "en".to_string(),
            default_target_lang: "ja".to_string(),
            ..Config::default()
        };
        config
            .api_keys
            .insert("deepseek".to_string(), Credential::new("key", "secret"));

        manager.save(&config).unwrap();
        let loaded = manager.load().unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_saved_layout_uses_camel_case_keys() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        let mut config = Config::default();
        config
            .api_keys
            .insert("youdao".to_string(), Credential::new("k", "s"));
        manager.save(&config).unwrap();

        let raw = fs::read_to_string(manager.config_path()).unwrap();
        assert!(raw.contains("defaultService = \"youdao\""));
        assert!(raw.contains("defaultSourceLang = \"auto\""));
        assert!(raw.contains("defaultTargetLang = \"en\""));
        assert!(raw.contains("[apiKeys.youdao]"));
        assert!(raw.contains("appKey = \"k\""));
        assert!(raw.contains("appSecret = \"s\""));
    }

    #[test]
    fn test_load_nonexistent_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        let result = manager.load();
        assert!(matches!(result, Err(TranslateError::ConfigIo { .. })));
    }

    #[test]
    fn test_load_malformed_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        fs::write(manager.config_path(), "defaultService = [").unwrap();

        let result = manager.load();
        assert!(matches!(result, Err(TranslateError::ConfigParse { .. })));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        fs::write(manager.config_path(), "defaultTargetLang = \"ko\"\n").unwrap();

        let loaded = manager.load().unwrap();
        assert_eq!(loaded.default_service, DEFAULT_SERVICE);
        assert_eq!(loaded.default_source_lang, DEFAULT_SOURCE_LANG);
        assert_eq!(loaded.default_target_lang, "ko");
    }

    #[test]
    fn test_load_or_seed_writes_defaults_once() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        let seeded = manager.load_or_seed().unwrap();
        assert_eq!(seeded, Config::default());
        assert!(manager.exists());

        manager
            .update(|config| config.default_target_lang = "fr".to_string())
            .unwrap();

        let reloaded = manager.load_or_seed().unwrap();
        assert_eq!(reloaded.default_target_lang, "fr");
    }

    #[test]
    fn test_credential_from_json() {
        let credential =
            Credential::from_json(r#"{"appKey":"abc","appSecret":"xyz"}"#).unwrap();
        assert_eq!(credential, Credential::new("abc", "xyz"));
    }

    #[test]
    fn test_credential_from_json_missing_secret() {
        let result = Credential::from_json(r#"{"appKey":"abc"}"#);
        assert!(matches!(result, Err(TranslateError::ConfigFormat(_))));
    }

    #[test]
    fn test_credential_from_json_empty_key() {
        let result = Credential::from_json(r#"{"appKey":"","appSecret":"xyz"}"#);
        assert!(matches!(result, Err(TranslateError::ConfigFormat(_))));
    }

    #[test]
    fn test_credential_from_json_not_json() {
        let result = Credential::from_json("appKey=abc");
        assert!(matches!(result, Err(TranslateError::ConfigFormat(_))));
    }

    #[test]
    fn test_credential_debug_hides_secret() {
        let credential = Credential::new("60e4479f", "super-secret");
        let debug = format!("{credential:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("60e4****"));
    }

    #[test]
    fn test_masked_key_short_key() {
        assert_eq!(Credential::new("abc", "s").masked_key(), "****");
    }

    #[test]
    fn test_incomplete_credential_is_ignored() {
        let mut config = Config::default();
        config
            .api_keys
            .insert("youdao".to_string(), Credential::new("key", ""));

        assert!(!config.has_credential("youdao"));
        assert!(config.credential("deepseek").is_none());
    }
}

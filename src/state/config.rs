//! Application configuration with persistence.
//!
//! The configuration file is stored at:
//! - Linux: `~/.config/lazybolt/config.json`
//! - macOS: `~/Library/Application Support/lazybolt/config.json`
//! - Windows: `%APPDATA%/lazybolt/config.json`

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::locale::Language;
use crate::state::platform::paths::AppPaths;
use crate::theme::Theme;

// ============================================================================
// AppConfig
// ============================================================================

/// Persisted user preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    /// Display language.
    #[serde(default)]
    pub language: Language,
    /// Colour palette.
    #[serde(default)]
    pub theme: Theme,
    /// Mask every sensitive value.
    #[serde(default)]
    pub privacy_mode: bool,
    /// Store file override; the data directory is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_path: Option<PathBuf>,
}

impl AppConfig {
    /// Returns the path to the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined
    /// or created.
    pub fn config_path() -> Result<PathBuf> {
        AppPaths::new().config_file()
    }

    /// Loads the configuration from disk, falling back to defaults.
    #[must_use]
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(err) => {
                tracing::info!("Config load failed, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Attempts to load the configuration from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined, the file cannot be
    /// read, or the JSON cannot be parsed.
    pub fn try_load() -> Result<Self> {
        let content = fs::read_to_string(Self::config_path()?)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Saves the configuration to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined, or the file cannot
    /// be written.
    pub fn save(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(Self::config_path()?, content)?;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.language, Language::En);
        assert_eq!(config.theme, Theme::Dark);
        assert!(!config.privacy_mode);
        assert!(config.store_path.is_none());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"privacy_mode":true}"#).unwrap();
        assert!(config.privacy_mode);
        assert_eq!(config.language, Language::En);
    }

    #[rstest]
    #[case::dark_en(Theme::Dark, Language::En, None)]
    #[case::light_es(Theme::Light, Language::Es, Some(PathBuf::from("/tmp/store.json")))]
    fn test_serialization_roundtrip(
        #[case] theme: Theme,
        #[case] language: Language,
        #[case] store_path: Option<PathBuf>,
    ) {
        let config = AppConfig {
            language,
            theme,
            privacy_mode: true,
            store_path,
        };
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_store_path_omitted_when_unset() {
        let json = serde_json::to_string(&AppConfig::default()).unwrap();
        assert!(!json.contains("store_path"));
    }
}

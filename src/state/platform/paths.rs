//! Platform-specific locations for configuration, storage, and logs.
//!
//! | Platform | Config Dir | Data Dir |
//! |----------|------------|----------|
//! | Linux | `~/.config/lazybolt` | `~/.local/share/lazybolt` |
//! | macOS | `~/Library/Application Support/lazybolt` | Same as config |
//! | Windows | `%APPDATA%/lazybolt` | `%APPDATA%/lazybolt` |
//!
//! The data directory holds the key-value store (`storage.json`) and the
//! log file (`lazybolt.log`).

use color_eyre::Result;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Constants
// ============================================================================

/// Application name used for directory naming.
pub const APP_NAME: &str = "lazybolt";

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Log file name.
pub const LOG_FILE_NAME: &str = "lazybolt.log";

// ============================================================================
// AppPaths
// ============================================================================

/// Resolves application directories, creating them on first use.
#[derive(Debug, Clone)]
pub struct AppPaths {
    app_name: String,
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}

impl AppPaths {
    /// Creates a new `AppPaths` with the default application name.
    #[must_use]
    pub fn new() -> Self {
        Self {
            app_name: APP_NAME.to_string(),
        }
    }

    /// Returns the configuration directory, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be determined or created.
    pub fn config_dir(&self) -> Result<PathBuf> {
        let mut path = dirs::config_dir().ok_or_else(|| {
            color_eyre::eyre::eyre!(
                "Could not determine config directory. Expected XDG_CONFIG_HOME or ~/.config on Linux, ~/Library/Application Support on macOS, %APPDATA% on Windows"
            )
        })?;
        path.push(&self.app_name);
        fs::create_dir_all(&path)?;
        Ok(path)
    }

    /// Returns the data directory, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be determined or created.
    pub fn data_dir(&self) -> Result<PathBuf> {
        let mut path = dirs::data_dir()
            .ok_or_else(|| color_eyre::eyre::eyre!("Could not find data directory"))?;
        path.push(&self.app_name);
        fs::create_dir_all(&path)?;
        Ok(path)
    }

    /// Returns the path to the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined or created.
    pub fn config_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Returns the path to the log file.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be determined or created.
    pub fn log_file(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join(LOG_FILE_NAME))
    }
}

// ============================================================================
// Tests
// ============================================================================

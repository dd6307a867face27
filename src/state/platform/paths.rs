//! Platform-specific path helpers for configuration and data directories.
//!
//! | Platform | Config Dir | Data Dir (logs) |
//! |----------|------------|-----------------|
//! | Linux | `~/.config/lazysui` | `~/.local/share/lazysui` |
//! | macOS | `~/Library/Application Support/lazysui` | Same as config |
//! | Windows | `%APPDATA%/lazysui` | `%APPDATA%/lazysui` |

use color_eyre::Result;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Constants
// ============================================================================

/// Application name used for directory naming.
pub const APP_NAME: &str = "lazysui";

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Log file name.
pub const LOG_FILE_NAME: &str = "lazysui.log";

// ============================================================================
// AppPaths
// ============================================================================

/// Resolves the application's directories and files.
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
        let mut path = self.config_dir()?;
        path.push(CONFIG_FILE_NAME);
        Ok(path)
    }

    /// Returns the path to the log file.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be determined or created.
    pub fn log_file(&self) -> Result<PathBuf> {
        let mut path = self.data_dir()?;
        path.push(LOG_FILE_NAME);
        Ok(path)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        if let Ok(path) = AppPaths::new().config_file() {
            assert!(path.ends_with("lazysui/config.json"));
        }
        if let Ok(path) = AppPaths::new().log_file() {
            assert!(path.ends_with("lazysui/lazysui.log"));
        }
    }

    #[test]
    fn test_default_uses_app_name() {
        assert_eq!(AppPaths::default().app_name, APP_NAME);
    }
}

//! Application configuration with persistence.
//!
//! The configuration file is stored at:
//! - Linux: `~/.config/lazysui/config.json`
//! - macOS: `~/Library/Application Support/lazysui/config.json`
//! - Windows: `%APPDATA%/lazysui/config.json`
//!
//! # Example
//!
//! ```ignore
//! use crate::state::AppConfig;
//!
//! let mut config = AppConfig::load();
//! config.use_static_data = true;
//! config.save()?;
//! ```

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::domain::{CustomNetwork, Network, NetworkConfig};

use super::platform::AppPaths;

/// Log filter used when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// ============================================================================
// AppConfig
// ============================================================================

/// Application configuration, serialized to JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// The selected network.
    pub network: NetworkConfig,
    /// User-defined networks, listed after the built-in ones.
    pub custom_networks: Vec<CustomNetwork>,
    /// Read from the static dataset instead of the network.
    pub use_static_data: bool,
    /// Dataset file replacing the bundled one.
    pub static_data_path: Option<PathBuf>,
    /// `tracing` filter directive, e.g. `debug` or `lazysui=trace`.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            network: NetworkConfig::default(),
            custom_networks: Vec::new(),
            use_static_data: false,
            static_data_path: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
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
                tracing::warn!(error = %err, "config load failed, using defaults");
                Self::default()
            }
        }
    }

    /// Attempts to load the configuration from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration path cannot be determined
    /// - The file cannot be read
    /// - The JSON content cannot be parsed
    pub fn try_load() -> Result<Self> {
        let path = Self::config_path()?;
        let content = fs::read_to_string(&path)?;
        Self::from_json(&content)
    }

    /// Parses a configuration document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON content cannot be parsed.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Saves the configuration to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined, or the file cannot
    /// be serialized or written.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Returns all available networks: built-in first, then custom.
    #[must_use]
    pub fn get_all_networks(&self) -> Vec<NetworkConfig> {
        let mut networks: Vec<NetworkConfig> =
            Network::ALL.into_iter().map(NetworkConfig::BuiltIn).collect();
        networks.extend(
            self.custom_networks
                .iter()
                .cloned()
                .map(NetworkConfig::Custom),
        );
        networks
    }

    /// Finds a network by name, case-insensitively.
    #[must_use]
    pub fn find_network(&self, name: &str) -> Option<NetworkConfig> {
        self.get_all_networks()
            .into_iter()
            .find(|network| network.name().eq_ignore_ascii_case(name))
    }
}

// ============================================================================
// Tests
// ============================================================================

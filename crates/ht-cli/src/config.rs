//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use ht_core::DEFAULT_CAPACITY;
use serde::{Deserialize, Serialize};

/// Narrowest activity column that still fits a truncation marker.
pub const MIN_LABEL_WIDTH: usize = 4;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Maximum number of records kept in a session.
    pub capacity: usize,

    /// Width of the activity column in listings and reports.
    pub label_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            label_width: 18,
        }
    }
}

impl Config {
    /// Loads configuration from default locations.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load() -> Result<Self, figment::Error> {
        Self::load_from(None)
    }

    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (HT_*)
        figment = figment.merge(Env::prefixed("HT_"));

        figment.extract()
    }

    /// Activity column width, never narrower than [`MIN_LABEL_WIDTH`].
    pub fn effective_label_width(&self) -> usize {
        self.label_width.max(MIN_LABEL_WIDTH)
    }
}

/// Returns the platform-specific config directory for ht.
///
/// On Linux: `~/.config/ht`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("ht"))
}
